use std::collections::HashSet;

/// Working sequence of recommendation strings accumulated in rule order.
#[derive(Debug, Default, Clone)]
pub struct RecommendationList {
    items: Vec<&'static str>,
}

impl RecommendationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, recommendation: &'static str) {
        self.items.push(recommendation);
    }

    pub fn extend(&mut self, recommendations: &[&'static str]) {
        self.items.extend_from_slice(recommendations);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stable de-duplication (first occurrence wins) followed by truncation.
    pub fn finish(self, cap: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .into_iter()
            .filter(|item| seen.insert(*item))
            .take(cap)
            .map(str::to_string)
            .collect()
    }
}
