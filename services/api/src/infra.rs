use health_risk::ensemble::ModelRegistry;
use health_risk::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Registry file when configured, otherwise the built-in reference models.
/// A configured file that fails to load is fatal.
pub(crate) fn load_registry(path: Option<&Path>) -> Result<ModelRegistry, AppError> {
    match path {
        Some(path) => {
            let registry = ModelRegistry::from_path(path)?;
            info!(path = %path.display(), models = registry.len(), "model registry loaded");
            Ok(registry)
        }
        None => Ok(ModelRegistry::reference()),
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("unable to render result: {err}"),
    }
}
