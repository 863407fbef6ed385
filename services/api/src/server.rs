use crate::cli::ServeArgs;
use crate::infra::{load_registry, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use health_risk::config::AppConfig;
use health_risk::error::AppError;
use health_risk::service::AssessmentService;
use health_risk::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(registry) = args.registry.take() {
        config.models.registry_path = Some(registry);
    }

    telemetry::init(&config.telemetry)?;

    let registry = load_registry(config.models.registry_path.as_deref())?;
    let models = registry.names().join(", ");
    let service = Arc::new(AssessmentService::new(Arc::new(registry)));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        %models,
        "health risk service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
