use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use matriz_riesgos::config::AppConfig;
use matriz_riesgos::error::AppError;
use matriz_riesgos::telemetry;
use matriz_riesgos::{ClassificationService, ModelRegistry};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.listen.host = host;
    }
    if let Some(port) = args.port.take() {
        config.listen.port = port;
    }
    if let Some(dir) = args.models_dir.take() {
        config.models_dir = dir;
    }

    telemetry::init(&config.log_level)?;

    // Every domain model must load before the listener binds.
    let registry = ModelRegistry::load(&config.models_dir)?;
    let service = Arc::new(ClassificationService::new(registry));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.listen.resolve()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        stage = ?config.stage,
        %addr,
        models = %config.models_dir.display(),
        "risk matrix classifier ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
