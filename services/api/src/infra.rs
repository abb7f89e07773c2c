use matriz_riesgos::config::AppConfig;
use matriz_riesgos::error::AppError;
use matriz_riesgos::{ClassificationService, ModelRegistry, RawAttributeRecord};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn read_record(path: &Path) -> Result<RawAttributeRecord, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Loads every domain model from `models_dir`, or the configured directory.
pub(crate) fn load_service(models_dir: Option<PathBuf>) -> Result<ClassificationService, AppError> {
    let dir = match models_dir {
        Some(dir) => dir,
        None => AppConfig::load()?.models_dir,
    };
    let registry = ModelRegistry::load(&dir)?;
    Ok(ClassificationService::new(registry))
}
