use case_intel::config::AppConfig;
use case_intel::error::AppError;
use case_intel::telemetry::{self, LogSink};
use case_intel::CaseAnalysisEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared setup for one-shot CLI commands. Logs go to stderr so stdout stays parseable.
pub(crate) fn cli_engine() -> Result<CaseAnalysisEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    Ok(CaseAnalysisEngine::from_config(&config.rules)?)
}
