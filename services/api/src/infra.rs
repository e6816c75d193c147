use chrono::NaiveDate;
use loan_engine::config::ConfigError;
use loan_engine::decision::{DecisionConfig, DecisionEngine, EstonianIdentityCodeValidator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type ServiceEngine = DecisionEngine<EstonianIdentityCodeValidator>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the engine with the production identity-code validator.
pub(crate) fn build_engine(config: DecisionConfig) -> Result<Arc<ServiceEngine>, ConfigError> {
    let engine = DecisionEngine::new(config, Arc::new(EstonianIdentityCodeValidator))
        .map_err(ConfigError::InvalidLoanLimits)?;
    Ok(Arc::new(engine))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
