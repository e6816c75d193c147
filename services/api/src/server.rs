use crate::cli::ServeArgs;
use crate::infra::{build_engine, AppState};
use crate::routes::with_decision_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_engine::config::AppConfig;
use loan_engine::decision::maximum_eligible_age;
use loan_engine::error::AppError;
use loan_engine::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    info!(
        minimum_amount = config.decision.minimum_loan_amount,
        maximum_amount = config.decision.maximum_loan_amount,
        minimum_period = config.decision.minimum_loan_period,
        maximum_period = config.decision.maximum_loan_period,
        maximum_age = maximum_eligible_age(&config.decision),
        "decision limits loaded"
    );
    let engine = build_engine(config.decision.clone())?;

    let app = with_decision_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan decision service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
