use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use super::domain::DecisionRequest;
use super::engine::DecisionEngine;
use super::validator::IdentityCodeValidator;

/// Router exposing the loan decision endpoint.
pub fn decision_router<V>(engine: Arc<DecisionEngine<V>>) -> Router
where
    V: IdentityCodeValidator + 'static,
{
    Router::new()
        .route("/api/v1/loan/decision", post(decision_handler::<V>))
        .with_state(engine)
}

pub(crate) async fn decision_handler<V>(
    State(engine): State<Arc<DecisionEngine<V>>>,
    axum::Json(request): axum::Json<DecisionRequest>,
) -> Response
where
    V: IdentityCodeValidator + 'static,
{
    match engine.decide(&request) {
        Ok(decision) => (StatusCode::OK, axum::Json(decision)).into_response(),
        Err(error) if error.is_business_outcome() => {
            (StatusCode::OK, axum::Json(error.to_decision())).into_response()
        }
        Err(error) => (StatusCode::BAD_REQUEST, axum::Json(error.to_decision())).into_response(),
    }
}
