use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::decision::{
    DecisionConfig, DecisionEngine, DecisionRequest, EstonianIdentityCodeValidator,
    IdentityCodeValidator,
};

pub(super) const DEBTOR_CODE: &str = "37605030299";
pub(super) const SEGMENT_1_CODE: &str = "50307172740";
pub(super) const SEGMENT_2_CODE: &str = "38411266610";
pub(super) const SEGMENT_3_CODE: &str = "35006069515";

/// Validator double accepting every code, for codes with arbitrary check digits.
pub(super) struct AcceptAll;

impl IdentityCodeValidator for AcceptAll {
    fn is_valid(&self, _identity_code: &str) -> bool {
        true
    }
}

pub(super) struct RejectAll;

impl IdentityCodeValidator for RejectAll {
    fn is_valid(&self, _identity_code: &str) -> bool {
        false
    }
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn request(code: &str, amount: i64, period: i64) -> DecisionRequest {
    DecisionRequest::new(code, amount, period)
}

pub(super) fn estonian_engine() -> DecisionEngine<EstonianIdentityCodeValidator> {
    DecisionEngine::new(
        DecisionConfig::default(),
        Arc::new(EstonianIdentityCodeValidator),
    )
    .expect("default limits are valid")
}

pub(super) fn engine_with<V: IdentityCodeValidator>(
    config: DecisionConfig,
    validator: V,
) -> DecisionEngine<V> {
    DecisionEngine::new(config, Arc::new(validator)).expect("limits are valid")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
