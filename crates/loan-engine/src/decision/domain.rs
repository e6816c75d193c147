use serde::{Deserialize, Serialize};

/// Applicant input for a single decision. Built per call and discarded afterwards.
///
/// Amount and period are signed so out-of-range values reach the engine's limit checks
/// instead of failing JSON extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub identity_code: String,
    pub requested_amount: i64,
    pub requested_period: i64,
}

impl DecisionRequest {
    pub fn new(
        identity_code: impl Into<String>,
        requested_amount: i64,
        requested_period: i64,
    ) -> Self {
        Self {
            identity_code: identity_code.into(),
            requested_amount,
            requested_period,
        }
    }
}

/// Result of a decision: either an approved amount and period, or an explanatory message.
///
/// The two shapes are only reachable through [`Decision::approved`] and
/// [`Decision::rejected`], so a value never carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    #[serde(skip_serializing_if = "Option::is_none")]
    approved_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    approved_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Decision {
    pub fn approved(amount: u32, period: u32) -> Self {
        Self {
            approved_amount: Some(amount),
            approved_period: Some(period),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            approved_amount: None,
            approved_period: None,
            message: Some(message.into()),
        }
    }

    pub fn approved_amount(&self) -> Option<u32> {
        self.approved_amount
    }

    pub fn approved_period(&self) -> Option<u32> {
        self.approved_period
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.approved_amount.is_some()
    }

    pub fn summary(&self) -> String {
        match (self.approved_amount, self.approved_period, self.message()) {
            (Some(amount), Some(period), _) => {
                format!("approved {amount} over {period} months")
            }
            (_, _, Some(message)) => format!("rejected: {message}"),
            _ => "rejected".to_string(),
        }
    }
}
