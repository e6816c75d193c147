use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::config::{DecisionConfig, InvalidLimits};
use super::domain::{Decision, DecisionRequest};
use super::eligibility::is_eligible_by_age;
use super::identity::ParsedIdentityCode;
use super::search::find_offer;
use super::segment::CreditSegment;
use super::validator::IdentityCodeValidator;

/// Stateless loan decision engine. Every call starts from scratch, so one
/// instance can serve any number of concurrent requests.
pub struct DecisionEngine<V> {
    config: DecisionConfig,
    validator: Arc<V>,
}

impl<V> DecisionEngine<V>
where
    V: IdentityCodeValidator,
{
    /// Build an engine over `config`, rejecting limits the search cannot run on.
    pub fn new(config: DecisionConfig, validator: Arc<V>) -> Result<Self, InvalidLimits> {
        config.validate()?;
        Ok(Self { config, validator })
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Decide a request as of the local calendar date.
    pub fn decide(&self, request: &DecisionRequest) -> Result<Decision, DecisionError> {
        self.decide_on(request, Local::now().date_naive())
    }

    /// Decide a request with ages computed against `today`.
    pub fn decide_on(
        &self,
        request: &DecisionRequest,
        today: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        let outcome = self.evaluate(request, today);

        match &outcome {
            Ok(decision) => info!(
                amount = request.requested_amount,
                period = request.requested_period,
                outcome = %decision.summary(),
                "loan decision made"
            ),
            Err(err) => warn!(
                amount = request.requested_amount,
                period = request.requested_period,
                error = %err,
                "loan request rejected"
            ),
        }

        outcome
    }

    fn evaluate(
        &self,
        request: &DecisionRequest,
        today: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        let (identity, period) = self.validate(request, today)?;

        let segment = CreditSegment::classify(identity.segment_value);
        let modifier = segment.modifier(&self.config.segment_modifiers);
        debug!(segment = segment.label(), modifier, "credit segment classified");
        if modifier == 0 {
            return Err(DecisionError::NoValidLoan(NoValidLoanReason::DebtSegment));
        }

        let offer = find_offer(modifier, period, &self.config)
            .ok_or(DecisionError::NoValidLoan(NoValidLoanReason::NoApprovablePeriod))?;

        Ok(Decision::approved(offer.amount, offer.period))
    }

    fn validate(
        &self,
        request: &DecisionRequest,
        today: NaiveDate,
    ) -> Result<(ParsedIdentityCode, u32), DecisionError> {
        if within(request.requested_amount, self.config.amount_range()).is_none() {
            return Err(DecisionError::InvalidLoanAmount {
                requested: request.requested_amount,
                minimum: self.config.minimum_loan_amount,
                maximum: self.config.maximum_loan_amount,
            });
        }

        let period = within(request.requested_period, self.config.period_range()).ok_or(
            DecisionError::InvalidLoanPeriod {
                requested: request.requested_period,
                minimum: self.config.minimum_loan_period,
                maximum: self.config.maximum_loan_period,
            },
        )?;

        if !self.validator.is_valid(&request.identity_code) {
            return Err(DecisionError::InvalidIdentityCode);
        }

        let identity = ParsedIdentityCode::parse(&request.identity_code)
            .map_err(|_| DecisionError::InvalidIdentityCode)?;

        match identity.age_on(today) {
            Some(age) if is_eligible_by_age(age, &self.config) => Ok((identity, period)),
            age => Err(DecisionError::NoValidLoan(NoValidLoanReason::AgeIneligible {
                age,
            })),
        }
    }
}

/// `value` as a `u32` when it lies inside `range`.
fn within(value: i64, range: RangeInclusive<u32>) -> Option<u32> {
    u32::try_from(value)
        .ok()
        .filter(|candidate| range.contains(candidate))
}

/// Why no loan can be offered to an otherwise well-formed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoValidLoanReason {
    /// Age outside the eligible window. `None` when the birth date is in the future.
    AgeIneligible { age: Option<u32> },
    DebtSegment,
    NoApprovablePeriod,
}

impl NoValidLoanReason {
    pub fn summary(&self) -> &'static str {
        match self {
            NoValidLoanReason::AgeIneligible { .. } => "Not eligible due to age.",
            NoValidLoanReason::DebtSegment => "No valid loan found!",
            NoValidLoanReason::NoApprovablePeriod => {
                "No valid loan found within allowed loan periods."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidIdentityCode,
    #[error("Invalid loan amount! Requested {requested}, allowed {minimum}..={maximum}.")]
    InvalidLoanAmount {
        requested: i64,
        minimum: u32,
        maximum: u32,
    },
    #[error("Invalid loan period! Requested {requested}, allowed {minimum}..={maximum}.")]
    InvalidLoanPeriod {
        requested: i64,
        minimum: u32,
        maximum: u32,
    },
    #[error("{}", .0.summary())]
    NoValidLoan(NoValidLoanReason),
}

impl DecisionError {
    /// True for "we cannot offer a loan" outcomes, false for malformed requests.
    pub fn is_business_outcome(&self) -> bool {
        matches!(self, DecisionError::NoValidLoan(_))
    }

    pub fn to_decision(&self) -> Decision {
        Decision::rejected(self.to_string())
    }
}
