//! Loan decisioning: request validation, age eligibility, credit segmentation
//! and the search for the largest approvable amount and period.

mod config;
mod domain;
mod eligibility;
mod engine;
pub mod identity;
pub mod router;
pub mod search;
mod segment;
mod validator;

#[cfg(test)]
mod tests;

pub use config::{DecisionConfig, InvalidLimits, SegmentModifiers, AMOUNT_STEP, PERIOD_STEP};
pub use domain::{Decision, DecisionRequest};
pub use eligibility::{is_eligible_by_age, maximum_eligible_age, MINIMUM_ELIGIBLE_AGE};
pub use engine::{DecisionEngine, DecisionError, NoValidLoanReason};
pub use identity::{IdentityCodeError, ParsedIdentityCode};
pub use router::decision_router;
pub use search::{credit_score, find_offer, is_approvable, LoanOffer, APPROVAL_THRESHOLD};
pub use segment::CreditSegment;
pub use validator::{EstonianIdentityCodeValidator, IdentityCodeValidator};
