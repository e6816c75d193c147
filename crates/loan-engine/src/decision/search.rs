use super::config::{DecisionConfig, AMOUNT_STEP, PERIOD_STEP};

/// Smallest credit score that still approves a loan.
pub const APPROVAL_THRESHOLD: f64 = 0.1;

/// Amount and period the search settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanOffer {
    pub amount: u32,
    pub period: u32,
}

pub fn credit_score(modifier: u32, amount: u32, period: u32) -> f64 {
    (f64::from(modifier) / f64::from(amount)) * f64::from(period) / 10.0
}

pub fn is_approvable(modifier: u32, amount: u32, period: u32) -> bool {
    credit_score(modifier, amount, period) >= APPROVAL_THRESHOLD
}

/// Two-phase greedy search: the largest approvable amount at the requested period,
/// then the shortest longer period that approves it.
///
/// When no amount qualifies at the requested period the minimum amount is carried
/// into the period phase. Returns `None` once the period passes the configured maximum.
pub fn find_offer(
    modifier: u32,
    requested_period: u32,
    config: &DecisionConfig,
) -> Option<LoanOffer> {
    let mut amount = config.minimum_loan_amount;
    for candidate in config.amount_range().step_by(AMOUNT_STEP as usize) {
        if is_approvable(modifier, candidate, requested_period) {
            amount = candidate;
        }
    }

    let mut period = requested_period;
    while !is_approvable(modifier, amount, period) && period <= config.maximum_loan_period {
        period += PERIOD_STEP;
    }

    if period > config.maximum_loan_period {
        tracing::debug!(modifier, amount, "no approvable period within limits");
        return None;
    }

    tracing::debug!(modifier, amount, period, "search settled on offer");
    Some(LoanOffer { amount, period })
}
