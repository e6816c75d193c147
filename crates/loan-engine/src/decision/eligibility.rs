use super::config::DecisionConfig;

pub const MINIMUM_ELIGIBLE_AGE: u32 = 18;

/// Oldest age at which a loan of the maximum period still ends within life expectancy.
pub fn maximum_eligible_age(config: &DecisionConfig) -> u32 {
    config
        .life_expectancy
        .saturating_sub(config.maximum_loan_period / 12)
}

pub fn is_eligible_by_age(age: u32, config: &DecisionConfig) -> bool {
    let maximum_age = maximum_eligible_age(config);
    tracing::debug!(age, maximum_age, "checking age eligibility");
    (MINIMUM_ELIGIBLE_AGE..=maximum_age).contains(&age)
}
