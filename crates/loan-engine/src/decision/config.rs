use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Increment between candidate amounts during the amount scan.
pub const AMOUNT_STEP: u32 = 100;
/// Increment applied to the period while relaxing it.
pub const PERIOD_STEP: u32 = 1;

/// Loan limits and credit modifiers the engine is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub minimum_loan_amount: u32,
    pub maximum_loan_amount: u32,
    pub minimum_loan_period: u32,
    pub maximum_loan_period: u32,
    pub life_expectancy: u32,
    pub segment_modifiers: SegmentModifiers,
}

/// Credit modifiers for the three lending segments. Debtors have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentModifiers {
    pub segment_1: u32,
    pub segment_2: u32,
    pub segment_3: u32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            minimum_loan_amount: 2000,
            maximum_loan_amount: 10000,
            minimum_loan_period: 12,
            maximum_loan_period: 60,
            life_expectancy: 80,
            segment_modifiers: SegmentModifiers {
                segment_1: 100,
                segment_2: 300,
                segment_3: 1000,
            },
        }
    }
}

impl DecisionConfig {
    pub fn amount_range(&self) -> RangeInclusive<u32> {
        self.minimum_loan_amount..=self.maximum_loan_amount
    }

    pub fn period_range(&self) -> RangeInclusive<u32> {
        self.minimum_loan_period..=self.maximum_loan_period
    }

    pub fn validate(&self) -> Result<(), InvalidLimits> {
        if self.minimum_loan_amount == 0 {
            return Err(InvalidLimits::ZeroMinimumAmount);
        }
        if self.minimum_loan_amount > self.maximum_loan_amount {
            return Err(InvalidLimits::AmountRange {
                minimum: self.minimum_loan_amount,
                maximum: self.maximum_loan_amount,
            });
        }
        if self.minimum_loan_period > self.maximum_loan_period {
            return Err(InvalidLimits::PeriodRange {
                minimum: self.minimum_loan_period,
                maximum: self.maximum_loan_period,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLimits {
    #[error("minimum loan amount must be positive")]
    ZeroMinimumAmount,
    #[error("minimum loan amount {minimum} exceeds maximum {maximum}")]
    AmountRange { minimum: u32, maximum: u32 },
    #[error("minimum loan period {minimum} exceeds maximum {maximum}")]
    PeriodRange { minimum: u32, maximum: u32 },
}
