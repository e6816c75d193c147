use super::common::*;
use std::sync::Arc;

use crate::decision::{
    DecisionConfig, DecisionEngine, DecisionError, InvalidLimits, NoValidLoanReason,
    SegmentModifiers,
};

#[test]
fn debtor_gets_no_loan() {
    let engine = estonian_engine();

    let err = engine
        .decide_on(&request(DEBTOR_CODE, 4000, 12), today())
        .expect_err("debtors are not offered loans");

    assert_eq!(err, DecisionError::NoValidLoan(NoValidLoanReason::DebtSegment));
    assert!(err.is_business_outcome());
}

#[test]
fn debtor_gets_no_loan_at_maximum_request() {
    let engine = estonian_engine();

    let err = engine
        .decide_on(&request(DEBTOR_CODE, 10000, 60), today())
        .expect_err("debtors are not offered loans");

    assert_eq!(err, DecisionError::NoValidLoan(NoValidLoanReason::DebtSegment));
}

#[test]
fn segment_1_extends_period_for_minimum_amount() {
    let engine = estonian_engine();

    let decision = engine
        .decide_on(&request(SEGMENT_1_CODE, 4000, 12), today())
        .expect("decision succeeds");

    assert_eq!(decision.approved_amount(), Some(2000));
    assert_eq!(decision.approved_period(), Some(20));
    assert_eq!(decision.message(), None);
}

#[test]
fn segment_2_keeps_requested_period() {
    let engine = estonian_engine();

    let decision = engine
        .decide_on(&request(SEGMENT_2_CODE, 4000, 12), today())
        .expect("decision succeeds");

    assert_eq!(decision.approved_amount(), Some(3600));
    assert_eq!(decision.approved_period(), Some(12));
}

#[test]
fn segment_2_offers_more_than_requested() {
    let engine = estonian_engine();

    let decision = engine
        .decide_on(&request(SEGMENT_2_CODE, 2000, 12), today())
        .expect("decision succeeds");

    assert_eq!(decision.approved_amount(), Some(3600));
    assert_eq!(decision.approved_period(), Some(12));
}

#[test]
fn segment_3_is_capped_at_maximum_amount() {
    let engine = estonian_engine();

    let decision = engine
        .decide_on(&request(SEGMENT_3_CODE, 4000, 12), today())
        .expect("decision succeeds");

    assert_eq!(decision.approved_amount(), Some(10000));
    assert_eq!(decision.approved_period(), Some(12));
}

#[test]
fn rejects_code_failing_checksum() {
    let engine = estonian_engine();

    let err = engine
        .decide_on(&request("12345678901", 4000, 12), today())
        .expect_err("checksum fails");

    assert_eq!(err, DecisionError::InvalidIdentityCode);
    assert!(!err.is_business_outcome());
}

#[test]
fn rejects_code_refused_by_injected_validator() {
    let engine = engine_with(DecisionConfig::default(), RejectAll);

    let err = engine
        .decide_on(&request(SEGMENT_3_CODE, 4000, 12), today())
        .expect_err("validator refuses");

    assert_eq!(err, DecisionError::InvalidIdentityCode);
}

#[test]
fn unparseable_code_is_invalid_even_when_validator_accepts() {
    let engine = engine_with(DecisionConfig::default(), AcceptAll);

    let err = engine
        .decide_on(&request("98501019999", 4000, 12), today())
        .expect_err("unknown century");

    assert_eq!(err, DecisionError::InvalidIdentityCode);
}

#[test]
fn rejects_amounts_outside_limits() {
    let engine = estonian_engine();

    for amount in [1999, 10001] {
        let err = engine
            .decide_on(&request(SEGMENT_1_CODE, amount, 12), today())
            .expect_err("amount out of range");
        assert_eq!(
            err,
            DecisionError::InvalidLoanAmount {
                requested: amount,
                minimum: 2000,
                maximum: 10000,
            }
        );
    }
}

#[test]
fn rejects_amounts_outside_unsigned_range() {
    let engine = estonian_engine();

    for amount in [-500, 5_000_000_000] {
        let err = engine
            .decide_on(&request(SEGMENT_2_CODE, amount, 12), today())
            .expect_err("amount out of range");
        assert!(matches!(
            err,
            DecisionError::InvalidLoanAmount { requested, .. } if requested == amount
        ));
    }
}

#[test]
fn rejects_negative_period() {
    let engine = estonian_engine();

    let err = engine
        .decide_on(&request(SEGMENT_2_CODE, 4000, -12), today())
        .expect_err("period out of range");

    assert_eq!(
        err,
        DecisionError::InvalidLoanPeriod {
            requested: -12,
            minimum: 12,
            maximum: 60,
        }
    );
}

#[test]
fn engine_refuses_zero_minimum_amount() {
    let config = DecisionConfig {
        minimum_loan_amount: 0,
        ..DecisionConfig::default()
    };

    let outcome = DecisionEngine::new(config, Arc::new(AcceptAll));

    assert!(matches!(outcome, Err(InvalidLimits::ZeroMinimumAmount)));
}

#[test]
fn amount_is_checked_before_identity_code() {
    let engine = estonian_engine();

    let err = engine
        .decide_on(&request("12345678901", 1999, 12), today())
        .expect_err("amount out of range");

    assert!(matches!(err, DecisionError::InvalidLoanAmount { .. }));
}

#[test]
fn rejects_periods_outside_limits() {
    let engine = estonian_engine();

    for period in [11, 61] {
        let err = engine
            .decide_on(&request(SEGMENT_1_CODE, 4000, period), today())
            .expect_err("period out of range");
        assert_eq!(
            err,
            DecisionError::InvalidLoanPeriod {
                requested: period,
                minimum: 12,
                maximum: 60,
            }
        );
    }
}

#[test]
fn too_young_applicant_gets_no_loan() {
    let engine = engine_with(DecisionConfig::default(), AcceptAll);

    let err = engine
        .decide_on(&request("61001010001", 4000, 12), today())
        .expect_err("applicant is 15");

    assert_eq!(
        err,
        DecisionError::NoValidLoan(NoValidLoanReason::AgeIneligible { age: Some(15) })
    );
}

#[test]
fn too_old_applicant_gets_no_loan() {
    let engine = engine_with(DecisionConfig::default(), AcceptAll);

    let err = engine
        .decide_on(&request("32001010002", 4000, 12), today())
        .expect_err("applicant is 105");

    assert_eq!(
        err,
        DecisionError::NoValidLoan(NoValidLoanReason::AgeIneligible { age: Some(105) })
    );
}

#[test]
fn applicant_born_after_evaluation_date_gets_no_loan() {
    let engine = engine_with(DecisionConfig::default(), AcceptAll);

    let err = engine
        .decide_on(&request("62601019999", 4000, 12), today())
        .expect_err("birth date in the future");

    assert_eq!(
        err,
        DecisionError::NoValidLoan(NoValidLoanReason::AgeIneligible { age: None })
    );
}

#[test]
fn valid_age_applicant_is_approved() {
    let engine = engine_with(DecisionConfig::default(), AcceptAll);

    let decision = engine
        .decide_on(&request("38501019003", 4000, 12), today())
        .expect("decision succeeds");

    assert_eq!(decision.approved_amount(), Some(10000));
    assert_eq!(decision.approved_period(), Some(12));
}

#[test]
fn age_window_bounds_are_inclusive() {
    let engine = engine_with(DecisionConfig::default(), AcceptAll);
    let eighteen_today = request("50706019999", 4000, 12);
    let seventy_five_today = request("35006019999", 4000, 12);

    assert!(engine.decide_on(&eighteen_today, date(2025, 6, 1)).is_ok());
    assert_eq!(
        engine.decide_on(&eighteen_today, date(2025, 5, 31)),
        Err(DecisionError::NoValidLoan(
            NoValidLoanReason::AgeIneligible { age: Some(17) }
        ))
    );

    assert!(engine.decide_on(&seventy_five_today, date(2025, 6, 1)).is_ok());
    assert_eq!(
        engine.decide_on(&seventy_five_today, date(2026, 6, 1)),
        Err(DecisionError::NoValidLoan(
            NoValidLoanReason::AgeIneligible { age: Some(76) }
        ))
    );
}

#[test]
fn reports_no_loan_when_no_period_qualifies() {
    let config = DecisionConfig {
        segment_modifiers: SegmentModifiers {
            segment_1: 10,
            segment_2: 300,
            segment_3: 1000,
        },
        ..DecisionConfig::default()
    };
    let engine = engine_with(config, AcceptAll);

    let err = engine
        .decide_on(&request(SEGMENT_1_CODE, 4000, 12), today())
        .expect_err("modifier too small for any period");

    assert_eq!(
        err,
        DecisionError::NoValidLoan(NoValidLoanReason::NoApprovablePeriod)
    );
    assert_eq!(
        err.to_decision().message(),
        Some("No valid loan found within allowed loan periods.")
    );
}

#[test]
fn repeated_calls_give_identical_results() {
    let engine = estonian_engine();
    let request = request(SEGMENT_1_CODE, 4000, 12);

    let first = engine.decide_on(&request, today());
    let second = engine.decide_on(&request, today());

    assert_eq!(first, second);
}

#[test]
fn concurrent_callers_share_one_engine() {
    let engine = Arc::new(estonian_engine());

    let handles: Vec<_> = [SEGMENT_1_CODE, SEGMENT_2_CODE, SEGMENT_3_CODE, DEBTOR_CODE]
        .into_iter()
        .cycle()
        .take(16)
        .map(|code| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.decide_on(&request(code, 4000, 12), today()))
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().expect("thread completes");
        match index % 4 {
            0 => assert_eq!(outcome.map(|d| d.approved_period()), Ok(Some(20))),
            1 => assert_eq!(outcome.map(|d| d.approved_amount()), Ok(Some(3600))),
            2 => assert_eq!(outcome.map(|d| d.approved_amount()), Ok(Some(10000))),
            _ => assert!(outcome.is_err()),
        }
    }
}
