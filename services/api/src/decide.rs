use crate::infra::{build_engine, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use loan_engine::config::AppConfig;
use loan_engine::decision::{
    maximum_eligible_age, Decision, DecisionError, DecisionRequest, AMOUNT_STEP,
    MINIMUM_ELIGIBLE_AGE,
};
use loan_engine::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Applicant's 11-digit personal identity code
    #[arg(long)]
    pub(crate) identity_code: String,
    /// Requested loan amount in euros
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) period: i64,
    /// Evaluation date used for the age check (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(config.decision)?;

    let DecideArgs {
        identity_code,
        amount,
        period,
        today,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let request = DecisionRequest::new(identity_code, amount, period);

    let decision = settle(engine.decide_on(&request, today))?;
    println!("{}", describe(&request, &decision));
    Ok(())
}

/// Business outcomes are printed as a message; malformed requests fail the command.
fn settle(outcome: Result<Decision, DecisionError>) -> Result<Decision, AppError> {
    match outcome {
        Ok(decision) => Ok(decision),
        Err(err) if err.is_business_outcome() => Ok(err.to_decision()),
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn run_limits() -> Result<(), AppError> {
    let config = AppConfig::load()?.decision;

    println!("Loan limits");
    println!(
        "- amount: {}..={} in steps of {}",
        config.minimum_loan_amount,
        config.maximum_loan_amount,
        AMOUNT_STEP
    );
    println!(
        "- period: {}..={} months",
        config.minimum_loan_period, config.maximum_loan_period
    );
    println!(
        "- eligible age: {}..={} (life expectancy {})",
        MINIMUM_ELIGIBLE_AGE,
        maximum_eligible_age(&config),
        config.life_expectancy
    );

    let modifiers = config.segment_modifiers;
    println!("\nCredit modifiers");
    println!("- segment 1: {}", modifiers.segment_1);
    println!("- segment 2: {}", modifiers.segment_2);
    println!("- segment 3: {}", modifiers.segment_3);

    Ok(())
}

fn describe(request: &DecisionRequest, decision: &Decision) -> String {
    let requested = format!(
        "requested {} over {} months",
        request.requested_amount, request.requested_period
    );
    match (decision.approved_amount(), decision.approved_period()) {
        (Some(amount), Some(period)) => {
            format!("{requested}: approved {amount} over {period} months")
        }
        _ => format!(
            "{requested}: {}",
            decision.message().unwrap_or("no decision")
        ),
    }
}
