use clap::Args;
use serde_json::Value;

use underwriting_core::credit::{self, CreditCheckInput};
use underwriting_core::dti::{self, DtiInput};
use underwriting_core::pricing::{self, LoanPricingInput};
use underwriting_core::risk::{self, RiskScoringInput};
use underwriting_core::UnderwritingPolicy;

use crate::input;

#[derive(Args)]
pub struct CreditCheckArgs {
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct DtiArgs {
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct RiskScoreArgs {
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct PriceLoanArgs {
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_credit_check(
    args: CreditCheckArgs,
    policy: &UnderwritingPolicy,
) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: CreditCheckInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };
    let result = credit::evaluate_credit(&input_data, policy);
    Ok(serde_json::to_value(result)?)
}

pub fn run_dti(
    args: DtiArgs,
    policy: &UnderwritingPolicy,
) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: DtiInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };
    let result = dti::calculate_dti(&input_data, policy);
    Ok(serde_json::to_value(result)?)
}

pub fn run_risk_score(
    args: RiskScoreArgs,
    policy: &UnderwritingPolicy,
) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: RiskScoringInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };
    let result = risk::calculate_risk_score(&input_data, policy);
    Ok(serde_json::to_value(result)?)
}

pub fn run_price_loan(
    args: PriceLoanArgs,
    policy: &UnderwritingPolicy,
) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: LoanPricingInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };
    if input_data.loan_amount <= underwriting_core::Money::ZERO {
        return Err("loan_amount must be positive".into());
    }
    if input_data.term_months == 0 {
        return Err("term_months must be positive".into());
    }
    let result = pricing::calculate_pricing(&input_data, policy);
    Ok(serde_json::to_value(result)?)
}
