use clap::Args;
use serde_json::Value;

use underwriting_core::pipeline::{LoanRequest, Underwriter};
use underwriting_core::UnderwritingPolicy;

use crate::input;

#[derive(Args)]
pub struct UnderwriteArgs {
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_underwrite(
    args: UnderwriteArgs,
    policy: &UnderwritingPolicy,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request: LoanRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };
    if request.requested_amount <= underwriting_core::Money::ZERO {
        return Err("requested_amount must be positive".into());
    }
    if request.requested_term_months == 0 {
        return Err("requested_term_months must be positive".into());
    }
    let underwriter = Underwriter::new(policy.clone())?;
    let decision = underwriter.underwrite(&request);
    Ok(serde_json::to_value(decision)?)
}
