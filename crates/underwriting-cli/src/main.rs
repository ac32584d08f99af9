mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use underwriting_core::UnderwritingPolicy;

use commands::pipeline::UnderwriteArgs;
use commands::underwriting::{CreditCheckArgs, DtiArgs, PriceLoanArgs, RiskScoreArgs};

/// Deterministic loan underwriting calculations
#[derive(Parser)]
#[command(
    name = "uw",
    version,
    about = "Deterministic loan underwriting calculations",
    long_about = "A CLI for rule-based loan underwriting with decimal precision. \
                  Supports credit tiering, debt-to-income analysis, composite risk \
                  scoring, amortized loan pricing, and the full underwriting pipeline."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Policy parameter overrides (JSON file; unnamed fields keep defaults)
    #[arg(long, global = true)]
    policy: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a credit profile (tier, minimum check, factors)
    CreditCheck(CreditCheckArgs),
    /// Calculate current and proposed debt-to-income ratios
    Dti(DtiArgs),
    /// Score composite application risk (0-100, lower = better)
    RiskScore(RiskScoreArgs),
    /// Price a loan (rate build-up, amortized payment, totals)
    PriceLoan(PriceLoanArgs),
    /// Run the full underwriting pipeline on a loan request
    Underwrite(UnderwriteArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn load_policy(path: Option<&str>) -> Result<UnderwritingPolicy, Box<dyn std::error::Error>> {
    let policy: UnderwritingPolicy = match path {
        Some(p) => input::file::read_json(p)?,
        None => UnderwritingPolicy::default(),
    };
    Ok(policy.validated()?)
}

fn main() {
    let cli = Cli::parse();

    let policy = match load_policy(cli.policy.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::CreditCheck(args) => commands::underwriting::run_credit_check(args, &policy),
        Commands::Dti(args) => commands::underwriting::run_dti(args, &policy),
        Commands::RiskScore(args) => commands::underwriting::run_risk_score(args, &policy),
        Commands::PriceLoan(args) => commands::underwriting::run_price_loan(args, &policy),
        Commands::Underwrite(args) => commands::pipeline::run_underwrite(args, &policy),
        Commands::Version => {
            println!("uw {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
