//! Composite risk scoring.
//!
//! Combines credit score, DTI, income-to-loan ratio, employment tenure,
//! and bankruptcy history into a single 0-100 score (lower = better).
//! Four component ladders each contribute 5-25 points; bankruptcies add
//! a capped penalty. Garbage inputs propagate to extreme scores rather
//! than erroring; range validation is an upstream concern.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::policy::UnderwritingPolicy;
use crate::types::{Money, Rate, RiskLevel};

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScoringInput {
    pub credit_score: i32,
    /// Debt-to-income ratio as a decimal (0.35 = 35%).
    pub dti_ratio: Rate,
    pub annual_income: Money,
    pub years_employed: Decimal,
    #[serde(default)]
    pub bankruptcies: u32,
    pub loan_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskComponents {
    pub credit_risk: Decimal,
    pub dti_risk: Decimal,
    pub income_risk: Decimal,
    pub employment_risk: Decimal,
    pub bankruptcy_penalty: Decimal,
}

/// Underwriting recommendation. Hard policy violations take priority
/// over the score bands, so a numerically moderate score never rescues
/// an application that fails policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "DENY - Credit score below minimum")]
    DenyCreditScore,
    #[serde(rename = "DENY - DTI exceeds maximum")]
    DenyDti,
    #[serde(rename = "APPROVE - Strong application")]
    Approve,
    #[serde(rename = "APPROVE WITH CONDITIONS")]
    ApproveWithConditions,
    #[serde(rename = "REFER TO SENIOR UNDERWRITER")]
    Refer,
    #[serde(rename = "DENY - High risk")]
    DenyHighRisk,
}

impl Recommendation {
    pub fn is_approval(self) -> bool {
        matches!(
            self,
            Recommendation::Approve | Recommendation::ApproveWithConditions
        )
    }

    pub fn is_denial(self) -> bool {
        matches!(
            self,
            Recommendation::DenyCreditScore
                | Recommendation::DenyDti
                | Recommendation::DenyHighRisk
        )
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::DenyCreditScore => write!(f, "DENY - Credit score below minimum"),
            Recommendation::DenyDti => write!(f, "DENY - DTI exceeds maximum"),
            Recommendation::Approve => write!(f, "APPROVE - Strong application"),
            Recommendation::ApproveWithConditions => write!(f, "APPROVE WITH CONDITIONS"),
            Recommendation::Refer => write!(f, "REFER TO SENIOR UNDERWRITER"),
            Recommendation::DenyHighRisk => write!(f, "DENY - High risk"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Sum of components, clamped to [0, 100].
    pub total_risk_score: Decimal,
    pub risk_level: RiskLevel,
    pub components: RiskComponents,
    pub recommendation: Recommendation,
    pub approval_likelihood: String,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Score a loan application's composite risk.
pub fn calculate_risk_score(
    input: &RiskScoringInput,
    policy: &UnderwritingPolicy,
) -> RiskAssessment {
    let components = RiskComponents {
        credit_risk: score_credit(input.credit_score),
        dti_risk: score_dti(input.dti_ratio),
        income_risk: score_income(input.annual_income, input.loan_amount),
        employment_risk: score_employment(input.years_employed),
        bankruptcy_penalty: bankruptcy_penalty(input.bankruptcies),
    };

    let total = (components.credit_risk
        + components.dti_risk
        + components.income_risk
        + components.employment_risk
        + components.bankruptcy_penalty)
        .min(dec!(100));

    RiskAssessment {
        total_risk_score: total,
        risk_level: classify_risk_level(total),
        recommendation: recommend(total, input.credit_score, input.dti_ratio, policy),
        approval_likelihood: approval_likelihood(total).to_string(),
        components,
    }
}

// ---------------------------------------------------------------------------
// Component ladders (5-25 each, lower = better)
// ---------------------------------------------------------------------------

fn score_credit(score: i32) -> Decimal {
    if score >= 750 {
        dec!(5)
    } else if score >= 700 {
        dec!(10)
    } else if score >= 650 {
        dec!(18)
    } else if score >= 620 {
        dec!(23)
    } else {
        dec!(25)
    }
}

fn score_dti(dti: Rate) -> Decimal {
    if dti <= dec!(0.20) {
        dec!(5)
    } else if dti <= dec!(0.30) {
        dec!(10)
    } else if dti <= dec!(0.36) {
        dec!(15)
    } else if dti <= dec!(0.43) {
        dec!(20)
    } else {
        dec!(25)
    }
}

fn score_income(annual_income: Money, loan_amount: Money) -> Decimal {
    // Non-positive income is treated as an extreme loan-to-income ratio.
    let ratio = if annual_income > Money::ZERO {
        loan_amount / annual_income
    } else {
        dec!(999)
    };
    if ratio <= dec!(0.25) {
        dec!(5)
    } else if ratio <= dec!(0.50) {
        dec!(10)
    } else if ratio <= dec!(0.75) {
        dec!(15)
    } else if ratio <= dec!(1.0) {
        dec!(20)
    } else {
        dec!(25)
    }
}

fn score_employment(years: Decimal) -> Decimal {
    if years >= dec!(5) {
        dec!(5)
    } else if years >= dec!(2) {
        dec!(10)
    } else if years >= dec!(1) {
        dec!(18)
    } else {
        dec!(25)
    }
}

fn bankruptcy_penalty(bankruptcies: u32) -> Decimal {
    Decimal::from(bankruptcies.saturating_mul(15)).min(dec!(30))
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

fn classify_risk_level(total: Decimal) -> RiskLevel {
    if total <= dec!(25) {
        RiskLevel::Low
    } else if total <= dec!(50) {
        RiskLevel::Moderate
    } else if total <= dec!(75) {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

fn recommend(
    total: Decimal,
    credit_score: i32,
    dti_ratio: Rate,
    policy: &UnderwritingPolicy,
) -> Recommendation {
    if credit_score < policy.min_credit_score {
        return Recommendation::DenyCreditScore;
    }
    if dti_ratio > policy.max_dti {
        return Recommendation::DenyDti;
    }
    if total <= dec!(35) {
        Recommendation::Approve
    } else if total <= dec!(55) {
        Recommendation::ApproveWithConditions
    } else if total <= dec!(75) {
        Recommendation::Refer
    } else {
        Recommendation::DenyHighRisk
    }
}

fn approval_likelihood(total: Decimal) -> &'static str {
    if total <= dec!(30) {
        "Very High (90%+)"
    } else if total <= dec!(45) {
        "High (70-89%)"
    } else if total <= dec!(60) {
        "Moderate (50-69%)"
    } else if total <= dec!(75) {
        "Low (25-49%)"
    } else {
        "Very Low (<25%)"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
