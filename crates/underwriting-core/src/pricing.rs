//! Loan pricing.
//!
//! Builds the interest rate from the policy base rate plus tier and
//! risk-level adjustments (floored), then prices a level-pay amortized
//! schedule. Monetary outputs are rounded to two decimals at the
//! reporting boundary only; internal arithmetic keeps full precision.
//!
//! Callers must guard term_months > 0 and loan_amount > 0; this
//! component does not validate them.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::policy::UnderwritingPolicy;
use crate::types::{CreditTier, Money, Rate, RiskLevel};

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPricingInput {
    pub loan_amount: Money,
    pub term_months: u32,
    /// Credit tier label (EXCELLENT, GOOD, FAIR, POOR, SUBPRIME).
    /// Unknown labels price at a zero tier adjustment.
    pub credit_tier: String,
    /// Risk level label (LOW, MODERATE, HIGH, VERY_HIGH). Unknown
    /// labels price at a zero risk adjustment.
    pub risk_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBreakdown {
    pub base_rate: Rate,
    pub credit_adjustment: Rate,
    pub risk_adjustment: Rate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub loan_amount: Money,
    pub term_months: u32,
    /// Percent, floored at the policy rate floor.
    pub interest_rate: Rate,
    /// Reported equal to the nominal rate; no fee-adjusted APR model.
    pub apr: Rate,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_repayment: Money,
    pub rate_breakdown: RateBreakdown,
    pub first_payment_interest: Money,
    pub first_payment_principal: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Price a loan from an approved amount, term, credit tier, and risk
/// level.
pub fn calculate_pricing(input: &LoanPricingInput, policy: &UnderwritingPolicy) -> LoanOffer {
    let credit_adjustment = policy.tier_adjustment(CreditTier::from_label(&input.credit_tier));
    let risk_adjustment = policy.risk_adjustment(RiskLevel::from_label(&input.risk_level));

    let final_rate = (policy.base_rate + credit_adjustment + risk_adjustment)
        .max(policy.rate_floor);

    let monthly_rate = final_rate / dec!(100) / dec!(12);
    let monthly_payment = if monthly_rate.is_zero() {
        // Straight-line fallback; the amortization formula is 0/0 here.
        input.loan_amount / Decimal::from(input.term_months)
    } else {
        let growth = (Decimal::ONE + monthly_rate).powi(i64::from(input.term_months));
        input.loan_amount * monthly_rate * growth / (growth - Decimal::ONE)
    };

    let total_repayment = monthly_payment * Decimal::from(input.term_months);
    let total_interest = total_repayment - input.loan_amount;
    let first_payment_interest = input.loan_amount * monthly_rate;
    let first_payment_principal = monthly_payment - first_payment_interest;

    LoanOffer {
        loan_amount: input.loan_amount,
        term_months: input.term_months,
        interest_rate: final_rate.round_dp(2),
        apr: final_rate.round_dp(2),
        monthly_payment: monthly_payment.round_dp(2),
        total_interest: total_interest.round_dp(2),
        total_repayment: total_repayment.round_dp(2),
        rate_breakdown: RateBreakdown {
            base_rate: policy.base_rate,
            credit_adjustment,
            risk_adjustment,
        },
        first_payment_interest: first_payment_interest.round_dp(2),
        first_payment_principal: first_payment_principal.round_dp(2),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
