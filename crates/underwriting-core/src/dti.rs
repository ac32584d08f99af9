//! Debt-to-income calculation.
//!
//! Reports current and proposed DTI as percentages rounded to two
//! decimals, a pass/fail verdict against the policy maximum, and a
//! qualitative assessment band. Non-positive monthly income defines
//! both ratios as zero rather than failing; this degenerate case
//! passes the check by construction.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::policy::UnderwritingPolicy;
use crate::types::{Money, Rate};

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtiInput {
    pub annual_income: Money,
    pub monthly_debt_payments: Money,
    /// Monthly payment of the loan under consideration.
    #[serde(default)]
    pub proposed_loan_payment: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtiOutput {
    pub monthly_income: Money,
    pub current_monthly_debt: Money,
    pub proposed_payment: Money,
    /// Percentage, rounded to 2 decimals.
    pub current_dti: Rate,
    /// Percentage, rounded to 2 decimals.
    pub proposed_dti: Rate,
    /// Percentage.
    pub max_allowed_dti: Rate,
    pub passes_dti_check: bool,
    pub dti_assessment: String,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compute current and proposed DTI against the policy maximum.
pub fn calculate_dti(input: &DtiInput, policy: &UnderwritingPolicy) -> DtiOutput {
    let monthly_income = input.annual_income / dec!(12);

    let current = current_dti_ratio(input);
    let proposed = proposed_dti_ratio(input);

    DtiOutput {
        monthly_income: monthly_income.round_dp(2),
        current_monthly_debt: input.monthly_debt_payments,
        proposed_payment: input.proposed_loan_payment,
        current_dti: (current * dec!(100)).round_dp(2),
        proposed_dti: (proposed * dec!(100)).round_dp(2),
        max_allowed_dti: policy.max_dti * dec!(100),
        passes_dti_check: proposed <= policy.max_dti,
        dti_assessment: assess_dti(proposed).to_string(),
    }
}

/// Current DTI as an unrounded decimal ratio. Zero when monthly income
/// is non-positive.
pub fn current_dti_ratio(input: &DtiInput) -> Rate {
    let monthly_income = input.annual_income / dec!(12);
    if monthly_income <= Rate::ZERO {
        return Rate::ZERO;
    }
    input.monthly_debt_payments / monthly_income
}

/// Proposed DTI as an unrounded decimal ratio, for downstream risk
/// scoring. Zero when monthly income is non-positive.
pub fn proposed_dti_ratio(input: &DtiInput) -> Rate {
    let monthly_income = input.annual_income / dec!(12);
    if monthly_income <= Rate::ZERO {
        return Rate::ZERO;
    }
    (input.monthly_debt_payments + input.proposed_loan_payment) / monthly_income
}

fn assess_dti(proposed: Rate) -> &'static str {
    if proposed <= dec!(0.20) {
        "Excellent - very low debt burden"
    } else if proposed <= dec!(0.35) {
        "Good - manageable debt level"
    } else if proposed <= dec!(0.43) {
        "Acceptable - at upper limit"
    } else {
        "Too high - exceeds maximum threshold"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn policy() -> UnderwritingPolicy {
        UnderwritingPolicy::default()
    }

    #[test]
    fn test_basic_ratios_reported_as_percentages() {
        let out = calculate_dti(
            &DtiInput {
                annual_income: dec!(60000),
                monthly_debt_payments: dec!(1000),
                proposed_loan_payment: dec!(500),
            },
            &policy(),
        );
        assert_eq!(out.monthly_income, dec!(5000.00));
        assert_eq!(out.current_dti, dec!(20.00));
        assert_eq!(out.proposed_dti, dec!(30.00));
        assert_eq!(out.max_allowed_dti, dec!(43));
        assert!(out.passes_dti_check);
        assert_eq!(out.dti_assessment, "Good - manageable debt level");
    }

    #[test]
    fn test_zero_income_degenerates_to_zero_ratios() {
        let out = calculate_dti(
            &DtiInput {
                annual_income: Money::ZERO,
                monthly_debt_payments: dec!(500),
                proposed_loan_payment: Money::ZERO,
            },
            &policy(),
        );
        assert_eq!(out.current_dti, Rate::ZERO);
        assert_eq!(out.proposed_dti, Rate::ZERO);
        assert!(out.passes_dti_check);
        assert_eq!(out.dti_assessment, "Excellent - very low debt burden");
    }

    #[test]
    fn test_negative_income_degenerates_to_zero_ratios() {
        let out = calculate_dti(
            &DtiInput {
                annual_income: dec!(-12000),
                monthly_debt_payments: dec!(500),
                proposed_loan_payment: dec!(200),
            },
            &policy(),
        );
        assert_eq!(out.current_dti, Rate::ZERO);
        assert_eq!(out.proposed_dti, Rate::ZERO);
    }

    #[test]
    fn test_fails_above_policy_maximum() {
        let out = calculate_dti(
            &DtiInput {
                annual_income: dec!(48000),
                monthly_debt_payments: dec!(1200),
                proposed_loan_payment: dec!(600),
            },
            &policy(),
        );
        // 1800 / 4000 = 45%
        assert_eq!(out.proposed_dti, dec!(45.00));
        assert!(!out.passes_dti_check);
        assert_eq!(out.dti_assessment, "Too high - exceeds maximum threshold");
    }

    #[test]
    fn test_passes_exactly_at_maximum() {
        let out = calculate_dti(
            &DtiInput {
                annual_income: dec!(120000),
                monthly_debt_payments: dec!(3000),
                proposed_loan_payment: dec!(1300),
            },
            &policy(),
        );
        // 4300 / 10000 = 43% exactly
        assert_eq!(out.proposed_dti, dec!(43.00));
        assert!(out.passes_dti_check);
        assert_eq!(out.dti_assessment, "Acceptable - at upper limit");
    }

    #[test]
    fn test_assessment_band_boundaries() {
        assert_eq!(assess_dti(dec!(0.20)), "Excellent - very low debt burden");
        assert_eq!(assess_dti(dec!(0.21)), "Good - manageable debt level");
        assert_eq!(assess_dti(dec!(0.35)), "Good - manageable debt level");
        assert_eq!(assess_dti(dec!(0.36)), "Acceptable - at upper limit");
        assert_eq!(assess_dti(dec!(0.43)), "Acceptable - at upper limit");
        assert_eq!(
            assess_dti(dec!(0.44)),
            "Too high - exceeds maximum threshold"
        );
    }

    #[test]
    fn test_percent_rounding_to_two_decimals() {
        let out = calculate_dti(
            &DtiInput {
                annual_income: dec!(70000),
                monthly_debt_payments: dec!(1234.56),
                proposed_loan_payment: Money::ZERO,
            },
            &policy(),
        );
        // 1234.56 / 5833.3333... = 21.1638...%
        assert_eq!(out.current_dti, dec!(21.16));
    }

    #[test]
    fn test_custom_maximum_changes_verdict_not_bands() {
        let policy = UnderwritingPolicy {
            max_dti: dec!(0.30),
            ..Default::default()
        };
        let out = calculate_dti(
            &DtiInput {
                annual_income: dec!(60000),
                monthly_debt_payments: dec!(1000),
                proposed_loan_payment: dec!(600),
            },
            &policy,
        );
        // 1600 / 5000 = 32%: fails the tightened policy but still
        // lands in the fixed "Good" band.
        assert!(!out.passes_dti_check);
        assert_eq!(out.max_allowed_dti, dec!(30.00));
        assert_eq!(out.dti_assessment, "Good - manageable debt level");
    }

    #[test]
    fn test_idempotent() {
        let input = DtiInput {
            annual_income: dec!(55000),
            monthly_debt_payments: dec!(800),
            proposed_loan_payment: dec!(350),
        };
        assert_eq!(
            calculate_dti(&input, &policy()),
            calculate_dti(&input, &policy())
        );
    }
}
