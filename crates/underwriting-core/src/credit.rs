//! Credit profile evaluation.
//!
//! Classifies a raw credit score into a tier and derives the ordered
//! qualitative risk / positive factors an underwriter reads. Pure and
//! infallible: out-of-range scores are not rejected, they classify
//! through the same ladder (caller validates upstream).

use serde::{Deserialize, Serialize};

use crate::policy::UnderwritingPolicy;
use crate::types::CreditTier;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCheckInput {
    /// Credit score, expected in 300-850.
    pub credit_score: i32,
    #[serde(default)]
    pub bankruptcies: u32,
    /// Late payments in the last 12 months.
    #[serde(default)]
    pub late_payments: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEvaluation {
    pub credit_score: i32,
    pub credit_tier: CreditTier,
    pub meets_minimum: bool,
    /// Order-preserving: score factor first, then bankruptcies, then
    /// payment history.
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Evaluate a credit profile against the policy minimum.
pub fn evaluate_credit(
    input: &CreditCheckInput,
    policy: &UnderwritingPolicy,
) -> CreditEvaluation {
    let mut risk_factors = Vec::new();
    let mut positive_factors = Vec::new();

    if input.credit_score >= 750 {
        positive_factors.push("Excellent credit score".to_string());
    } else if input.credit_score >= 700 {
        positive_factors.push("Good credit score".to_string());
    } else if input.credit_score >= 650 {
        risk_factors.push("Fair credit score - higher risk".to_string());
    } else {
        risk_factors.push("Poor credit score - high risk".to_string());
    }

    if input.bankruptcies > 0 {
        risk_factors.push(format!("{} bankruptcy(ies) on record", input.bankruptcies));
    } else {
        positive_factors.push("No bankruptcies".to_string());
    }

    // 1-2 late payments produce no factor either way.
    if input.late_payments > 2 {
        risk_factors.push(format!(
            "{} late payments in last year",
            input.late_payments
        ));
    } else if input.late_payments == 0 {
        positive_factors.push("Perfect payment history".to_string());
    }

    CreditEvaluation {
        credit_score: input.credit_score,
        credit_tier: classify_tier(input.credit_score),
        meets_minimum: input.credit_score >= policy.min_credit_score,
        risk_factors,
        positive_factors,
    }
}

/// Tier ladder: inclusive lower bounds, first match wins.
fn classify_tier(score: i32) -> CreditTier {
    if score >= 750 {
        CreditTier::Excellent
    } else if score >= 700 {
        CreditTier::Good
    } else if score >= 650 {
        CreditTier::Fair
    } else if score >= 620 {
        CreditTier::Poor
    } else {
        CreditTier::Subprime
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

    fn check(score: i32, bankruptcies: u32, late_payments: u32) -> CreditEvaluation {
        evaluate_credit(
            &CreditCheckInput {
                credit_score: score,
                bankruptcies,
                late_payments,
            },
            &policy(),
        )
    }

    #[test]
    fn test_tier_boundary_at_750() {
        assert_eq!(check(750, 0, 0).credit_tier, CreditTier::Excellent);
        assert_eq!(check(749, 0, 0).credit_tier, CreditTier::Good);
    }

    #[test]
    fn test_tier_ladder() {
        assert_eq!(check(850, 0, 0).credit_tier, CreditTier::Excellent);
        assert_eq!(check(700, 0, 0).credit_tier, CreditTier::Good);
        assert_eq!(check(699, 0, 0).credit_tier, CreditTier::Fair);
        assert_eq!(check(650, 0, 0).credit_tier, CreditTier::Fair);
        assert_eq!(check(649, 0, 0).credit_tier, CreditTier::Poor);
        assert_eq!(check(620, 0, 0).credit_tier, CreditTier::Poor);
        assert_eq!(check(619, 0, 0).credit_tier, CreditTier::Subprime);
        assert_eq!(check(300, 0, 0).credit_tier, CreditTier::Subprime);
    }

    #[test]
    fn test_out_of_range_scores_still_classify() {
        assert_eq!(check(900, 0, 0).credit_tier, CreditTier::Excellent);
        assert_eq!(check(0, 0, 0).credit_tier, CreditTier::Subprime);
    }

    #[test]
    fn test_meets_minimum_at_policy_threshold() {
        assert!(check(620, 0, 0).meets_minimum);
        assert!(!check(619, 0, 0).meets_minimum);
    }

    #[test]
    fn test_clean_profile_factors() {
        let eval = check(780, 0, 0);
        assert_eq!(eval.risk_factors, Vec::<String>::new());
        assert_eq!(
            eval.positive_factors,
            vec![
                "Excellent credit score".to_string(),
                "No bankruptcies".to_string(),
                "Perfect payment history".to_string(),
            ]
        );
    }

    #[test]
    fn test_troubled_profile_factors_preserve_order() {
        let eval = check(600, 2, 4);
        assert_eq!(
            eval.risk_factors,
            vec![
                "Poor credit score - high risk".to_string(),
                "2 bankruptcy(ies) on record".to_string(),
                "4 late payments in last year".to_string(),
            ]
        );
        assert_eq!(eval.positive_factors, Vec::<String>::new());
    }

    #[test]
    fn test_one_or_two_late_payments_produce_no_factor() {
        for late in [1, 2] {
            let eval = check(760, 0, late);
            assert!(!eval
                .risk_factors
                .iter()
                .any(|f| f.contains("late payments")));
            assert!(!eval
                .positive_factors
                .iter()
                .any(|f| f.contains("Perfect payment history")));
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(check(710, 1, 3), check(710, 1, 3));
    }

    #[test]
    fn test_custom_minimum_threshold() {
        let policy = UnderwritingPolicy {
            min_credit_score: 700,
            ..Default::default()
        };
        let eval = evaluate_credit(
            &CreditCheckInput {
                credit_score: 680,
                bankruptcies: 0,
                late_payments: 0,
            },
            &policy,
        );
        assert!(!eval.meets_minimum);
        assert_eq!(eval.credit_tier, CreditTier::Fair);
    }
}
