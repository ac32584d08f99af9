//! Lending policy parameters.
//!
//! The policy is read once at engine construction and treated as
//! immutable for the lifetime of a pipeline run, so concurrent
//! pipelines with different parameters cannot interfere. Invalid
//! parameters are fatal at validation time, never at a calculation
//! call.

use std::collections::BTreeMap;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::UnderwritingError;
use crate::types::{CreditTier, Rate, RiskLevel};
use crate::UnderwritingResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderwritingPolicy {
    /// Minimum acceptable credit score.
    pub min_credit_score: i32,
    /// Maximum proposed debt-to-income ratio, as a decimal (0.43 = 43%).
    pub max_dti: Rate,
    /// Base interest rate in percent (7.5 = 7.5%).
    pub base_rate: Rate,
    /// Lowest rate any adjustment combination can produce, in percent.
    pub rate_floor: Rate,
    /// Rate adjustment per credit tier, in percentage points. Tiers
    /// absent from the table price at a zero adjustment.
    pub tier_adjustments: BTreeMap<CreditTier, Rate>,
    /// Rate adjustment per risk level, in percentage points. Levels
    /// absent from the table price at a zero adjustment.
    pub risk_adjustments: BTreeMap<RiskLevel, Rate>,
}

impl Default for UnderwritingPolicy {
    fn default() -> Self {
        UnderwritingPolicy {
            min_credit_score: 620,
            max_dti: dec!(0.43),
            base_rate: dec!(7.5),
            rate_floor: dec!(5.0),
            tier_adjustments: BTreeMap::from([
                (CreditTier::Excellent, dec!(-1.5)),
                (CreditTier::Good, dec!(-0.5)),
                (CreditTier::Fair, dec!(1.0)),
                (CreditTier::Poor, dec!(2.5)),
            ]),
            risk_adjustments: BTreeMap::from([
                (RiskLevel::Low, dec!(-0.5)),
                (RiskLevel::Moderate, dec!(0.5)),
                (RiskLevel::High, dec!(1.5)),
                (RiskLevel::VeryHigh, dec!(3.0)),
            ]),
        }
    }
}

impl UnderwritingPolicy {
    /// Check the policy parameters, returning the first violation.
    pub fn validate(&self) -> UnderwritingResult<()> {
        if self.max_dti <= Rate::ZERO {
            return Err(UnderwritingError::InvalidConfig {
                field: "max_dti".into(),
                reason: "Maximum DTI ratio must be positive.".into(),
            });
        }
        if self.base_rate < Rate::ZERO {
            return Err(UnderwritingError::InvalidConfig {
                field: "base_rate".into(),
                reason: "Base interest rate must not be negative.".into(),
            });
        }
        if self.rate_floor < Rate::ZERO {
            return Err(UnderwritingError::InvalidConfig {
                field: "rate_floor".into(),
                reason: "Rate floor must not be negative.".into(),
            });
        }
        if !(300..=850).contains(&self.min_credit_score) {
            return Err(UnderwritingError::InvalidConfig {
                field: "min_credit_score".into(),
                reason: "Minimum credit score must lie within the 300-850 scale.".into(),
            });
        }
        Ok(())
    }

    /// Consume and return the policy if it validates.
    pub fn validated(self) -> UnderwritingResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Rate adjustment for a tier, if any. Absent tiers adjust by zero.
    pub fn tier_adjustment(&self, tier: Option<CreditTier>) -> Rate {
        tier.and_then(|t| self.tier_adjustments.get(&t).copied())
            .unwrap_or(Rate::ZERO)
    }

    /// Rate adjustment for a risk level, if any. Absent levels adjust
    /// by zero.
    pub fn risk_adjustment(&self, level: Option<RiskLevel>) -> Rate {
        level
            .and_then(|l| self.risk_adjustments.get(&l).copied())
            .unwrap_or(Rate::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(UnderwritingPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_reject_non_positive_max_dti() {
        let policy = UnderwritingPolicy {
            max_dti: dec!(-0.1),
            ..Default::default()
        };
        let err = policy.validated().unwrap_err();
        assert!(matches!(
            err,
            UnderwritingError::InvalidConfig { ref field, .. } if field == "max_dti"
        ));
    }

    #[test]
    fn test_reject_zero_max_dti() {
        let policy = UnderwritingPolicy {
            max_dti: Rate::ZERO,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_reject_negative_base_rate() {
        let policy = UnderwritingPolicy {
            base_rate: dec!(-1),
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_reject_negative_rate_floor() {
        let policy = UnderwritingPolicy {
            rate_floor: dec!(-5),
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_reject_min_credit_score_off_scale() {
        for score in [0, 299, 851] {
            let policy = UnderwritingPolicy {
                min_credit_score: score,
                ..Default::default()
            };
            assert!(policy.validate().is_err(), "score {score} should be rejected");
        }
    }

    #[test]
    fn test_subprime_has_no_default_tier_adjustment() {
        let policy = UnderwritingPolicy::default();
        assert_eq!(
            policy.tier_adjustment(Some(CreditTier::Subprime)),
            Rate::ZERO
        );
    }

    #[test]
    fn test_unknown_lookups_adjust_by_zero() {
        let policy = UnderwritingPolicy::default();
        assert_eq!(policy.tier_adjustment(None), Rate::ZERO);
        assert_eq!(policy.risk_adjustment(None), Rate::ZERO);
    }

    #[test]
    fn test_partial_policy_file_keeps_defaults() {
        let policy: UnderwritingPolicy =
            serde_json::from_str(r#"{"min_credit_score": 680}"#).unwrap();
        assert_eq!(policy.min_credit_score, 680);
        assert_eq!(policy.max_dti, dec!(0.43));
        assert_eq!(policy.base_rate, dec!(7.5));
    }
}
