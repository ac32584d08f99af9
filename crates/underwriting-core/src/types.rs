use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates. Context decides the unit: interest rates are percentages
/// (7.5 = 7.5%), DTI ratios are decimals (0.43 = 43%).
pub type Rate = Decimal;

/// Raw applicant financial attributes. Immutable input; no calculator
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantFinancials {
    /// Credit score, expected in 300-850. Out-of-range values are not
    /// rejected here; they classify through the same ladders.
    pub credit_score: i32,
    #[serde(default)]
    pub bankruptcies: u32,
    #[serde(default)]
    pub late_payments_last_year: u32,
    pub annual_income: Money,
    pub monthly_debt_payments: Money,
    #[serde(default)]
    pub years_employed: Decimal,
}

/// Discrete creditworthiness classification from score banding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Poor,
    Subprime,
}

impl CreditTier {
    /// Parse a tier label. Unknown labels return None so callers can
    /// degrade to a zero rate adjustment instead of failing.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "EXCELLENT" => Some(CreditTier::Excellent),
            "GOOD" => Some(CreditTier::Good),
            "FAIR" => Some(CreditTier::Fair),
            "POOR" => Some(CreditTier::Poor),
            "SUBPRIME" => Some(CreditTier::Subprime),
            _ => None,
        }
    }
}

impl std::fmt::Display for CreditTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditTier::Excellent => write!(f, "EXCELLENT"),
            CreditTier::Good => write!(f, "GOOD"),
            CreditTier::Fair => write!(f, "FAIR"),
            CreditTier::Poor => write!(f, "POOR"),
            CreditTier::Subprime => write!(f, "SUBPRIME"),
        }
    }
}

/// Discrete risk classification from the composite risk score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Parse a risk-level label. Unknown labels return None so callers
    /// can degrade to a zero rate adjustment instead of failing.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "LOW" => Some(RiskLevel::Low),
            "MODERATE" => Some(RiskLevel::Moderate),
            "HIGH" => Some(RiskLevel::High),
            "VERY_HIGH" => Some(RiskLevel::VeryHigh),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Moderate => write!(f, "MODERATE"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::VeryHigh => write!(f, "VERY_HIGH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_labels_roundtrip() {
        for tier in [
            CreditTier::Excellent,
            CreditTier::Good,
            CreditTier::Fair,
            CreditTier::Poor,
            CreditTier::Subprime,
        ] {
            assert_eq!(CreditTier::from_label(&tier.to_string()), Some(tier));
        }
    }

    #[test]
    fn test_unknown_tier_label_is_none() {
        assert_eq!(CreditTier::from_label("PLATINUM"), None);
        assert_eq!(CreditTier::from_label("excellent"), None);
    }

    #[test]
    fn test_risk_level_labels_roundtrip() {
        for level in [
            RiskLevel::Low,
            RiskLevel::Moderate,
            RiskLevel::High,
            RiskLevel::VeryHigh,
        ] {
            assert_eq!(RiskLevel::from_label(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn test_tier_serializes_as_screaming_label() {
        let json = serde_json::to_string(&CreditTier::Subprime).unwrap();
        assert_eq!(json, "\"SUBPRIME\"");
        let json = serde_json::to_string(&RiskLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"VERY_HIGH\"");
    }
}
