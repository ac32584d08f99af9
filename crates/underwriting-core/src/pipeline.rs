//! End-to-end underwriting sequencing.
//!
//! The four calculators are independently invocable and side-effect
//! free; this module fixes the data-dependency order between them:
//! credit evaluation and DTI run on raw applicant attributes, the risk
//! scorer consumes their outputs plus raw attributes, and the pricer
//! consumes the risk scorer's outputs plus the requested amount and
//! term. Nothing here holds state across invocations.

use serde::{Deserialize, Serialize};

use crate::credit::{evaluate_credit, CreditCheckInput, CreditEvaluation};
use crate::dti::{calculate_dti, proposed_dti_ratio, DtiInput, DtiOutput};
use crate::policy::UnderwritingPolicy;
use crate::pricing::{calculate_pricing, LoanOffer, LoanPricingInput};
use crate::risk::{calculate_risk_score, Recommendation, RiskAssessment, RiskScoringInput};
use crate::types::{ApplicantFinancials, Money};
use crate::UnderwritingResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    #[serde(default)]
    pub application_id: String,
    pub financials: ApplicantFinancials,
    pub requested_amount: Money,
    pub requested_term_months: u32,
    /// Monthly payment assumed for the proposed loan when computing
    /// DTI. Zero means underwrite against current debts only.
    #[serde(default)]
    pub proposed_monthly_payment: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Approved,
    Denied,
    ReferToUnderwriter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderwritingDecision {
    pub application_id: String,
    pub status: DecisionStatus,
    pub credit: CreditEvaluation,
    pub dti: DtiOutput,
    pub risk: RiskAssessment,
    /// Present only when the recommendation is an approval.
    pub offer: Option<LoanOffer>,
    pub decision_reasons: Vec<String>,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Sequences the four calculators under one validated policy.
#[derive(Debug, Clone)]
pub struct Underwriter {
    policy: UnderwritingPolicy,
}

impl Underwriter {
    /// Build an underwriter. Policy validation failures are fatal here,
    /// never deferred to an underwrite call.
    pub fn new(policy: UnderwritingPolicy) -> UnderwritingResult<Self> {
        Ok(Underwriter {
            policy: policy.validated()?,
        })
    }

    pub fn policy(&self) -> &UnderwritingPolicy {
        &self.policy
    }

    /// Run the full pipeline on one request.
    pub fn underwrite(&self, request: &LoanRequest) -> UnderwritingDecision {
        let f = &request.financials;

        let credit = evaluate_credit(
            &CreditCheckInput {
                credit_score: f.credit_score,
                bankruptcies: f.bankruptcies,
                late_payments: f.late_payments_last_year,
            },
            &self.policy,
        );

        let dti_input = DtiInput {
            annual_income: f.annual_income,
            monthly_debt_payments: f.monthly_debt_payments,
            proposed_loan_payment: request.proposed_monthly_payment,
        };
        let dti = calculate_dti(&dti_input, &self.policy);

        // The risk scorer takes the unrounded proposed ratio, not the
        // reported percentage.
        let risk = calculate_risk_score(
            &RiskScoringInput {
                credit_score: f.credit_score,
                dti_ratio: proposed_dti_ratio(&dti_input),
                annual_income: f.annual_income,
                years_employed: f.years_employed,
                bankruptcies: f.bankruptcies,
                loan_amount: request.requested_amount,
            },
            &self.policy,
        );

        let status = match risk.recommendation {
            Recommendation::Approve | Recommendation::ApproveWithConditions => {
                DecisionStatus::Approved
            }
            Recommendation::Refer => DecisionStatus::ReferToUnderwriter,
            Recommendation::DenyCreditScore
            | Recommendation::DenyDti
            | Recommendation::DenyHighRisk => DecisionStatus::Denied,
        };

        let offer = if status == DecisionStatus::Approved {
            Some(calculate_pricing(
                &LoanPricingInput {
                    loan_amount: request.requested_amount,
                    term_months: request.requested_term_months,
                    credit_tier: credit.credit_tier.to_string(),
                    risk_level: risk.risk_level.to_string(),
                },
                &self.policy,
            ))
        } else {
            None
        };

        let mut decision_reasons = vec![risk.recommendation.to_string()];
        decision_reasons.extend(credit.risk_factors.iter().cloned());
        if !dti.passes_dti_check {
            decision_reasons.push(format!(
                "Proposed DTI {}% exceeds maximum {}%",
                dti.proposed_dti, dti.max_allowed_dti
            ));
        }

        UnderwritingDecision {
            application_id: request.application_id.clone(),
            status,
            credit,
            dti,
            risk,
            offer,
            decision_reasons,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
