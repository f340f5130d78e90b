//! Weighted composite scoring. Produces the 0-100 score and letter grade
//! that drive the final underwriting recommendation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::underwriting::domain::{RiskGrade, ScoreComponent};
use crate::underwriting::metrics::round2;

/// Utilization assumed when no revolving-credit figures are supplied.
pub const DEFAULT_UTILIZATION_PCT: f64 = 25.0;
/// FOIR assumed when no fixed-obligation figures are supplied.
pub const DEFAULT_FOIR_PCT: f64 = 40.0;

pub(crate) const CREDIT_SCORE_WEIGHT: f64 = 0.25;
pub(crate) const PAYMENT_HISTORY_WEIGHT: f64 = 0.20;
pub(crate) const DTI_WEIGHT: f64 = 0.15;
pub(crate) const LTV_WEIGHT: f64 = 0.15;
pub(crate) const EMPLOYMENT_WEIGHT: f64 = 0.10;
pub(crate) const UTILIZATION_WEIGHT: f64 = 0.10;
pub(crate) const FOIR_WEIGHT: f64 = 0.05;

/// One component's normalized score and its weight in the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScore {
    pub score: f64,
    pub weight: f64,
}

/// Composite risk score. Higher means lower risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeRiskScore {
    pub total_score: f64,
    pub grade: RiskGrade,
    pub component_scores: BTreeMap<ScoreComponent, ComponentScore>,
    pub underwriting_recommendation: &'static str,
}

/// Combines the individual metrics into a weighted 0-100 score. Ratio-style
/// inputs are inverted first so that a lower ratio scores higher.
pub fn composite(
    dti_percentage: f64,
    ltv_percentage: f64,
    credit_score: i64,
    employment_stability_score: f64,
    payment_history_score: f64,
    credit_utilization_percentage: f64,
    foir_percentage: f64,
) -> CompositeRiskScore {
    let credit_score_normalized = (credit_score - 300) as f64 / 600.0 * 100.0;

    let dti_score = (100.0 - dti_percentage * 1.5).max(0.0);
    let ltv_score = (100.0 - ltv_percentage * 0.9).max(0.0);
    let utilization_score = (100.0 - credit_utilization_percentage * 1.5).max(0.0);
    let foir_score = (100.0 - foir_percentage * 1.3).max(0.0);

    let component_scores = BTreeMap::from([
        (
            ScoreComponent::CreditScore,
            ComponentScore {
                score: round2(credit_score_normalized),
                weight: CREDIT_SCORE_WEIGHT,
            },
        ),
        (
            ScoreComponent::PaymentHistory,
            ComponentScore {
                score: round2(payment_history_score),
                weight: PAYMENT_HISTORY_WEIGHT,
            },
        ),
        (
            ScoreComponent::Dti,
            ComponentScore {
                score: round2(dti_score),
                weight: DTI_WEIGHT,
            },
        ),
        (
            ScoreComponent::Ltv,
            ComponentScore {
                score: round2(ltv_score),
                weight: LTV_WEIGHT,
            },
        ),
        (
            ScoreComponent::EmploymentStability,
            ComponentScore {
                score: round2(employment_stability_score),
                weight: EMPLOYMENT_WEIGHT,
            },
        ),
        (
            ScoreComponent::CreditUtilization,
            ComponentScore {
                score: round2(utilization_score),
                weight: UTILIZATION_WEIGHT,
            },
        ),
        (
            ScoreComponent::Foir,
            ComponentScore {
                score: round2(foir_score),
                weight: FOIR_WEIGHT,
            },
        ),
    ]);

    // The total is taken from the unrounded components; the map above is the
    // display breakdown.
    let total_score = credit_score_normalized * CREDIT_SCORE_WEIGHT
        + payment_history_score * PAYMENT_HISTORY_WEIGHT
        + dti_score * DTI_WEIGHT
        + ltv_score * LTV_WEIGHT
        + employment_stability_score * EMPLOYMENT_WEIGHT
        + utilization_score * UTILIZATION_WEIGHT
        + foir_score * FOIR_WEIGHT;
    let total_score = total_score.clamp(0.0, 100.0);

    let (grade, underwriting_recommendation) = if total_score >= 85.0 {
        (
            RiskGrade::A,
            "APPROVE - Excellent risk profile. Offer best available rates.",
        )
    } else if total_score >= 70.0 {
        (
            RiskGrade::B,
            "APPROVE - Good risk profile. Standard terms apply.",
        )
    } else if total_score >= 55.0 {
        (
            RiskGrade::C,
            "CONDITIONAL APPROVE - Moderate risk. Consider risk-based pricing.",
        )
    } else if total_score >= 40.0 {
        (
            RiskGrade::D,
            "REVIEW - High risk. Requires senior approval and mitigation.",
        )
    } else {
        (
            RiskGrade::E,
            "DECLINE - Very high risk. Does not meet underwriting criteria.",
        )
    };

    CompositeRiskScore {
        total_score: round2(total_score),
        grade,
        component_scores,
        underwriting_recommendation,
    }
}
