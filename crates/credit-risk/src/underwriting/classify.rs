//! Point-based risk classification across five credit factors.
//!
//! Each factor contributes 0-2 points and the running total picks the
//! overall band. The cut lines here deliberately differ from the composite
//! scorer's weights; classification is coarse by intent.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::underwriting::domain::{FactorStatus, OverallRiskBand, RiskFactor};

/// Worst case across the five factors at two points each.
pub const MAX_RISK_POINTS: u8 = 10;

/// Status and point contribution of a single factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorAssessment {
    pub status: FactorStatus,
    pub points: u8,
}

/// Overall classification with the per-factor breakdown that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskClassification {
    pub overall_category: OverallRiskBand,
    pub total_risk_points: u8,
    pub max_risk_points: u8,
    pub individual_assessments: BTreeMap<RiskFactor, FactorAssessment>,
    pub recommendation: &'static str,
}

/// Classifies an applicant from already-computed metric values.
pub fn risk_category(
    dti_percentage: f64,
    ltv_percentage: f64,
    credit_score: i64,
    employment_stability_score: f64,
    payment_history_score: f64,
) -> RiskClassification {
    let mut assessments = BTreeMap::new();
    let mut total_risk_points: u8 = 0;

    let dti = if dti_percentage < 35.0 {
        FactorAssessment {
            status: FactorStatus::Good,
            points: 0,
        }
    } else if dti_percentage <= 50.0 {
        FactorAssessment {
            status: FactorStatus::Moderate,
            points: 1,
        }
    } else {
        FactorAssessment {
            status: FactorStatus::Poor,
            points: 2,
        }
    };
    total_risk_points += dti.points;
    assessments.insert(RiskFactor::Dti, dti);

    let ltv = if ltv_percentage < 80.0 {
        FactorAssessment {
            status: FactorStatus::Good,
            points: 0,
        }
    } else if ltv_percentage <= 90.0 {
        FactorAssessment {
            status: FactorStatus::Moderate,
            points: 1,
        }
    } else {
        FactorAssessment {
            status: FactorStatus::Poor,
            points: 2,
        }
    };
    total_risk_points += ltv.points;
    assessments.insert(RiskFactor::Ltv, ltv);

    let credit = if credit_score >= 750 {
        FactorAssessment {
            status: FactorStatus::Excellent,
            points: 0,
        }
    } else if credit_score >= 700 {
        FactorAssessment {
            status: FactorStatus::Good,
            points: 0,
        }
    } else if credit_score >= 650 {
        FactorAssessment {
            status: FactorStatus::Moderate,
            points: 1,
        }
    } else {
        FactorAssessment {
            status: FactorStatus::Poor,
            points: 2,
        }
    };
    total_risk_points += credit.points;
    assessments.insert(RiskFactor::CreditScore, credit);

    let employment = if employment_stability_score >= 70.0 {
        FactorAssessment {
            status: FactorStatus::Stable,
            points: 0,
        }
    } else if employment_stability_score >= 40.0 {
        FactorAssessment {
            status: FactorStatus::Moderate,
            points: 1,
        }
    } else {
        FactorAssessment {
            status: FactorStatus::Unstable,
            points: 2,
        }
    };
    total_risk_points += employment.points;
    assessments.insert(RiskFactor::Employment, employment);

    let payment = if payment_history_score >= 80.0 {
        FactorAssessment {
            status: FactorStatus::Excellent,
            points: 0,
        }
    } else if payment_history_score >= 50.0 {
        FactorAssessment {
            status: FactorStatus::Moderate,
            points: 1,
        }
    } else {
        FactorAssessment {
            status: FactorStatus::Poor,
            points: 2,
        }
    };
    total_risk_points += payment.points;
    assessments.insert(RiskFactor::PaymentHistory, payment);

    let (overall_category, recommendation) = if total_risk_points == 0 {
        (
            OverallRiskBand::Low,
            "Approve with standard terms. Strong credit profile.",
        )
    } else if total_risk_points <= 2 {
        (
            OverallRiskBand::Medium,
            "Approve with enhanced due diligence. Consider moderate rate adjustment.",
        )
    } else if total_risk_points <= 5 {
        (
            OverallRiskBand::High,
            "Additional mitigation required (collateral, guarantor). Higher risk pricing.",
        )
    } else {
        (
            OverallRiskBand::VeryHigh,
            "Consider rejection or significant risk mitigation measures.",
        )
    };

    RiskClassification {
        overall_category,
        total_risk_points,
        max_risk_points: MAX_RISK_POINTS,
        individual_assessments: assessments,
        recommendation,
    }
}
