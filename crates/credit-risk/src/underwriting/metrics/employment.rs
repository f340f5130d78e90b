use serde::{Deserialize, Serialize};

use super::round2;
use crate::underwriting::domain::{EmploymentType, RiskBand};

/// Employment details declared at intake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmploymentProfile {
    pub employment_type: EmploymentType,
    pub years_in_current_job: f64,
    pub total_work_experience: f64,
    #[serde(default)]
    pub job_changes_last_5_years: u32,
}

/// Per-factor breakdown behind an employment stability score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmploymentFactors {
    pub employment_type_score: u32,
    pub tenure_score: f64,
    pub experience_score: f64,
    pub stability_score: u32,
}

/// Employment stability assessment on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmploymentStability {
    pub score: f64,
    pub risk_category: RiskBand,
    pub factors: EmploymentFactors,
}

const fn base_score(employment_type: EmploymentType) -> u32 {
    match employment_type {
        EmploymentType::Salaried => 30,
        EmploymentType::BusinessOwner => 25,
        EmploymentType::SelfEmployed => 20,
        EmploymentType::Freelancer => 15,
        EmploymentType::Unemployed => 0,
        EmploymentType::Other => 10,
    }
}

const fn job_change_score(job_changes_last_5_years: u32) -> u32 {
    match job_changes_last_5_years {
        0 => 20,
        1 => 15,
        2 => 10,
        3 => 5,
        _ => 0,
    }
}

/// Scores income reliability from the employment arrangement, tenure,
/// overall experience, and recent job churn. Total is capped at 100.
pub fn stability(profile: &EmploymentProfile) -> EmploymentStability {
    let employment_type_score = base_score(profile.employment_type);
    let tenure_score = (profile.years_in_current_job * 6.0).min(30.0);
    let experience_score = (profile.total_work_experience * 2.0).min(20.0);
    let stability_score = job_change_score(profile.job_changes_last_5_years);

    let total = f64::from(employment_type_score)
        + tenure_score
        + experience_score
        + f64::from(stability_score);
    let total = total.min(100.0);

    let risk_category = if total >= 70.0 {
        RiskBand::Low
    } else if total >= 40.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    EmploymentStability {
        score: round2(total),
        risk_category,
        factors: EmploymentFactors {
            employment_type_score,
            tenure_score: round2(tenure_score),
            experience_score: round2(experience_score),
            stability_score,
        },
    }
}
