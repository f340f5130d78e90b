use credit_risk::error::AppError;
use credit_risk::underwriting::{
    ApplicantProfile, EmploymentProfile, EmploymentType, FixedObligations, LoanTerms,
    PaymentRecords, RevolvingCredit,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_profile(path: &Path) -> Result<ApplicantProfile, AppError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(AppError::Profile)
}

/// Fully documented salaried applicant used when no profile file is given.
pub(crate) fn sample_profile() -> ApplicantProfile {
    ApplicantProfile {
        applicant_name: Some("Rohan Mehta".to_string()),
        monthly_income: 145_000.0,
        total_monthly_debt: 32_000.0,
        loan_amount: 2_800_000.0,
        property_value: 4_200_000.0,
        credit_score: 742,
        employment: EmploymentProfile {
            employment_type: EmploymentType::Salaried,
            years_in_current_job: 4.5,
            total_work_experience: 11.0,
            job_changes_last_5_years: 1,
        },
        revolving_credit: Some(RevolvingCredit {
            credit_used: 65_000.0,
            credit_limit: 350_000.0,
        }),
        fixed_obligations: Some(FixedObligations {
            existing_emis: 18_000.0,
            proposed_emi: 24_500.0,
            other_obligations: 4_500.0,
        }),
        payment_records: Some(PaymentRecords {
            total_accounts: 4,
            on_time_payments: 70,
            late_payments_30_days: 3,
            late_payments_60_days: 1,
            late_payments_90_plus_days: 0,
            defaults: 0,
        }),
        loan_terms: Some(LoanTerms {
            annual_interest_rate: 8.75,
            tenure_months: 240,
        }),
        business_income: None,
        collateral: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profile_passes_assessment() {
        let report = credit_risk::underwriting::assess_profile(&sample_profile())
            .expect("sample profile is valid");
        assert_eq!(report.applicant_name.as_deref(), Some("Rohan Mehta"));
    }

    #[test]
    fn load_profile_surfaces_io_failure() {
        let err = load_profile(Path::new("/nonexistent/profile.json"))
            .expect_err("missing file fails");
        assert!(matches!(err, AppError::Io(_)));
    }
}
