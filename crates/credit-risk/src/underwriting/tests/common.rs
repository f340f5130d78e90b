use axum::response::Response;
use serde_json::Value;

use crate::underwriting::domain::EmploymentType;
use crate::underwriting::metrics::{EmploymentProfile, PaymentRecords};
use crate::underwriting::report::{
    ApplicantProfile, CollateralPledge, FixedObligations, LoanTerms, RevolvingCredit,
};

pub(super) fn salaried_employment() -> EmploymentProfile {
    EmploymentProfile {
        employment_type: EmploymentType::Salaried,
        years_in_current_job: 5.0,
        total_work_experience: 10.0,
        job_changes_last_5_years: 1,
    }
}

pub(super) fn clean_payment_records() -> PaymentRecords {
    PaymentRecords {
        total_accounts: 5,
        on_time_payments: 58,
        late_payments_30_days: 2,
        late_payments_60_days: 0,
        late_payments_90_plus_days: 0,
        defaults: 0,
    }
}

/// A well-documented applicant: every optional section present, every
/// metric comfortably inside the low-risk bands.
pub(super) fn strong_profile() -> ApplicantProfile {
    ApplicantProfile {
        applicant_name: Some("Asha Verma".to_string()),
        monthly_income: 150_000.0,
        total_monthly_debt: 30_000.0,
        loan_amount: 3_000_000.0,
        property_value: 5_000_000.0,
        credit_score: 780,
        employment: salaried_employment(),
        revolving_credit: Some(RevolvingCredit {
            credit_used: 50_000.0,
            credit_limit: 400_000.0,
        }),
        fixed_obligations: Some(FixedObligations {
            existing_emis: 20_000.0,
            proposed_emi: 25_000.0,
            other_obligations: 5_000.0,
        }),
        payment_records: Some(clean_payment_records()),
        loan_terms: Some(LoanTerms {
            annual_interest_rate: 8.5,
            tenure_months: 240,
        }),
        business_income: None,
        collateral: Some(CollateralPledge {
            collateral_value: 5_000_000.0,
            liquidation_discount: 0.2,
        }),
    }
}

/// Only the required fields; every optional section left out so the
/// assessment has to fall back to neutral scores and composite defaults.
pub(super) fn minimal_profile() -> ApplicantProfile {
    ApplicantProfile {
        applicant_name: None,
        monthly_income: 80_000.0,
        total_monthly_debt: 20_000.0,
        loan_amount: 2_000_000.0,
        property_value: 2_400_000.0,
        credit_score: 710,
        employment: salaried_employment(),
        revolving_credit: None,
        fixed_obligations: None,
        payment_records: None,
        loan_terms: None,
        business_income: None,
        collateral: None,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
