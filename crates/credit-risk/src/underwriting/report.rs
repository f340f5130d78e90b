//! Whole-profile assessment: runs every calculator the intake has data for
//! and folds the results into a single underwriting report.

use serde::{Deserialize, Serialize};

use crate::underwriting::classify::{self, RiskClassification};
use crate::underwriting::domain::{CreditRating, InvalidInput, RiskBand};
use crate::underwriting::metrics::coverage::DEFAULT_LIQUIDATION_DISCOUNT;
use crate::underwriting::metrics::{
    amortization, coverage, credit, employment, payments, ratios, CollateralCoverage,
    CreditScoreAssessment, DebtServiceCoverage, EmploymentProfile, EmploymentStability,
    FoirAssessment, LoanInstallment, PaymentHistory, PaymentRecords, RatioAssessment,
};
use crate::underwriting::score::{
    self, CompositeRiskScore, DEFAULT_FOIR_PCT, DEFAULT_UTILIZATION_PCT,
};

/// Revolving credit position across all lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevolvingCredit {
    pub credit_used: f64,
    pub credit_limit: f64,
}

/// Fixed monthly commitments, including the EMI for the loan under review.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedObligations {
    pub existing_emis: f64,
    pub proposed_emi: f64,
    #[serde(default)]
    pub other_obligations: f64,
}

/// Pricing of the requested loan, used to compute its repayment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub annual_interest_rate: f64,
    pub tenure_months: u32,
}

/// Annual figures for business applicants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessIncome {
    pub net_operating_income: f64,
    pub total_debt_service: f64,
}

/// Collateral pledged against the loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollateralPledge {
    pub collateral_value: f64,
    #[serde(default = "default_liquidation_discount")]
    pub liquidation_discount: f64,
}

fn default_liquidation_discount() -> f64 {
    DEFAULT_LIQUIDATION_DISCOUNT
}

/// Complete applicant intake for one underwriting pass. The required fields
/// feed the core metrics; each optional section unlocks a further
/// calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(default)]
    pub applicant_name: Option<String>,
    pub monthly_income: f64,
    pub total_monthly_debt: f64,
    pub loan_amount: f64,
    pub property_value: f64,
    pub credit_score: i64,
    pub employment: EmploymentProfile,
    #[serde(default)]
    pub revolving_credit: Option<RevolvingCredit>,
    #[serde(default)]
    pub fixed_obligations: Option<FixedObligations>,
    #[serde(default)]
    pub payment_records: Option<PaymentRecords>,
    #[serde(default)]
    pub loan_terms: Option<LoanTerms>,
    #[serde(default)]
    pub business_income: Option<BusinessIncome>,
    #[serde(default)]
    pub collateral: Option<CollateralPledge>,
}

/// Every metric computed for the profile. Sections the intake had no data
/// for are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsBreakdown {
    pub debt_to_income: RatioAssessment,
    pub loan_to_value: RatioAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_utilization: Option<RatioAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_obligation_ratio: Option<FoirAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment: Option<LoanInstallment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_service_coverage: Option<DebtServiceCoverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collateral_coverage: Option<CollateralCoverage>,
    pub employment_stability: EmploymentStability,
    pub payment_history: PaymentHistory,
    pub credit_rating: CreditScoreAssessment,
}

/// The assembled underwriting view of one applicant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnderwritingReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    pub metrics: MetricsBreakdown,
    pub classification: RiskClassification,
    pub composite: CompositeRiskScore,
    pub observations: Vec<String>,
}

/// Assesses a full profile. Any section that fails validation fails the
/// whole assessment; partial reports are never produced.
pub fn assess_profile(profile: &ApplicantProfile) -> Result<UnderwritingReport, InvalidInput> {
    let debt_to_income =
        ratios::debt_to_income(profile.monthly_income, profile.total_monthly_debt)?;
    let loan_to_value = ratios::loan_to_value(profile.loan_amount, profile.property_value)?;

    let credit_utilization = match &profile.revolving_credit {
        Some(revolving) => Some(ratios::credit_utilization(
            revolving.credit_used,
            revolving.credit_limit,
        )?),
        None => None,
    };

    let fixed_obligation_ratio = match &profile.fixed_obligations {
        Some(obligations) => Some(ratios::fixed_obligation_ratio(
            profile.monthly_income,
            obligations.existing_emis,
            obligations.proposed_emi,
            obligations.other_obligations,
        )?),
        None => None,
    };

    let installment = match &profile.loan_terms {
        Some(terms) => Some(amortization::monthly_installment(
            profile.loan_amount,
            terms.annual_interest_rate,
            terms.tenure_months,
        )?),
        None => None,
    };

    let debt_service_coverage = match &profile.business_income {
        Some(income) => Some(coverage::debt_service(
            income.net_operating_income,
            income.total_debt_service,
        )?),
        None => None,
    };

    let collateral_coverage = match &profile.collateral {
        Some(pledge) => Some(coverage::collateral(
            pledge.collateral_value,
            profile.loan_amount,
            pledge.liquidation_discount,
        )?),
        None => None,
    };

    let employment_stability = employment::stability(&profile.employment);

    let payment_history = match &profile.payment_records {
        Some(records) => payments::history_score(records)?,
        None => PaymentHistory::neutral(),
    };

    let credit_rating = credit::rate_score(profile.credit_score)?;

    let utilization_pct = credit_utilization
        .map(|assessment| assessment.percentage)
        .unwrap_or(DEFAULT_UTILIZATION_PCT);
    let foir_pct = fixed_obligation_ratio
        .map(|assessment| assessment.percentage)
        .unwrap_or(DEFAULT_FOIR_PCT);

    let classification = classify::risk_category(
        debt_to_income.percentage,
        loan_to_value.percentage,
        profile.credit_score,
        employment_stability.score,
        payment_history.score(),
    );

    let composite = score::composite(
        debt_to_income.percentage,
        loan_to_value.percentage,
        profile.credit_score,
        employment_stability.score,
        payment_history.score(),
        utilization_pct,
        foir_pct,
    );

    let metrics = MetricsBreakdown {
        debt_to_income,
        loan_to_value,
        credit_utilization,
        fixed_obligation_ratio,
        installment,
        debt_service_coverage,
        collateral_coverage,
        employment_stability,
        payment_history,
        credit_rating,
    };

    let observations = gather_observations(&metrics);

    Ok(UnderwritingReport {
        applicant_name: profile.applicant_name.clone(),
        metrics,
        classification,
        composite,
        observations,
    })
}

fn gather_observations(metrics: &MetricsBreakdown) -> Vec<String> {
    let mut observations = Vec::new();

    if metrics.debt_to_income.risk_category == RiskBand::High {
        observations.push(format!(
            "Debt-to-income at {:.2}% exceeds the 50% comfort ceiling",
            metrics.debt_to_income.percentage
        ));
    }

    if metrics.loan_to_value.risk_category == RiskBand::High {
        observations.push(format!(
            "Loan-to-value at {:.2}% leaves a thin equity cushion",
            metrics.loan_to_value.percentage
        ));
    }

    if let Some(utilization) = &metrics.credit_utilization {
        if utilization.risk_category == RiskBand::High {
            observations.push(format!(
                "Credit utilization at {:.2}% signals revolving stress",
                utilization.percentage
            ));
        }
    } else {
        observations.push(format!(
            "Revolving credit not reported; composite assumes {DEFAULT_UTILIZATION_PCT:.1}% utilization"
        ));
    }

    if let Some(foir) = &metrics.fixed_obligation_ratio {
        if foir.risk_category == RiskBand::High {
            observations.push(format!(
                "Fixed obligations absorb {:.2}% of monthly income",
                foir.percentage
            ));
        }
    } else {
        observations.push(format!(
            "Fixed obligations not reported; composite assumes {DEFAULT_FOIR_PCT:.1}% FOIR"
        ));
    }

    if let Some(dscr) = &metrics.debt_service_coverage {
        if dscr.risk_category == RiskBand::High {
            observations.push(format!(
                "Debt service coverage of {:.2} is below break-even",
                dscr.ratio
            ));
        }
    }

    if let Some(cover) = &metrics.collateral_coverage {
        if cover.shortfall > 0.0 {
            observations.push(format!(
                "Collateral leaves a shortfall of {:.2} against the requested loan",
                cover.shortfall
            ));
        }
    }

    if metrics.employment_stability.risk_category == RiskBand::High {
        observations.push(format!(
            "Employment stability score {:.0} indicates unreliable income",
            metrics.employment_stability.score
        ));
    }

    if matches!(metrics.payment_history, PaymentHistory::NoRecords { .. }) {
        observations.push("No payment history on file; scored neutral at 50".to_string());
    }

    if matches!(
        metrics.credit_rating.rating,
        CreditRating::Poor | CreditRating::VeryPoor
    ) {
        observations.push(format!(
            "Bureau score {} rated {}",
            metrics.credit_rating.score,
            metrics.credit_rating.rating.label()
        ));
    }

    observations
}
