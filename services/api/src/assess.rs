use crate::infra::{load_profile, sample_profile};
use clap::Args;
use credit_risk::error::AppError;
use credit_risk::underwriting::{
    assess_profile, catalog, ApplicantProfile, PaymentHistory, UnderwritingReport,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Applicant profile as a JSON file. Defaults to a built-in sample.
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Print the report as JSON instead of the text summary.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ToolsArgs {
    /// Print the catalog as JSON instead of the text listing.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { profile, json } = args;

    let (profile, source) = match profile {
        Some(path) => {
            let label = path.display().to_string();
            (load_profile(&path)?, label)
        }
        None => (sample_profile(), "built-in sample profile".to_string()),
    };

    let report = assess_profile(&profile)?;

    if json {
        let payload = serde_json::to_string_pretty(&report).map_err(AppError::Profile)?;
        println!("{payload}");
        return Ok(());
    }

    render_report(&profile, &report, &source);
    Ok(())
}

pub(crate) fn run_tools(args: ToolsArgs) -> Result<(), AppError> {
    let descriptors = catalog();

    if args.json {
        let payload = serde_json::to_string_pretty(&descriptors).map_err(AppError::Profile)?;
        println!("{payload}");
        return Ok(());
    }

    println!("Registered underwriting tools");
    for descriptor in &descriptors {
        println!("- {}: {}", descriptor.name, descriptor.description);
        for parameter in descriptor.parameters {
            let requirement = if parameter.required {
                "required"
            } else {
                "optional"
            };
            println!("    {} ({requirement})", parameter.name);
        }
    }
    Ok(())
}

pub(crate) fn render_report(
    profile: &ApplicantProfile,
    report: &UnderwritingReport,
    source: &str,
) {
    println!("Underwriting assessment");
    match &report.applicant_name {
        Some(name) => println!("Applicant: {name}"),
        None => println!("Applicant: (unnamed)"),
    }
    println!("Profile source: {source}");
    println!(
        "Requested loan {:.2} against property valued {:.2}",
        profile.loan_amount, profile.property_value
    );

    let metrics = &report.metrics;

    println!("\nCore ratios");
    println!(
        "- Debt-to-income: {:.2}% ({})",
        metrics.debt_to_income.percentage,
        metrics.debt_to_income.risk_category.label()
    );
    println!(
        "- Loan-to-value: {:.2}% ({})",
        metrics.loan_to_value.percentage,
        metrics.loan_to_value.risk_category.label()
    );
    if let Some(utilization) = &metrics.credit_utilization {
        println!(
            "- Credit utilization: {:.2}% ({})",
            utilization.percentage,
            utilization.risk_category.label()
        );
    }
    if let Some(foir) = &metrics.fixed_obligation_ratio {
        println!(
            "- Fixed obligations: {:.2}% of income | {:.2} left after commitments ({})",
            foir.percentage,
            foir.remaining_income,
            foir.risk_category.label()
        );
    }

    if let Some(installment) = &metrics.installment {
        println!("\nLoan servicing");
        println!(
            "- EMI {:.2} | total payment {:.2} | total interest {:.2}",
            installment.emi, installment.total_payment, installment.total_interest
        );
        println!(
            "- Interest-to-principal {:.4} at {:.4} monthly rate",
            installment.interest_to_principal_ratio, installment.monthly_interest_rate
        );
    }

    if metrics.debt_service_coverage.is_some() || metrics.collateral_coverage.is_some() {
        println!("\nCoverage");
    }
    if let Some(dscr) = &metrics.debt_service_coverage {
        println!(
            "- Debt service coverage: {:.4} | excess income {:.2} ({})",
            dscr.ratio,
            dscr.excess_income,
            dscr.risk_category.label()
        );
    }
    if let Some(collateral) = &metrics.collateral_coverage {
        println!(
            "- Collateral coverage: {:.2}% | net value {:.2} | shortfall {:.2} ({})",
            collateral.coverage_percentage,
            collateral.net_collateral_value,
            collateral.shortfall,
            collateral.risk_category.label()
        );
    }

    println!("\nStability");
    println!(
        "- Employment stability: {:.0}/100 ({})",
        metrics.employment_stability.score,
        metrics.employment_stability.risk_category.label()
    );
    match &metrics.payment_history {
        PaymentHistory::Scored {
            score,
            on_time_rate,
            total_payment_records,
            penalty_points,
            risk_category,
        } => println!(
            "- Payment history: {:.2} | {:.2}% on time over {} records | {} penalty points ({})",
            score,
            on_time_rate,
            total_payment_records,
            penalty_points,
            risk_category.label()
        ),
        PaymentHistory::NoRecords {
            score,
            risk_category,
            note,
        } => println!(
            "- Payment history: {:.2} ({}) | {}",
            score,
            risk_category.label(),
            note
        ),
    }
    println!(
        "- Bureau score {} rated {} ({})",
        metrics.credit_rating.score,
        metrics.credit_rating.rating.label(),
        metrics.credit_rating.risk_category.label()
    );
    println!("  {}", metrics.credit_rating.recommendation);

    let classification = &report.classification;
    println!("\nRisk classification");
    println!(
        "- Overall {} with {}/{} risk points",
        classification.overall_category.label(),
        classification.total_risk_points,
        classification.max_risk_points
    );
    for (factor, assessment) in &classification.individual_assessments {
        println!(
            "  - {:?}: {:?} (+{} points)",
            factor, assessment.status, assessment.points
        );
    }
    println!("- Recommendation: {}", classification.recommendation);

    let composite = &report.composite;
    println!("\nComposite score");
    println!(
        "- Total {:.2} | grade {}",
        composite.total_score,
        composite.grade.label()
    );
    for (component, score) in &composite.component_scores {
        println!(
            "  - {:?}: {:.2} (weight {:.2})",
            component, score.score, score.weight
        );
    }
    println!("- Recommendation: {}", composite.underwriting_recommendation);

    if report.observations.is_empty() {
        println!("\nObservations: none");
    } else {
        println!("\nObservations");
        for observation in &report.observations {
            println!("- {observation}");
        }
    }
}
