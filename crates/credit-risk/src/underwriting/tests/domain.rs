use serde_json::json;

use crate::underwriting::domain::{
    CreditRating, EmploymentType, FactorStatus, InvalidInput, OverallRiskBand, RiskBand,
    RiskFactor, RiskGrade, ScoreComponent,
};

#[test]
fn risk_bands_serialize_in_screaming_snake_case() {
    assert_eq!(serde_json::to_value(RiskBand::Low).unwrap(), json!("LOW"));
    assert_eq!(
        serde_json::to_value(RiskBand::Medium).unwrap(),
        json!("MEDIUM")
    );
    assert_eq!(serde_json::to_value(RiskBand::High).unwrap(), json!("HIGH"));
    assert_eq!(
        serde_json::to_value(OverallRiskBand::VeryHigh).unwrap(),
        json!("VERY_HIGH")
    );
}

#[test]
fn labels_match_wire_names() {
    assert_eq!(RiskBand::Low.label(), "LOW");
    assert_eq!(OverallRiskBand::VeryHigh.label(), "VERY_HIGH");
    assert_eq!(CreditRating::VeryPoor.label(), "VERY_POOR");
    assert_eq!(RiskGrade::C.label(), "C");
}

#[test]
fn grades_serialize_as_bare_letters() {
    assert_eq!(serde_json::to_value(RiskGrade::A).unwrap(), json!("A"));
    assert_eq!(serde_json::to_value(RiskGrade::E).unwrap(), json!("E"));
}

#[test]
fn factor_statuses_serialize_in_screaming_snake_case() {
    assert_eq!(
        serde_json::to_value(FactorStatus::Unstable).unwrap(),
        json!("UNSTABLE")
    );
    assert_eq!(
        serde_json::to_value(FactorStatus::Excellent).unwrap(),
        json!("EXCELLENT")
    );
}

#[test]
fn breakdown_keys_serialize_in_snake_case() {
    assert_eq!(
        serde_json::to_value(RiskFactor::PaymentHistory).unwrap(),
        json!("payment_history")
    );
    assert_eq!(
        serde_json::to_value(ScoreComponent::EmploymentStability).unwrap(),
        json!("employment_stability")
    );
    assert_eq!(
        serde_json::to_value(ScoreComponent::Foir).unwrap(),
        json!("foir")
    );
}

#[test]
fn factor_order_puts_ratios_before_behavioral_signals() {
    let mut factors = vec![
        RiskFactor::PaymentHistory,
        RiskFactor::CreditScore,
        RiskFactor::Employment,
        RiskFactor::Ltv,
        RiskFactor::Dti,
    ];
    factors.sort();

    assert_eq!(
        factors,
        [
            RiskFactor::Dti,
            RiskFactor::Ltv,
            RiskFactor::CreditScore,
            RiskFactor::Employment,
            RiskFactor::PaymentHistory,
        ]
    );
}

#[test]
fn component_order_puts_heaviest_weights_first() {
    let mut components = vec![
        ScoreComponent::Foir,
        ScoreComponent::Dti,
        ScoreComponent::CreditUtilization,
        ScoreComponent::CreditScore,
        ScoreComponent::EmploymentStability,
        ScoreComponent::Ltv,
        ScoreComponent::PaymentHistory,
    ];
    components.sort();

    assert_eq!(
        components,
        [
            ScoreComponent::CreditScore,
            ScoreComponent::PaymentHistory,
            ScoreComponent::Dti,
            ScoreComponent::Ltv,
            ScoreComponent::EmploymentStability,
            ScoreComponent::CreditUtilization,
            ScoreComponent::Foir,
        ]
    );
}

#[test]
fn employment_types_parse_from_snake_case() {
    let parsed: EmploymentType = serde_json::from_value(json!("business_owner")).unwrap();
    assert_eq!(parsed, EmploymentType::BusinessOwner);

    let parsed: EmploymentType = serde_json::from_value(json!("self_employed")).unwrap();
    assert_eq!(parsed, EmploymentType::SelfEmployed);
}

#[test]
fn unrecognized_employment_type_falls_back_to_other() {
    let parsed: EmploymentType = serde_json::from_value(json!("gig_worker")).unwrap();
    assert_eq!(parsed, EmploymentType::Other);
}

#[test]
fn rejection_messages_name_the_offending_field() {
    assert_eq!(
        InvalidInput::NonPositiveMonthlyIncome.to_string(),
        "Monthly income must be greater than zero"
    );
    assert_eq!(
        InvalidInput::ZeroTenure.to_string(),
        "Tenure must be at least 1 month"
    );
    assert_eq!(
        InvalidInput::CreditScoreOutOfRange.to_string(),
        "Credit score should be between 300 and 900"
    );
    assert_eq!(
        InvalidInput::LiquidationDiscountOutOfRange.to_string(),
        "Liquidation discount must be between 0 and 1"
    );
}
