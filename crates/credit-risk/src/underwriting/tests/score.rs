use crate::underwriting::domain::{RiskGrade, ScoreComponent};
use crate::underwriting::score::{composite, DEFAULT_FOIR_PCT, DEFAULT_UTILIZATION_PCT};

#[test]
fn component_weights_sum_to_one() {
    let result = composite(30.0, 70.0, 720, 80.0, 85.0, 25.0, 40.0);

    let total_weight: f64 = result
        .component_scores
        .values()
        .map(|component| component.weight)
        .sum();

    assert!((total_weight - 1.0).abs() < f64::EPSILON);
}

#[test]
fn breakdown_covers_all_seven_components_in_weight_order() {
    let result = composite(30.0, 70.0, 720, 80.0, 85.0, 25.0, 40.0);

    let keys: Vec<ScoreComponent> = result.component_scores.keys().copied().collect();
    assert_eq!(
        keys,
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
fn strong_file_grades_b() {
    let result = composite(20.0, 60.0, 780, 95.0, 92.67, 12.5, 33.33);

    assert_eq!(result.total_score, 76.39);
    assert_eq!(result.grade, RiskGrade::B);
    assert_eq!(
        result.underwriting_recommendation,
        "APPROVE - Good risk profile. Standard terms apply."
    );

    let score_of = |component: ScoreComponent| result.component_scores[&component].score;
    assert_eq!(score_of(ScoreComponent::CreditScore), 80.0);
    assert_eq!(score_of(ScoreComponent::PaymentHistory), 92.67);
    assert_eq!(score_of(ScoreComponent::Dti), 70.0);
    assert_eq!(score_of(ScoreComponent::Ltv), 46.0);
    assert_eq!(score_of(ScoreComponent::EmploymentStability), 95.0);
    assert_eq!(score_of(ScoreComponent::CreditUtilization), 81.25);
    assert_eq!(score_of(ScoreComponent::Foir), 56.67);
}

#[test]
fn flawless_inputs_score_one_hundred() {
    let result = composite(0.0, 0.0, 900, 100.0, 100.0, 0.0, 0.0);

    assert_eq!(result.total_score, 100.0);
    assert_eq!(result.grade, RiskGrade::A);
    assert_eq!(
        result.underwriting_recommendation,
        "APPROVE - Excellent risk profile. Offer best available rates."
    );
}

#[test]
fn moderate_file_grades_c() {
    let result = composite(25.0, 83.33, 710, 95.0, 50.0, 25.0, 40.0);

    assert_eq!(result.total_score, 58.36);
    assert_eq!(result.grade, RiskGrade::C);
    assert_eq!(
        result.underwriting_recommendation,
        "CONDITIONAL APPROVE - Moderate risk. Consider risk-based pricing."
    );
}

#[test]
fn high_risk_file_grades_d() {
    let result = composite(40.0, 70.0, 600, 50.0, 60.0, 30.0, 44.0);

    assert_eq!(result.total_score, 48.69);
    assert_eq!(result.grade, RiskGrade::D);
    assert_eq!(
        result.underwriting_recommendation,
        "REVIEW - High risk. Requires senior approval and mitigation."
    );
}

#[test]
fn overleveraged_file_grades_e_with_floored_components() {
    let result = composite(70.0, 100.0, 400, 20.0, 30.0, 80.0, 70.0);

    assert_eq!(result.total_score, 14.12);
    assert_eq!(result.grade, RiskGrade::E);
    assert_eq!(
        result.underwriting_recommendation,
        "DECLINE - Very high risk. Does not meet underwriting criteria."
    );

    assert_eq!(result.component_scores[&ScoreComponent::Dti].score, 0.0);
    assert_eq!(
        result.component_scores[&ScoreComponent::CreditUtilization].score,
        0.0
    );
}

#[test]
fn fallback_percentages_are_the_documented_midpoints() {
    assert_eq!(DEFAULT_UTILIZATION_PCT, 25.0);
    assert_eq!(DEFAULT_FOIR_PCT, 40.0);
}

#[test]
fn higher_bureau_score_never_lowers_the_total() {
    let weak = composite(30.0, 70.0, 400, 80.0, 85.0, 25.0, 40.0);
    let fair = composite(30.0, 70.0, 700, 80.0, 85.0, 25.0, 40.0);
    let strong = composite(30.0, 70.0, 900, 80.0, 85.0, 25.0, 40.0);

    assert!(weak.total_score <= fair.total_score);
    assert!(fair.total_score <= strong.total_score);
}

#[test]
fn better_behavioral_scores_never_lower_the_total() {
    let steps = [0.0, 25.0, 50.0, 75.0, 100.0];

    for window in steps.windows(2) {
        let lower = composite(30.0, 70.0, 720, window[0], 85.0, 25.0, 40.0);
        let higher = composite(30.0, 70.0, 720, window[1], 85.0, 25.0, 40.0);
        assert!(
            lower.total_score <= higher.total_score,
            "employment {} -> {}",
            window[0],
            window[1]
        );

        let lower = composite(30.0, 70.0, 720, 80.0, window[0], 25.0, 40.0);
        let higher = composite(30.0, 70.0, 720, 80.0, window[1], 25.0, 40.0);
        assert!(
            lower.total_score <= higher.total_score,
            "payment history {} -> {}",
            window[0],
            window[1]
        );
    }
}

#[test]
fn worsening_percentages_never_raise_the_total() {
    // Steps past each penalty's zero floor so the flat region is covered too.
    let steps = [0.0, 20.0, 40.0, 60.0, 80.0, 120.0];

    for window in steps.windows(2) {
        let better = composite(window[0], 70.0, 720, 80.0, 85.0, 25.0, 40.0);
        let worse = composite(window[1], 70.0, 720, 80.0, 85.0, 25.0, 40.0);
        assert!(
            worse.total_score <= better.total_score,
            "dti {} -> {}",
            window[0],
            window[1]
        );

        let better = composite(30.0, window[0], 720, 80.0, 85.0, 25.0, 40.0);
        let worse = composite(30.0, window[1], 720, 80.0, 85.0, 25.0, 40.0);
        assert!(
            worse.total_score <= better.total_score,
            "ltv {} -> {}",
            window[0],
            window[1]
        );

        let better = composite(30.0, 70.0, 720, 80.0, 85.0, window[0], 40.0);
        let worse = composite(30.0, 70.0, 720, 80.0, 85.0, window[1], 40.0);
        assert!(
            worse.total_score <= better.total_score,
            "utilization {} -> {}",
            window[0],
            window[1]
        );

        let better = composite(30.0, 70.0, 720, 80.0, 85.0, 25.0, window[0]);
        let worse = composite(30.0, 70.0, 720, 80.0, 85.0, 25.0, window[1]);
        assert!(
            worse.total_score <= better.total_score,
            "foir {} -> {}",
            window[0],
            window[1]
        );
    }
}
