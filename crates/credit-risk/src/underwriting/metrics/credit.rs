use serde::Serialize;

use crate::underwriting::domain::{CreditRating, InvalidInput, RiskBand};

/// Interpretation of a bureau score on the 300-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditScoreAssessment {
    pub score: i64,
    pub rating: CreditRating,
    pub risk_category: RiskBand,
    pub recommendation: &'static str,
}

/// Rating rows walked top-down; the first row whose floor the score meets
/// wins. The bottom floor equals the minimum valid score, so every score
/// that passes validation lands on a row.
const RATING_BANDS: [(i64, CreditRating, RiskBand, &str); 5] = [
    (
        750,
        CreditRating::Excellent,
        RiskBand::Low,
        "Eligible for best rates and terms. High approval probability.",
    ),
    (
        700,
        CreditRating::Good,
        RiskBand::Low,
        "Favorable terms available. Standard processing.",
    ),
    (
        650,
        CreditRating::Fair,
        RiskBand::Medium,
        "May qualify with higher interest rates. Additional documentation may help.",
    ),
    (
        550,
        CreditRating::Poor,
        RiskBand::High,
        "Limited options. Consider secured loans or co-applicant.",
    ),
    (
        300,
        CreditRating::VeryPoor,
        RiskBand::High,
        "High rejection probability. Recommend credit repair before applying.",
    ),
];

/// Maps a bureau score to a rating tier with a processing recommendation.
pub fn rate_score(credit_score: i64) -> Result<CreditScoreAssessment, InvalidInput> {
    if !(300..=900).contains(&credit_score) {
        return Err(InvalidInput::CreditScoreOutOfRange);
    }

    let (_, rating, risk_category, recommendation) = RATING_BANDS
        .iter()
        .copied()
        .find(|(floor, _, _, _)| credit_score >= *floor)
        .unwrap_or(RATING_BANDS[RATING_BANDS.len() - 1]);

    Ok(CreditScoreAssessment {
        score: credit_score,
        rating,
        risk_category,
        recommendation,
    })
}
