use serde::{Deserialize, Serialize};

use super::round2;
use crate::underwriting::domain::{InvalidInput, RiskBand};

/// Neutral midpoint used when an applicant has accounts but no recorded
/// payments to judge them by.
const NEUTRAL_SCORE: f64 = 50.0;
const NEUTRAL_NOTE: &str = "no payment history available; treated as neutral";

/// Raw repayment counts pulled from the bureau file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecords {
    pub total_accounts: u32,
    pub on_time_payments: u32,
    #[serde(default)]
    pub late_payments_30_days: u32,
    #[serde(default)]
    pub late_payments_60_days: u32,
    #[serde(default)]
    pub late_payments_90_plus_days: u32,
    #[serde(default)]
    pub defaults: u32,
}

/// Outcome of scoring repayment behavior. A thin file is not a defect, so an
/// empty record set maps to a neutral outcome instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PaymentHistory {
    Scored {
        score: f64,
        on_time_rate: f64,
        total_payment_records: u64,
        penalty_points: u64,
        risk_category: RiskBand,
    },
    NoRecords {
        score: f64,
        risk_category: RiskBand,
        note: &'static str,
    },
}

impl PaymentHistory {
    /// The neutral stand-in for applicants with no repayment records.
    pub fn neutral() -> Self {
        PaymentHistory::NoRecords {
            score: NEUTRAL_SCORE,
            risk_category: RiskBand::Medium,
            note: NEUTRAL_NOTE,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            PaymentHistory::Scored { score, .. } | PaymentHistory::NoRecords { score, .. } => {
                *score
            }
        }
    }

    pub fn risk_category(&self) -> RiskBand {
        match self {
            PaymentHistory::Scored { risk_category, .. }
            | PaymentHistory::NoRecords { risk_category, .. } => *risk_category,
        }
    }
}

/// Scores repayment behavior: the on-time rate seeds the score and late
/// marks deduct from it by severity. Defaults count toward the penalty but
/// not toward the record total. Totals are summed in `u64` so bureau files
/// with counts near `u32::MAX` stay in range.
pub fn history_score(records: &PaymentRecords) -> Result<PaymentHistory, InvalidInput> {
    if records.total_accounts == 0 {
        return Err(InvalidInput::NoAccounts);
    }

    let total_payment_records = u64::from(records.on_time_payments)
        + u64::from(records.late_payments_30_days)
        + u64::from(records.late_payments_60_days)
        + u64::from(records.late_payments_90_plus_days);

    if total_payment_records == 0 {
        return Ok(PaymentHistory::neutral());
    }

    let on_time_rate =
        f64::from(records.on_time_payments) / total_payment_records as f64 * 100.0;

    let penalty_points = u64::from(records.late_payments_30_days) * 2
        + u64::from(records.late_payments_60_days) * 5
        + u64::from(records.late_payments_90_plus_days) * 10
        + u64::from(records.defaults) * 25;

    let score = (on_time_rate - penalty_points as f64).clamp(0.0, 100.0);

    let risk_category = if score >= 80.0 {
        RiskBand::Low
    } else if score >= 50.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    Ok(PaymentHistory::Scored {
        score: round2(score),
        on_time_rate: round2(on_time_rate),
        total_payment_records,
        penalty_points,
        risk_category,
    })
}
