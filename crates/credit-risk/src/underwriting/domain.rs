//! Shared vocabulary for the underwriting calculators: risk bands, ratings,
//! factor keys, and the input-validation error they all report.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Risk band attached to a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Medium => "MEDIUM",
            RiskBand::High => "HIGH",
        }
    }
}

/// Overall applicant band produced by the point-based classifier. Unlike the
/// per-metric bands this one can escalate to `VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallRiskBand {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl OverallRiskBand {
    pub const fn label(&self) -> &'static str {
        match self {
            OverallRiskBand::Low => "LOW",
            OverallRiskBand::Medium => "MEDIUM",
            OverallRiskBand::High => "HIGH",
            OverallRiskBand::VeryHigh => "VERY_HIGH",
        }
    }
}

/// Bureau-score rating tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditRating {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl CreditRating {
    pub const fn label(&self) -> &'static str {
        match self {
            CreditRating::Excellent => "EXCELLENT",
            CreditRating::Good => "GOOD",
            CreditRating::Fair => "FAIR",
            CreditRating::Poor => "POOR",
            CreditRating::VeryPoor => "VERY_POOR",
        }
    }
}

/// Letter grade assigned by the weighted composite scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskGrade {
    A,
    B,
    C,
    D,
    E,
}

impl RiskGrade {
    pub const fn label(&self) -> &'static str {
        match self {
            RiskGrade::A => "A",
            RiskGrade::B => "B",
            RiskGrade::C => "C",
            RiskGrade::D => "D",
            RiskGrade::E => "E",
        }
    }
}

/// Qualitative status the classifier assigns to one contributing factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorStatus {
    Excellent,
    Good,
    Stable,
    Moderate,
    Poor,
    Unstable,
}

/// Key identifying a factor in the classifier breakdown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Dti,
    Ltv,
    CreditScore,
    Employment,
    PaymentHistory,
}

/// Key identifying a component in the weighted composite score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComponent {
    CreditScore,
    PaymentHistory,
    Dti,
    Ltv,
    EmploymentStability,
    CreditUtilization,
    Foir,
}

/// Employment arrangement declared by the applicant. Values outside the known
/// set still score (at a weak default) rather than failing intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Salaried,
    BusinessOwner,
    SelfEmployed,
    Freelancer,
    Unemployed,
    #[serde(other)]
    Other,
}

/// Why a calculator rejected its inputs. The display text is the wire-level
/// `error` message, so wording stays stable across the tool and HTTP surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Monthly income must be greater than zero")]
    NonPositiveMonthlyIncome,
    #[error("Total monthly debt cannot be negative")]
    NegativeMonthlyDebt,
    #[error("Property value must be greater than zero")]
    NonPositivePropertyValue,
    #[error("Loan amount cannot be negative")]
    NegativeLoanAmount,
    #[error("Credit limit must be greater than zero")]
    NonPositiveCreditLimit,
    #[error("Credit used cannot be negative")]
    NegativeCreditUsed,
    #[error("Total obligations cannot be negative")]
    NegativeObligations,
    #[error("Principal must be greater than zero")]
    NonPositivePrincipal,
    #[error("Interest rate cannot be negative")]
    NegativeInterestRate,
    #[error("Tenure must be at least 1 month")]
    ZeroTenure,
    #[error("Total debt service must be greater than zero")]
    NonPositiveDebtService,
    #[error("Total accounts must be at least 1")]
    NoAccounts,
    #[error("Credit score should be between 300 and 900")]
    CreditScoreOutOfRange,
    #[error("Loan amount must be greater than zero")]
    NonPositiveLoanAmount,
    #[error("Collateral value cannot be negative")]
    NegativeCollateralValue,
    #[error("Liquidation discount must be between 0 and 1")]
    LiquidationDiscountOutOfRange,
}
