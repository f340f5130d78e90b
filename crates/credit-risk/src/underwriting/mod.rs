//! Credit risk underwriting: deterministic calculators, point-based risk
//! classification, weighted composite scoring, and the tool and HTTP
//! surfaces that expose them.
//!
//! Everything here is pure and stateless. Thresholds and weights are fixed
//! policy, so two calls with the same inputs always produce the same
//! records, which keeps the surfaces trivially safe to serve concurrently.

pub mod classify;
pub mod domain;
pub mod metrics;
pub mod report;
pub mod router;
pub mod score;
pub mod tools;

#[cfg(test)]
mod tests;

pub use classify::{FactorAssessment, RiskClassification, MAX_RISK_POINTS};
pub use domain::{
    CreditRating, EmploymentType, FactorStatus, InvalidInput, OverallRiskBand, RiskBand,
    RiskFactor, RiskGrade, ScoreComponent,
};
pub use metrics::{
    CollateralCoverage, CreditScoreAssessment, DebtServiceCoverage, EmploymentFactors,
    EmploymentProfile, EmploymentStability, FoirAssessment, LoanInstallment, PaymentHistory,
    PaymentRecords, RatioAssessment, DEFAULT_LIQUIDATION_DISCOUNT,
};
pub use report::{
    assess_profile, ApplicantProfile, BusinessIncome, CollateralPledge, FixedObligations,
    LoanTerms, MetricsBreakdown, RevolvingCredit, UnderwritingReport,
};
pub use router::underwriting_router;
pub use score::{ComponentScore, CompositeRiskScore, DEFAULT_FOIR_PCT, DEFAULT_UTILIZATION_PCT};
pub use tools::{
    catalog, dispatch, invoke, ToolCallError, ToolDescriptor, ToolName, ToolParameter,
};
