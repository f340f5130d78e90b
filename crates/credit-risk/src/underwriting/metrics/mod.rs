//! The individual underwriting calculators. Every function here is a pure
//! total function over its validated domain: same inputs, same record.

pub mod amortization;
pub mod coverage;
pub mod credit;
pub mod employment;
pub mod payments;
pub mod ratios;

pub use amortization::LoanInstallment;
pub use coverage::{CollateralCoverage, DebtServiceCoverage, DEFAULT_LIQUIDATION_DISCOUNT};
pub use credit::CreditScoreAssessment;
pub use employment::{EmploymentFactors, EmploymentProfile, EmploymentStability};
pub use payments::{PaymentHistory, PaymentRecords};
pub use ratios::{FoirAssessment, RatioAssessment};

/// Rounds to two decimal places, matching the precision of monetary and
/// percentage fields on the wire.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to four decimal places, used for raw ratio fields.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
