use serde::Serialize;

use super::{round2, round4};
use crate::underwriting::domain::{InvalidInput, RiskBand};

/// Default haircut applied to collateral when no liquidation discount is
/// supplied by the caller.
pub const DEFAULT_LIQUIDATION_DISCOUNT: f64 = 0.2;

/// Debt service coverage: operating income relative to total debt service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebtServiceCoverage {
    pub ratio: f64,
    pub excess_income: f64,
    pub coverage_percentage: f64,
    pub risk_category: RiskBand,
}

/// Collateral cover after the liquidation haircut, with the shortfall against
/// the requested loan when the cover is below par.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollateralCoverage {
    pub coverage_ratio: f64,
    pub coverage_percentage: f64,
    pub net_collateral_value: f64,
    pub shortfall: f64,
    pub risk_category: RiskBand,
}

/// DSCR for business and commercial lending. Negative operating income is a
/// legitimate input and simply lands in the high-risk band.
pub fn debt_service(
    net_operating_income: f64,
    total_debt_service: f64,
) -> Result<DebtServiceCoverage, InvalidInput> {
    if total_debt_service <= 0.0 {
        return Err(InvalidInput::NonPositiveDebtService);
    }

    let ratio = net_operating_income / total_debt_service;
    let excess_income = net_operating_income - total_debt_service;

    let risk_category = if ratio > 1.5 {
        RiskBand::Low
    } else if ratio >= 1.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    Ok(DebtServiceCoverage {
        ratio: round4(ratio),
        excess_income: round2(excess_income),
        coverage_percentage: round2(ratio * 100.0),
        risk_category,
    })
}

/// Collateral coverage ratio. The discount models the loss expected in a
/// forced sale and must sit in `[0, 1)`.
pub fn collateral(
    collateral_value: f64,
    loan_amount: f64,
    liquidation_discount: f64,
) -> Result<CollateralCoverage, InvalidInput> {
    if loan_amount <= 0.0 {
        return Err(InvalidInput::NonPositiveLoanAmount);
    }
    if collateral_value < 0.0 {
        return Err(InvalidInput::NegativeCollateralValue);
    }
    if !(0.0..1.0).contains(&liquidation_discount) {
        return Err(InvalidInput::LiquidationDiscountOutOfRange);
    }

    let net_collateral_value = collateral_value * (1.0 - liquidation_discount);
    let coverage_ratio = net_collateral_value / loan_amount;
    let shortfall = if coverage_ratio < 1.0 {
        loan_amount - net_collateral_value
    } else {
        0.0
    };

    let risk_category = if coverage_ratio > 1.5 {
        RiskBand::Low
    } else if coverage_ratio >= 1.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    Ok(CollateralCoverage {
        coverage_ratio: round4(coverage_ratio),
        coverage_percentage: round2(coverage_ratio * 100.0),
        net_collateral_value: round2(net_collateral_value),
        shortfall: round2(shortfall),
        risk_category,
    })
}
