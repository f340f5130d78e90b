use serde::Serialize;

use super::{round2, round4};
use crate::underwriting::domain::{InvalidInput, RiskBand};

/// Banded outcome shared by the DTI, LTV, and utilization calculators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioAssessment {
    pub ratio: f64,
    pub percentage: f64,
    pub risk_category: RiskBand,
}

/// FOIR outcome. Carries the obligation total and what is left of the income
/// after fixed commitments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoirAssessment {
    pub ratio: f64,
    pub percentage: f64,
    pub total_obligations: f64,
    pub remaining_income: f64,
    pub risk_category: RiskBand,
}

/// Debt-to-income ratio: monthly debt load relative to gross monthly income.
pub fn debt_to_income(
    monthly_income: f64,
    total_monthly_debt: f64,
) -> Result<RatioAssessment, InvalidInput> {
    if monthly_income <= 0.0 {
        return Err(InvalidInput::NonPositiveMonthlyIncome);
    }
    if total_monthly_debt < 0.0 {
        return Err(InvalidInput::NegativeMonthlyDebt);
    }

    let ratio = total_monthly_debt / monthly_income;
    let percentage = ratio * 100.0;

    let risk_category = if percentage < 35.0 {
        RiskBand::Low
    } else if percentage <= 50.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    Ok(RatioAssessment {
        ratio: round4(ratio),
        percentage: round2(percentage),
        risk_category,
    })
}

/// Loan-to-value ratio: requested principal against the appraised value of
/// the property securing it.
pub fn loan_to_value(
    loan_amount: f64,
    property_value: f64,
) -> Result<RatioAssessment, InvalidInput> {
    if property_value <= 0.0 {
        return Err(InvalidInput::NonPositivePropertyValue);
    }
    if loan_amount < 0.0 {
        return Err(InvalidInput::NegativeLoanAmount);
    }

    let ratio = loan_amount / property_value;
    let percentage = ratio * 100.0;

    let risk_category = if percentage < 80.0 {
        RiskBand::Low
    } else if percentage <= 90.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    Ok(RatioAssessment {
        ratio: round4(ratio),
        percentage: round2(percentage),
        risk_category,
    })
}

/// Revolving credit utilization: outstanding balance against approved limit.
pub fn credit_utilization(
    credit_used: f64,
    credit_limit: f64,
) -> Result<RatioAssessment, InvalidInput> {
    if credit_limit <= 0.0 {
        return Err(InvalidInput::NonPositiveCreditLimit);
    }
    if credit_used < 0.0 {
        return Err(InvalidInput::NegativeCreditUsed);
    }

    let ratio = credit_used / credit_limit;
    let percentage = ratio * 100.0;

    let risk_category = if percentage < 30.0 {
        RiskBand::Low
    } else if percentage <= 50.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    Ok(RatioAssessment {
        ratio: round4(ratio),
        percentage: round2(percentage),
        risk_category,
    })
}

/// Fixed-obligation-to-income ratio. Existing EMIs, the proposed EMI, and any
/// other fixed commitments are summed before validation, so offsetting
/// entries are allowed as long as the total stays non-negative.
pub fn fixed_obligation_ratio(
    monthly_income: f64,
    existing_emis: f64,
    proposed_emi: f64,
    other_obligations: f64,
) -> Result<FoirAssessment, InvalidInput> {
    if monthly_income <= 0.0 {
        return Err(InvalidInput::NonPositiveMonthlyIncome);
    }

    let total_obligations = existing_emis + proposed_emi + other_obligations;
    if total_obligations < 0.0 {
        return Err(InvalidInput::NegativeObligations);
    }

    let ratio = total_obligations / monthly_income;
    let percentage = ratio * 100.0;
    let remaining_income = monthly_income - total_obligations;

    let risk_category = if percentage < 40.0 {
        RiskBand::Low
    } else if percentage <= 55.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    Ok(FoirAssessment {
        ratio: round4(ratio),
        percentage: round2(percentage),
        total_obligations: round2(total_obligations),
        remaining_income: round2(remaining_income),
        risk_category,
    })
}
