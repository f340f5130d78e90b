use serde::Serialize;

use super::{round2, round4};
use crate::underwriting::domain::InvalidInput;

/// Repayment schedule summary for a fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanInstallment {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub interest_to_principal_ratio: f64,
    pub monthly_interest_rate: f64,
}

/// Equated monthly installment for a loan of `principal` repaid over
/// `tenure_months` at the given annual rate (a percentage, e.g. `10` for
/// 10%). A zero rate degenerates to straight-line repayment.
pub fn monthly_installment(
    principal: f64,
    annual_interest_rate: f64,
    tenure_months: u32,
) -> Result<LoanInstallment, InvalidInput> {
    if principal <= 0.0 {
        return Err(InvalidInput::NonPositivePrincipal);
    }
    if annual_interest_rate < 0.0 {
        return Err(InvalidInput::NegativeInterestRate);
    }
    if tenure_months == 0 {
        return Err(InvalidInput::ZeroTenure);
    }

    let monthly_rate = (annual_interest_rate / 100.0) / 12.0;
    let months = f64::from(tenure_months);

    let emi = if monthly_rate == 0.0 {
        principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        principal * monthly_rate * growth / (growth - 1.0)
    };

    let total_payment = emi * months;
    let total_interest = total_payment - principal;

    Ok(LoanInstallment {
        emi: round2(emi),
        total_payment: round2(total_payment),
        total_interest: round2(total_interest),
        interest_to_principal_ratio: round4(total_interest / principal),
        monthly_interest_rate: round4(monthly_rate * 100.0),
    })
}
