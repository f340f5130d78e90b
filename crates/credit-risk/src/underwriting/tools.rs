//! Named dispatch over the calculators. Callers address tools by their
//! stable snake_case names and pass loosely typed JSON parameters; results
//! come back as the calculator's record serialized to JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::underwriting::classify;
use crate::underwriting::domain::InvalidInput;
use crate::underwriting::metrics::coverage::DEFAULT_LIQUIDATION_DISCOUNT;
use crate::underwriting::metrics::{
    amortization, coverage, credit, employment, payments, ratios, EmploymentProfile,
    PaymentRecords,
};
use crate::underwriting::score::{self, DEFAULT_FOIR_PCT, DEFAULT_UTILIZATION_PCT};

/// The stable wire names of the underwriting tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ComputeDebtToIncomeRatio,
    ComputeLoanToValueRatio,
    ComputeCreditUtilizationRatio,
    ComputeFoir,
    ComputeEmi,
    ComputeDscr,
    AssessEmploymentStability,
    ComputePaymentHistoryScore,
    AssessCreditScore,
    ComputeCollateralCoverageRatio,
    ClassifyRiskCategory,
    ComputeTotalRiskScore,
}

impl ToolName {
    pub const ALL: [ToolName; 12] = [
        ToolName::ComputeDebtToIncomeRatio,
        ToolName::ComputeLoanToValueRatio,
        ToolName::ComputeCreditUtilizationRatio,
        ToolName::ComputeFoir,
        ToolName::ComputeEmi,
        ToolName::ComputeDscr,
        ToolName::AssessEmploymentStability,
        ToolName::ComputePaymentHistoryScore,
        ToolName::AssessCreditScore,
        ToolName::ComputeCollateralCoverageRatio,
        ToolName::ClassifyRiskCategory,
        ToolName::ComputeTotalRiskScore,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ToolName::ComputeDebtToIncomeRatio => "compute_debt_to_income_ratio",
            ToolName::ComputeLoanToValueRatio => "compute_loan_to_value_ratio",
            ToolName::ComputeCreditUtilizationRatio => "compute_credit_utilization_ratio",
            ToolName::ComputeFoir => "compute_foir",
            ToolName::ComputeEmi => "compute_emi",
            ToolName::ComputeDscr => "compute_dscr",
            ToolName::AssessEmploymentStability => "assess_employment_stability",
            ToolName::ComputePaymentHistoryScore => "compute_payment_history_score",
            ToolName::AssessCreditScore => "assess_credit_score",
            ToolName::ComputeCollateralCoverageRatio => "compute_collateral_coverage_ratio",
            ToolName::ClassifyRiskCategory => "classify_risk_category",
            ToolName::ComputeTotalRiskScore => "compute_total_risk_score",
        }
    }

    /// Resolves a wire name back to its tool.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tool| tool.as_str() == raw)
    }

    /// The parameter lists live in `const` blocks so each descriptor borrows
    /// promoted `'static` slices rather than per-call temporaries.
    pub fn descriptor(&self) -> ToolDescriptor {
        match self {
            ToolName::ComputeDebtToIncomeRatio => ToolDescriptor {
                name: self.as_str(),
                description: "Debt-to-income ratio with risk banding",
                parameters: const {
                    &[
                        ToolParameter::required("monthly_income"),
                        ToolParameter::required("total_monthly_debt"),
                    ]
                },
            },
            ToolName::ComputeLoanToValueRatio => ToolDescriptor {
                name: self.as_str(),
                description: "Loan-to-value ratio for secured lending",
                parameters: const {
                    &[
                        ToolParameter::required("loan_amount"),
                        ToolParameter::required("property_value"),
                    ]
                },
            },
            ToolName::ComputeCreditUtilizationRatio => ToolDescriptor {
                name: self.as_str(),
                description: "Revolving credit utilization with risk banding",
                parameters: const {
                    &[
                        ToolParameter::required("credit_used"),
                        ToolParameter::required("credit_limit"),
                    ]
                },
            },
            ToolName::ComputeFoir => ToolDescriptor {
                name: self.as_str(),
                description: "Fixed-obligation-to-income ratio and residual income",
                parameters: const {
                    &[
                        ToolParameter::required("monthly_income"),
                        ToolParameter::required("existing_emis"),
                        ToolParameter::required("proposed_emi"),
                        ToolParameter::optional("other_obligations"),
                    ]
                },
            },
            ToolName::ComputeEmi => ToolDescriptor {
                name: self.as_str(),
                description: "Equated monthly installment and total interest for a loan",
                parameters: const {
                    &[
                        ToolParameter::required("principal"),
                        ToolParameter::required("annual_interest_rate"),
                        ToolParameter::required("tenure_months"),
                    ]
                },
            },
            ToolName::ComputeDscr => ToolDescriptor {
                name: self.as_str(),
                description: "Debt service coverage ratio for business lending",
                parameters: const {
                    &[
                        ToolParameter::required("net_operating_income"),
                        ToolParameter::required("total_debt_service"),
                    ]
                },
            },
            ToolName::AssessEmploymentStability => ToolDescriptor {
                name: self.as_str(),
                description: "Employment stability score from tenure, experience, and churn",
                parameters: const {
                    &[
                        ToolParameter::required("employment_type"),
                        ToolParameter::required("years_in_current_job"),
                        ToolParameter::required("total_work_experience"),
                        ToolParameter::optional("job_changes_last_5_years"),
                    ]
                },
            },
            ToolName::ComputePaymentHistoryScore => ToolDescriptor {
                name: self.as_str(),
                description: "Payment history score from bureau repayment records",
                parameters: const {
                    &[
                        ToolParameter::required("total_accounts"),
                        ToolParameter::required("on_time_payments"),
                        ToolParameter::optional("late_payments_30_days"),
                        ToolParameter::optional("late_payments_60_days"),
                        ToolParameter::optional("late_payments_90_plus_days"),
                        ToolParameter::optional("defaults"),
                    ]
                },
            },
            ToolName::AssessCreditScore => ToolDescriptor {
                name: self.as_str(),
                description: "Rating tier and guidance for a bureau credit score",
                parameters: const { &[ToolParameter::required("credit_score")] },
            },
            ToolName::ComputeCollateralCoverageRatio => ToolDescriptor {
                name: self.as_str(),
                description: "Collateral coverage after the liquidation haircut",
                parameters: const {
                    &[
                        ToolParameter::required("collateral_value"),
                        ToolParameter::required("loan_amount"),
                        ToolParameter::optional("liquidation_discount"),
                    ]
                },
            },
            ToolName::ClassifyRiskCategory => ToolDescriptor {
                name: self.as_str(),
                description: "Point-based overall risk classification across five factors",
                parameters: const {
                    &[
                        ToolParameter::required("dti_percentage"),
                        ToolParameter::required("ltv_percentage"),
                        ToolParameter::required("credit_score"),
                        ToolParameter::required("employment_stability_score"),
                        ToolParameter::required("payment_history_score"),
                    ]
                },
            },
            ToolName::ComputeTotalRiskScore => ToolDescriptor {
                name: self.as_str(),
                description: "Weighted composite risk score with letter grade",
                parameters: const {
                    &[
                        ToolParameter::required("dti_percentage"),
                        ToolParameter::required("ltv_percentage"),
                        ToolParameter::required("credit_score"),
                        ToolParameter::required("employment_stability_score"),
                        ToolParameter::required("payment_history_score"),
                        ToolParameter::optional("credit_utilization_percentage"),
                        ToolParameter::optional("foir_percentage"),
                    ]
                },
            },
        }
    }
}

/// Catalog entry describing one tool for discovery clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ToolParameter],
}

/// A named parameter and whether the caller must supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolParameter {
    pub name: &'static str,
    pub required: bool,
}

impl ToolParameter {
    const fn required(name: &'static str) -> Self {
        ToolParameter {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        ToolParameter {
            name,
            required: false,
        }
    }
}

/// The full tool catalog in registration order.
pub fn catalog() -> Vec<ToolDescriptor> {
    ToolName::ALL.iter().map(ToolName::descriptor).collect()
}

/// Why a tool invocation failed before or during calculation.
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
    #[error("invalid parameters for {tool}: {source}")]
    InvalidParams {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Input(#[from] InvalidInput),
}

#[derive(Debug, Deserialize)]
struct DebtToIncomeParams {
    monthly_income: f64,
    total_monthly_debt: f64,
}

#[derive(Debug, Deserialize)]
struct LoanToValueParams {
    loan_amount: f64,
    property_value: f64,
}

#[derive(Debug, Deserialize)]
struct UtilizationParams {
    credit_used: f64,
    credit_limit: f64,
}

#[derive(Debug, Deserialize)]
struct FoirParams {
    monthly_income: f64,
    existing_emis: f64,
    proposed_emi: f64,
    #[serde(default)]
    other_obligations: f64,
}

#[derive(Debug, Deserialize)]
struct EmiParams {
    principal: f64,
    annual_interest_rate: f64,
    tenure_months: u32,
}

#[derive(Debug, Deserialize)]
struct DscrParams {
    net_operating_income: f64,
    total_debt_service: f64,
}

#[derive(Debug, Deserialize)]
struct CreditScoreParams {
    credit_score: i64,
}

#[derive(Debug, Deserialize)]
struct CollateralParams {
    collateral_value: f64,
    loan_amount: f64,
    #[serde(default = "default_liquidation_discount")]
    liquidation_discount: f64,
}

#[derive(Debug, Deserialize)]
struct ClassifyParams {
    dti_percentage: f64,
    ltv_percentage: f64,
    credit_score: i64,
    employment_stability_score: f64,
    payment_history_score: f64,
}

#[derive(Debug, Deserialize)]
struct CompositeParams {
    dti_percentage: f64,
    ltv_percentage: f64,
    credit_score: i64,
    employment_stability_score: f64,
    payment_history_score: f64,
    #[serde(default = "default_utilization")]
    credit_utilization_percentage: f64,
    #[serde(default = "default_foir")]
    foir_percentage: f64,
}

fn default_liquidation_discount() -> f64 {
    DEFAULT_LIQUIDATION_DISCOUNT
}

fn default_utilization() -> f64 {
    DEFAULT_UTILIZATION_PCT
}

fn default_foir() -> f64 {
    DEFAULT_FOIR_PCT
}

/// Runs the tool addressed by `name` against JSON parameters.
pub fn invoke(name: &str, params: Value) -> Result<Value, ToolCallError> {
    let tool =
        ToolName::parse(name).ok_or_else(|| ToolCallError::UnknownTool(name.to_string()))?;
    dispatch(tool, params)
}

/// Runs an already-resolved tool against JSON parameters.
pub fn dispatch(tool: ToolName, params: Value) -> Result<Value, ToolCallError> {
    match tool {
        ToolName::ComputeDebtToIncomeRatio => {
            let params: DebtToIncomeParams = parse_params(tool, params)?;
            let record = ratios::debt_to_income(params.monthly_income, params.total_monthly_debt)?;
            Ok(to_wire(&record))
        }
        ToolName::ComputeLoanToValueRatio => {
            let params: LoanToValueParams = parse_params(tool, params)?;
            let record = ratios::loan_to_value(params.loan_amount, params.property_value)?;
            Ok(to_wire(&record))
        }
        ToolName::ComputeCreditUtilizationRatio => {
            let params: UtilizationParams = parse_params(tool, params)?;
            let record = ratios::credit_utilization(params.credit_used, params.credit_limit)?;
            Ok(to_wire(&record))
        }
        ToolName::ComputeFoir => {
            let params: FoirParams = parse_params(tool, params)?;
            let record = ratios::fixed_obligation_ratio(
                params.monthly_income,
                params.existing_emis,
                params.proposed_emi,
                params.other_obligations,
            )?;
            Ok(to_wire(&record))
        }
        ToolName::ComputeEmi => {
            let params: EmiParams = parse_params(tool, params)?;
            let record = amortization::monthly_installment(
                params.principal,
                params.annual_interest_rate,
                params.tenure_months,
            )?;
            Ok(to_wire(&record))
        }
        ToolName::ComputeDscr => {
            let params: DscrParams = parse_params(tool, params)?;
            let record =
                coverage::debt_service(params.net_operating_income, params.total_debt_service)?;
            Ok(to_wire(&record))
        }
        ToolName::AssessEmploymentStability => {
            let params: EmploymentProfile = parse_params(tool, params)?;
            Ok(to_wire(&employment::stability(&params)))
        }
        ToolName::ComputePaymentHistoryScore => {
            let params: PaymentRecords = parse_params(tool, params)?;
            let record = payments::history_score(&params)?;
            Ok(to_wire(&record))
        }
        ToolName::AssessCreditScore => {
            let params: CreditScoreParams = parse_params(tool, params)?;
            let record = credit::rate_score(params.credit_score)?;
            Ok(to_wire(&record))
        }
        ToolName::ComputeCollateralCoverageRatio => {
            let params: CollateralParams = parse_params(tool, params)?;
            let record = coverage::collateral(
                params.collateral_value,
                params.loan_amount,
                params.liquidation_discount,
            )?;
            Ok(to_wire(&record))
        }
        ToolName::ClassifyRiskCategory => {
            let params: ClassifyParams = parse_params(tool, params)?;
            Ok(to_wire(&classify::risk_category(
                params.dti_percentage,
                params.ltv_percentage,
                params.credit_score,
                params.employment_stability_score,
                params.payment_history_score,
            )))
        }
        ToolName::ComputeTotalRiskScore => {
            let params: CompositeParams = parse_params(tool, params)?;
            Ok(to_wire(&score::composite(
                params.dti_percentage,
                params.ltv_percentage,
                params.credit_score,
                params.employment_stability_score,
                params.payment_history_score,
                params.credit_utilization_percentage,
                params.foir_percentage,
            )))
        }
    }
}

fn parse_params<T: DeserializeOwned>(tool: ToolName, params: Value) -> Result<T, ToolCallError> {
    serde_json::from_value(params).map_err(|source| ToolCallError::InvalidParams {
        tool: tool.as_str(),
        source,
    })
}

fn to_wire<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).expect("tool records serialize to plain JSON")
}
