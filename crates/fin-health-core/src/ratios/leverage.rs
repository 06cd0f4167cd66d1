//! Leverage and solvency ratios.
//!
//! Total debt is short-term plus long-term debt; operating liabilities such
//! as payables are excluded.

use serde::{Deserialize, Serialize};

use crate::arithmetic::divide_or_undefined;
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeverageMetrics {
    pub debt_to_equity: MetricValue,
    pub debt_to_assets: MetricValue,
    pub equity_ratio: MetricValue,
    pub interest_coverage: MetricValue,
    pub debt_service_coverage: MetricValue,
}

pub fn debt_to_equity(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.total_debt()?, p.total_equity)
}

pub fn debt_to_assets(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.total_debt()?, p.total_assets)
}

pub fn equity_ratio(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.total_equity, p.total_assets)
}

/// EBIT / interest expense.
pub fn interest_coverage(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.ebit, p.interest_expense)
}

/// Operating cash flow / total debt.
pub fn debt_service_coverage(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.operating_cash_flow, p.total_debt()?)
}

pub fn calculate_leverage_metrics(p: &FinancialPeriod) -> LeverageMetrics {
    LeverageMetrics {
        debt_to_equity: debt_to_equity(p),
        debt_to_assets: debt_to_assets(p),
        equity_ratio: equity_ratio(p),
        interest_coverage: interest_coverage(p),
        debt_service_coverage: debt_service_coverage(p),
    }
}
