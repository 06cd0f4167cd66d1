//! Working-capital efficiency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, percent_or_undefined, period_average, DAYS_PER_YEAR};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalMetrics {
    pub working_capital_turnover: MetricValue,
    pub working_capital_to_sales: MetricValue,
    pub defensive_interval_ratio: MetricValue,
    pub net_working_capital_ratio: MetricValue,
}

pub fn working_capital_turnover(p: &FinancialPeriod, avg_working_capital: Decimal) -> MetricValue {
    divide_or_undefined(p.revenue, avg_working_capital)
}

pub fn working_capital_to_sales(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.working_capital()?, p.revenue)
}

/// Days the company could run on cash, short-term investments and
/// receivables at its current daily operating expense.
pub fn defensive_interval_ratio(p: &FinancialPeriod) -> MetricValue {
    let daily_expenses = divide_or_undefined(p.operating_expenses, DAYS_PER_YEAR)?;
    let defensive_assets = p.liquid_assets()?.checked_add(p.receivables)?;
    divide_or_undefined(defensive_assets, daily_expenses)
}

/// Working capital as a percent of total assets.
pub fn net_working_capital_ratio(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.working_capital()?, p.total_assets)
}

pub fn calculate_working_capital_metrics(
    p: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> WorkingCapitalMetrics {
    let avg_wc = match previous {
        Some(q) => q
            .working_capital()
            .and_then(|prev| period_average(p.working_capital()?, Some(prev))),
        None => p.working_capital(),
    };
    WorkingCapitalMetrics {
        working_capital_turnover: avg_wc.and_then(|avg| working_capital_turnover(p, avg)),
        working_capital_to_sales: working_capital_to_sales(p),
        defensive_interval_ratio: defensive_interval_ratio(p),
        net_working_capital_ratio: net_working_capital_ratio(p),
    }
}
