//! Year-over-year growth and compound annual growth over a history.
//!
//! The history is ordered newest first and excludes the current period:
//! `history[0]` is one period back, `history[2]` three and `history[4]` five.
//! A horizon the history cannot reach is undefined, the rest still compute.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{compound_annual_growth_rate, year_over_year_growth};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub revenue_growth_yoy: MetricValue,
    pub earnings_growth_yoy: MetricValue,
    pub fcf_growth_yoy: MetricValue,
    pub equity_growth_yoy: MetricValue,
    pub revenue_cagr_3y: MetricValue,
    pub earnings_cagr_3y: MetricValue,
    pub fcf_cagr_3y: MetricValue,
    pub revenue_cagr_5y: MetricValue,
    pub earnings_cagr_5y: MetricValue,
    pub fcf_cagr_5y: MetricValue,
}

/// Longest horizon any growth metric looks back.
pub const MAX_HISTORY: usize = 5;

fn cagr_over(
    current: &FinancialPeriod,
    base: Option<&FinancialPeriod>,
    years: u32,
    field: fn(&FinancialPeriod) -> Decimal,
) -> MetricValue {
    let base = base?;
    compound_annual_growth_rate(field(base), field(current), years)
}

fn yoy_over(
    current: &FinancialPeriod,
    base: Option<&FinancialPeriod>,
    field: fn(&FinancialPeriod) -> Decimal,
) -> MetricValue {
    let base = base?;
    year_over_year_growth(field(current), field(base))
}

pub fn calculate_growth_metrics(
    current: &FinancialPeriod,
    history: &[FinancialPeriod],
) -> GrowthMetrics {
    let one_back = history.first();
    let three_back = history.get(2);
    let five_back = history.get(4);

    let revenue = |p: &FinancialPeriod| p.revenue;
    let earnings = |p: &FinancialPeriod| p.net_income;
    let fcf = |p: &FinancialPeriod| p.free_cash_flow;
    let equity = |p: &FinancialPeriod| p.total_equity;

    GrowthMetrics {
        revenue_growth_yoy: yoy_over(current, one_back, revenue),
        earnings_growth_yoy: yoy_over(current, one_back, earnings),
        fcf_growth_yoy: yoy_over(current, one_back, fcf),
        equity_growth_yoy: yoy_over(current, one_back, equity),
        revenue_cagr_3y: cagr_over(current, three_back, 3, revenue),
        earnings_cagr_3y: cagr_over(current, three_back, 3, earnings),
        fcf_cagr_3y: cagr_over(current, three_back, 3, fcf),
        revenue_cagr_5y: cagr_over(current, five_back, 5, revenue),
        earnings_cagr_5y: cagr_over(current, five_back, 5, earnings),
        fcf_cagr_5y: cagr_over(current, five_back, 5, fcf),
    }
}
