//! Cash-flow quality: how much of reported earnings is backed by cash.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, percent_or_undefined};
use crate::period::FinancialPeriod;
use crate::ratios::returns::average_invested_capital;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowQualityMetrics {
    pub cash_flow_to_net_income: MetricValue,
    pub cash_roi: MetricValue,
    pub capex_to_operating_cf: MetricValue,
    pub fcf_conversion: MetricValue,
    pub operating_cf_margin: MetricValue,
}

/// Operating cash flow / net income.
pub fn cash_flow_to_net_income(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.operating_cash_flow, p.net_income)
}

/// Operating cash flow over average invested capital, in percent.
pub fn cash_roi(p: &FinancialPeriod, avg_invested_capital: Decimal) -> MetricValue {
    percent_or_undefined(p.operating_cash_flow, avg_invested_capital)
}

/// Capex is taken as an absolute amount; sources disagree on its sign.
pub fn capex_to_operating_cf(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.capex.abs(), p.operating_cash_flow)
}

pub fn fcf_conversion(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.free_cash_flow, p.net_income)
}

pub fn operating_cf_margin(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.operating_cash_flow, p.revenue)
}

pub fn calculate_cash_flow_quality_metrics(
    p: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> CashFlowQualityMetrics {
    CashFlowQualityMetrics {
        cash_flow_to_net_income: cash_flow_to_net_income(p),
        cash_roi: average_invested_capital(p, previous).and_then(|avg| cash_roi(p, avg)),
        capex_to_operating_cf: capex_to_operating_cf(p),
        fcf_conversion: fcf_conversion(p),
        operating_cf_margin: operating_cf_margin(p),
    }
}
