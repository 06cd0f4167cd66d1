//! Revenue-denominated margins, in percent.

use serde::{Deserialize, Serialize};

use crate::arithmetic::percent_or_undefined;
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityMetrics {
    pub gross_margin: MetricValue,
    pub operating_margin: MetricValue,
    pub net_margin: MetricValue,
    pub ebitda_margin: MetricValue,
    pub fcf_margin: MetricValue,
}

pub fn gross_margin(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.gross_profit, p.revenue)
}

pub fn operating_margin(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.operating_income, p.revenue)
}

pub fn net_margin(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.net_income, p.revenue)
}

pub fn ebitda_margin(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.ebitda, p.revenue)
}

pub fn fcf_margin(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.free_cash_flow, p.revenue)
}

pub fn calculate_profitability_metrics(p: &FinancialPeriod) -> ProfitabilityMetrics {
    ProfitabilityMetrics {
        gross_margin: gross_margin(p),
        operating_margin: operating_margin(p),
        net_margin: net_margin(p),
        ebitda_margin: ebitda_margin(p),
        fcf_margin: fcf_margin(p),
    }
}
