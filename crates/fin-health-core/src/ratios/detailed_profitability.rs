//! Cost structure and productivity detail beyond the headline margins.

use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, percent_or_undefined};
use crate::period::FinancialPeriod;
use crate::ratios::returns::nopat;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedProfitabilityMetrics {
    pub rd_intensity: MetricValue,
    pub sga_ratio: MetricValue,
    pub effective_tax_rate: MetricValue,
    pub nopat_margin: MetricValue,
    pub gross_profit_per_employee: MetricValue,
}

/// R&D / revenue in percent. Undefined when R&D is not reported.
pub fn rd_intensity(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.rd_expense?, p.revenue)
}

pub fn sga_ratio(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.sga_expense?, p.revenue)
}

pub fn effective_tax_rate(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.income_tax, p.income_before_tax)
}

pub fn nopat_margin(p: &FinancialPeriod) -> MetricValue {
    if p.revenue.is_zero() {
        return None;
    }
    percent_or_undefined(nopat(p)?, p.revenue)
}

pub fn gross_profit_per_employee(p: &FinancialPeriod) -> MetricValue {
    let employees = p.num_employees?;
    divide_or_undefined(p.gross_profit, employees.into())
}

pub fn calculate_detailed_profitability_metrics(
    p: &FinancialPeriod,
) -> DetailedProfitabilityMetrics {
    DetailedProfitabilityMetrics {
        rd_intensity: rd_intensity(p),
        sga_ratio: sga_ratio(p),
        effective_tax_rate: effective_tax_rate(p),
        nopat_margin: nopat_margin(p),
        gross_profit_per_employee: gross_profit_per_employee(p),
    }
}
