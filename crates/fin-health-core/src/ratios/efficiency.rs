//! Efficiency (activity) ratios.
//!
//! Turnovers divide a flow by a balance averaged over the current and
//! previous period. Without a previous period the current balance is used.
//! Day counts are 365 / turnover.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, period_average, DAYS_PER_YEAR};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    pub asset_turnover: MetricValue,
    pub inventory_turnover: MetricValue,
    pub days_inventory_outstanding: MetricValue,
    pub receivables_turnover: MetricValue,
    pub days_sales_outstanding: MetricValue,
    pub payables_turnover: MetricValue,
    pub days_payable_outstanding: MetricValue,
    pub cash_conversion_cycle: MetricValue,
}

pub fn asset_turnover(p: &FinancialPeriod, avg_total_assets: Decimal) -> MetricValue {
    divide_or_undefined(p.revenue, avg_total_assets)
}

/// Cost of revenue / average inventory.
pub fn inventory_turnover(p: &FinancialPeriod, avg_inventory: Decimal) -> MetricValue {
    divide_or_undefined(p.cost_of_revenue, avg_inventory)
}

pub fn receivables_turnover(p: &FinancialPeriod, avg_receivables: Decimal) -> MetricValue {
    divide_or_undefined(p.revenue, avg_receivables)
}

/// Cost of revenue / average payables.
pub fn payables_turnover(p: &FinancialPeriod, avg_payables: Decimal) -> MetricValue {
    divide_or_undefined(p.cost_of_revenue, avg_payables)
}

/// 365 / turnover; undefined when the turnover is undefined or zero.
pub fn days_outstanding(turnover: MetricValue) -> MetricValue {
    divide_or_undefined(DAYS_PER_YEAR, turnover?)
}

/// DIO + DSO - DPO. Any undefined component makes the cycle undefined.
pub fn cash_conversion_cycle(dio: MetricValue, dso: MetricValue, dpo: MetricValue) -> MetricValue {
    dio?.checked_add(dso?)?.checked_sub(dpo?)
}

pub fn calculate_efficiency_metrics(
    p: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> EfficiencyMetrics {
    let avg_assets = period_average(p.total_assets, previous.map(|q| q.total_assets));
    let avg_inventory = period_average(p.inventory, previous.map(|q| q.inventory));
    let avg_receivables = period_average(p.receivables, previous.map(|q| q.receivables));
    let avg_payables = period_average(p.accounts_payable, previous.map(|q| q.accounts_payable));

    let inventory_turnover = avg_inventory.and_then(|avg| inventory_turnover(p, avg));
    let receivables_turnover = avg_receivables.and_then(|avg| receivables_turnover(p, avg));
    let payables_turnover = avg_payables.and_then(|avg| payables_turnover(p, avg));

    let dio = days_outstanding(inventory_turnover);
    let dso = days_outstanding(receivables_turnover);
    let dpo = days_outstanding(payables_turnover);

    EfficiencyMetrics {
        asset_turnover: avg_assets.and_then(|avg| asset_turnover(p, avg)),
        inventory_turnover,
        days_inventory_outstanding: dio,
        receivables_turnover,
        days_sales_outstanding: dso,
        payables_turnover,
        days_payable_outstanding: dpo,
        cash_conversion_cycle: cash_conversion_cycle(dio, dso, dpo),
    }
}
