//! Balance-sheet quality: asset tangibility and financial flexibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, percent_or_undefined, period_average};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetQualityMetrics {
    pub tangible_asset_ratio: MetricValue,
    pub fixed_asset_turnover: MetricValue,
    pub cash_to_debt_ratio: MetricValue,
    pub net_debt: MetricValue,
    pub net_debt_to_ebitda: MetricValue,
    pub financial_leverage_ratio: MetricValue,
}

/// Assets net of intangibles and goodwill, as a percent of total assets.
pub fn tangible_asset_ratio(p: &FinancialPeriod) -> MetricValue {
    let tangible = p
        .total_assets
        .checked_sub(p.intangible_assets)?
        .checked_sub(p.goodwill)?;
    percent_or_undefined(tangible, p.total_assets)
}

pub fn fixed_asset_turnover(p: &FinancialPeriod, avg_ppe_net: Decimal) -> MetricValue {
    divide_or_undefined(p.revenue, avg_ppe_net)
}

/// Cash only; short-term investments are left out.
pub fn cash_to_debt_ratio(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.cash, p.total_debt()?)
}

/// Total debt less cash and short-term investments. Negative is net cash.
pub fn net_debt(p: &FinancialPeriod) -> MetricValue {
    p.total_debt()?.checked_sub(p.liquid_assets()?)
}

pub fn net_debt_to_ebitda(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(net_debt(p)?, p.ebitda)
}

/// Total assets / total equity.
pub fn financial_leverage_ratio(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.total_assets, p.total_equity)
}

pub fn calculate_balance_sheet_quality_metrics(
    p: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> BalanceSheetQualityMetrics {
    let avg_ppe = period_average(p.ppe_net, previous.map(|q| q.ppe_net));
    BalanceSheetQualityMetrics {
        tangible_asset_ratio: tangible_asset_ratio(p),
        fixed_asset_turnover: avg_ppe.and_then(|avg| fixed_asset_turnover(p, avg)),
        cash_to_debt_ratio: cash_to_debt_ratio(p),
        net_debt: net_debt(p),
        net_debt_to_ebitda: net_debt_to_ebitda(p),
        financial_leverage_ratio: financial_leverage_ratio(p),
    }
}
