//! Liquidity ratios: ability to meet short-term obligations.
//!
//! - **Current ratio** -- current assets / current liabilities
//! - **Quick ratio** -- (current assets - inventory) / current liabilities
//! - **Cash ratio** -- (cash + short-term investments) / current liabilities
//! - **Working capital** -- current assets - current liabilities (defined unless it overflows)

use serde::{Deserialize, Serialize};

use crate::arithmetic::divide_or_undefined;
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquidityMetrics {
    pub current_ratio: MetricValue,
    pub quick_ratio: MetricValue,
    pub cash_ratio: MetricValue,
    pub working_capital: MetricValue,
}

pub fn current_ratio(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.current_assets, p.current_liabilities)
}

/// Excludes inventory from the numerator.
pub fn quick_ratio(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.current_assets.checked_sub(p.inventory)?, p.current_liabilities)
}

pub fn cash_ratio(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.liquid_assets()?, p.current_liabilities)
}

pub fn working_capital(p: &FinancialPeriod) -> MetricValue {
    p.working_capital()
}

pub fn calculate_liquidity_metrics(p: &FinancialPeriod) -> LiquidityMetrics {
    LiquidityMetrics {
        current_ratio: current_ratio(p),
        quick_ratio: quick_ratio(p),
        cash_ratio: cash_ratio(p),
        working_capital: working_capital(p),
    }
}
