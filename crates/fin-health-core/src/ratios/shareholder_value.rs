//! Capital returned to shareholders through dividends and buybacks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::percent_or_undefined;
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareholderValueMetrics {
    pub dividend_payout_ratio: MetricValue,
    pub fcf_payout_ratio: MetricValue,
    pub share_buyback_yield: MetricValue,
    pub total_shareholder_yield: MetricValue,
    pub earnings_retention_rate: MetricValue,
}

/// Dividends / net income. Undefined for a loss or when no dividend is paid.
pub fn dividend_payout_ratio(p: &FinancialPeriod) -> MetricValue {
    if p.net_income <= Decimal::ZERO || p.dividends_paid.is_zero() {
        return None;
    }
    percent_or_undefined(p.dividends_paid, p.net_income)
}

/// Dividends / free cash flow, with the same gating as the earnings payout.
pub fn fcf_payout_ratio(p: &FinancialPeriod) -> MetricValue {
    if p.free_cash_flow <= Decimal::ZERO || p.dividends_paid.is_zero() {
        return None;
    }
    percent_or_undefined(p.dividends_paid, p.free_cash_flow)
}

/// Net buybacks / market cap. Negative when issuance exceeds repurchases.
pub fn share_buyback_yield(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.share_buybacks, p.market_cap?)
}

pub fn total_shareholder_yield(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.dividends_paid.checked_add(p.share_buybacks)?, p.market_cap?)
}

pub fn earnings_retention_rate(p: &FinancialPeriod) -> MetricValue {
    if p.net_income <= Decimal::ZERO {
        return None;
    }
    percent_or_undefined(p.net_income.checked_sub(p.dividends_paid)?, p.net_income)
}

pub fn calculate_shareholder_value_metrics(p: &FinancialPeriod) -> ShareholderValueMetrics {
    ShareholderValueMetrics {
        dividend_payout_ratio: dividend_payout_ratio(p),
        fcf_payout_ratio: fcf_payout_ratio(p),
        share_buyback_yield: share_buyback_yield(p),
        total_shareholder_yield: total_shareholder_yield(p),
        earnings_retention_rate: earnings_retention_rate(p),
    }
}
