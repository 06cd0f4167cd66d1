//! Per-share normalisations. All undefined when shares outstanding is zero.

use serde::{Deserialize, Serialize};

use crate::arithmetic::divide_or_undefined;
use crate::period::FinancialPeriod;
use crate::types::{MetricValue, Money};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerShareMetrics {
    pub book_value_per_share: MetricValue,
    pub tangible_book_value_per_share: MetricValue,
    pub fcf_per_share: MetricValue,
    pub operating_cf_per_share: MetricValue,
    pub revenue_per_share: MetricValue,
}

fn per_share(p: &FinancialPeriod, amount: Money) -> MetricValue {
    divide_or_undefined(amount, p.shares_outstanding)
}

pub fn book_value_per_share(p: &FinancialPeriod) -> MetricValue {
    per_share(p, p.total_equity)
}

/// Equity less intangibles and goodwill, per share.
pub fn tangible_book_value_per_share(p: &FinancialPeriod) -> MetricValue {
    let tangible_equity = p
        .total_equity
        .checked_sub(p.intangible_assets)?
        .checked_sub(p.goodwill)?;
    per_share(p, tangible_equity)
}

pub fn fcf_per_share(p: &FinancialPeriod) -> MetricValue {
    per_share(p, p.free_cash_flow)
}

pub fn operating_cf_per_share(p: &FinancialPeriod) -> MetricValue {
    per_share(p, p.operating_cash_flow)
}

pub fn revenue_per_share(p: &FinancialPeriod) -> MetricValue {
    per_share(p, p.revenue)
}

pub fn calculate_per_share_metrics(p: &FinancialPeriod) -> PerShareMetrics {
    PerShareMetrics {
        book_value_per_share: book_value_per_share(p),
        tangible_book_value_per_share: tangible_book_value_per_share(p),
        fcf_per_share: fcf_per_share(p),
        operating_cf_per_share: operating_cf_per_share(p),
        revenue_per_share: revenue_per_share(p),
    }
}
