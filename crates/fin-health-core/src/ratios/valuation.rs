//! Market valuation multiples.
//!
//! Every metric here is gated on the presence of the market field it needs.
//! A reported price of zero is present, so it can still yield a value where
//! the price is a numerator (P/E of zero) but not where it is a denominator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, percent_or_undefined};
use crate::period::FinancialPeriod;
use crate::ratios::per_share::{book_value_per_share, fcf_per_share};
use crate::types::{MetricValue, Rate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationMetrics {
    pub pe_ratio: MetricValue,
    pub price_to_book: MetricValue,
    pub price_to_sales: MetricValue,
    pub ev_to_ebitda: MetricValue,
    pub price_to_fcf: MetricValue,
    pub peg_ratio: MetricValue,
    pub earnings_yield: MetricValue,
    pub fcf_yield: MetricValue,
}

/// Price / diluted EPS.
pub fn pe_ratio(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.market_price?, p.eps_diluted)
}

pub fn price_to_book(p: &FinancialPeriod) -> MetricValue {
    let price = p.market_price?;
    divide_or_undefined(price, book_value_per_share(p)?)
}

/// Market cap / revenue.
pub fn price_to_sales(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.market_cap?, p.revenue)
}

pub fn ev_to_ebitda(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.enterprise_value?, p.ebitda)
}

/// Market cap / free cash flow.
pub fn price_to_fcf(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.market_cap?, p.free_cash_flow)
}

/// P/E divided by an externally supplied earnings growth rate, taken in the
/// same units the caller quotes it (typically percent).
pub fn peg_ratio(p: &FinancialPeriod, earnings_growth_rate: Option<Rate>) -> MetricValue {
    let growth = earnings_growth_rate?;
    if growth.is_zero() {
        return None;
    }
    divide_or_undefined(pe_ratio(p)?, growth)
}

/// EPS / price, in percent.
pub fn earnings_yield(p: &FinancialPeriod) -> MetricValue {
    percent_or_undefined(p.eps_diluted, p.market_price?)
}

/// FCF per share / price, in percent.
pub fn fcf_yield(p: &FinancialPeriod) -> MetricValue {
    let price = p.market_price?;
    if price.is_zero() {
        return None;
    }
    percent_or_undefined(fcf_per_share(p)?, price)
}

pub fn calculate_valuation_metrics(
    p: &FinancialPeriod,
    earnings_growth_rate: Option<Decimal>,
) -> ValuationMetrics {
    ValuationMetrics {
        pe_ratio: pe_ratio(p),
        price_to_book: price_to_book(p),
        price_to_sales: price_to_sales(p),
        ev_to_ebitda: ev_to_ebitda(p),
        price_to_fcf: price_to_fcf(p),
        peg_ratio: peg_ratio(p, earnings_growth_rate),
        earnings_yield: earnings_yield(p),
        fcf_yield: fcf_yield(p),
    }
}
