//! Numeric primitives shared by every calculator and scorer.
//!
//! The undefined result is `None`. Every ratio in the crate goes through
//! [`divide_or_undefined`] so the zero-denominator rule lives in one place.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::types::MetricValue;

pub const HUNDRED: Decimal = dec!(100);
pub const DAYS_PER_YEAR: Decimal = dec!(365);

const TWO: Decimal = dec!(2);

/// `numerator / denominator`, or `None` when the denominator is exactly zero
/// or the quotient does not fit in a `Decimal`.
pub fn divide_or_undefined(numerator: Decimal, denominator: Decimal) -> MetricValue {
    if denominator.is_zero() {
        return None;
    }
    numerator.checked_div(denominator)
}

/// Same as [`divide_or_undefined`], scaled to a percentage.
pub fn percent_or_undefined(numerator: Decimal, denominator: Decimal) -> MetricValue {
    divide_or_undefined(numerator, denominator)?.checked_mul(HUNDRED)
}

/// Two-point average when a previous value exists, otherwise the current
/// value alone (point-in-time denominator). `None` if the sum overflows.
pub fn period_average(current: Decimal, previous: Option<Decimal>) -> MetricValue {
    match previous {
        Some(prev) => current.checked_add(prev)?.checked_div(TWO),
        None => Some(current),
    }
}

/// Period-over-period growth in percent. Undefined when `previous` is zero.
pub fn year_over_year_growth(current: Decimal, previous: Decimal) -> MetricValue {
    percent_or_undefined(current.checked_sub(previous)?, previous)
}

/// Compound annual growth rate in percent.
///
/// Only defined for strictly positive endpoints and a positive horizon; a
/// negative or zero base has no real-valued root.
pub fn compound_annual_growth_rate(start: Decimal, end: Decimal, years: u32) -> MetricValue {
    if start <= Decimal::ZERO || end <= Decimal::ZERO || years == 0 {
        return None;
    }
    let ratio = divide_or_undefined(end, start)?;
    let exponent = Decimal::ONE / Decimal::from(years);
    let growth = ratio.checked_powd(exponent)?;
    growth.checked_sub(Decimal::ONE)?.checked_mul(HUNDRED)
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))?;
    divide_or_undefined(sum, Decimal::from(values.len() as u64))
}

/// Population standard deviation (divides by `n`). Needs at least two points.
pub fn population_std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let squared = values.iter().try_fold(Decimal::ZERO, |acc, v| {
        let d = v.checked_sub(m)?;
        acc.checked_add(d.checked_mul(d)?)
    })?;
    let variance = divide_or_undefined(squared, Decimal::from(values.len() as u64))?;
    variance.sqrt()
}

/// `intercept + Σ coefficient × value` with overflow checks on every step.
///
/// Scorers build their linear combinations with this so a single overflowing
/// term makes that score undefined instead of panicking.
pub fn weighted_sum(intercept: Decimal, terms: &[(Decimal, Decimal)]) -> Option<Decimal> {
    terms.iter().try_fold(intercept, |acc, (coefficient, value)| {
        acc.checked_add(coefficient.checked_mul(*value)?)
    })
}
