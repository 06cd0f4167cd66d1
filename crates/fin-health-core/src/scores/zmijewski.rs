//! Zmijewski (1984) probit distress score.
//!
//! X = −4.3 − 4.5·NI/TA + 5.7·TL/TA − 0.004·CA/CL

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::arithmetic::{divide_or_undefined, weighted_sum};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

pub fn zmijewski_score(p: &FinancialPeriod) -> MetricValue {
    let roa = divide_or_undefined(p.net_income, p.total_assets)?;
    let leverage = divide_or_undefined(p.total_liabilities, p.total_assets)?;
    // No current liabilities: the liquidity term drops out.
    let liquidity = divide_or_undefined(p.current_assets, p.current_liabilities).unwrap_or(Decimal::ZERO);

    let score = weighted_sum(
        dec!(-4.3),
        &[(dec!(-4.5), roa), (dec!(5.7), leverage), (dec!(-0.004), liquidity)],
    );
    if score.is_none() {
        debug!(symbol = %p.symbol, "zmijewski score overflowed");
    }
    score
}
