//! Altman Z-Score (original manufacturing model).
//!
//! Z = 1.2·WC/TA + 1.4·RE/TA + 3.3·EBIT/TA + 0.6·Equity/TL + 1.0·Sales/TA
//!
//! Book equity stands in for the market value of equity, so the result
//! diverges from the textbook score for listed companies. Retained earnings
//! fall back to total equity when not reported.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::arithmetic::{divide_or_undefined, weighted_sum};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

const WC_WEIGHT: Decimal = dec!(1.2);
const RE_WEIGHT: Decimal = dec!(1.4);
const EBIT_WEIGHT: Decimal = dec!(3.3);
const EQUITY_WEIGHT: Decimal = dec!(0.6);
const SALES_WEIGHT: Decimal = dec!(1.0);

pub fn altman_z_score(p: &FinancialPeriod) -> MetricValue {
    let ta = p.total_assets;
    let tl = p.total_liabilities;
    if ta.is_zero() || tl.is_zero() {
        return None;
    }
    let retained = p.retained_earnings.unwrap_or(p.total_equity);

    let score = (|| {
        weighted_sum(
            Decimal::ZERO,
            &[
                (WC_WEIGHT, divide_or_undefined(p.working_capital()?, ta)?),
                (RE_WEIGHT, divide_or_undefined(retained, ta)?),
                (EBIT_WEIGHT, divide_or_undefined(p.ebit, ta)?),
                (EQUITY_WEIGHT, divide_or_undefined(p.total_equity, tl)?),
                (SALES_WEIGHT, divide_or_undefined(p.revenue, ta)?),
            ],
        )
    })();
    if score.is_none() {
        debug!(symbol = %p.symbol, "altman z-score overflowed");
    }
    score
}
