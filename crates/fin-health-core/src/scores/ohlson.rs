//! Ohlson O-Score, single-period form.
//!
//! SIZE is the natural log of total assets without a price-level deflator.
//! INTWO looks at the current period only and CHIN is held at zero, since
//! neither is formed from a prior year here.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use tracing::debug;

use crate::arithmetic::{divide_or_undefined, weighted_sum};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

const INTERCEPT: Decimal = dec!(-1.32);
const SIZE: Decimal = dec!(-0.407);
const TLTA: Decimal = dec!(6.03);
const WCTA: Decimal = dec!(-1.43);
const CLCA: Decimal = dec!(0.0757);
const NITA: Decimal = dec!(-2.37);
const FUTL: Decimal = dec!(-1.83);
const INTWO: Decimal = dec!(0.285);
const OENEG: Decimal = dec!(-1.72);
const CHIN: Decimal = dec!(-0.521);

fn indicator(flag: bool) -> Decimal {
    if flag {
        Decimal::ONE
    } else {
        Decimal::ZERO
    }
}

pub fn ohlson_o_score(p: &FinancialPeriod) -> MetricValue {
    let ta = p.total_assets;
    if ta.is_zero() {
        return None;
    }
    let zero_if_undefined = |v: MetricValue| v.unwrap_or(Decimal::ZERO);

    let size = if ta > Decimal::ZERO {
        match ta.checked_ln() {
            Some(v) => v,
            None => {
                debug!(symbol = %p.symbol, "ohlson size term failed");
                return None;
            }
        }
    } else {
        Decimal::ZERO
    };

    let terms = [
        (SIZE, size),
        (TLTA, zero_if_undefined(divide_or_undefined(p.total_liabilities, ta))),
        (WCTA, zero_if_undefined(p.working_capital().and_then(|wc| divide_or_undefined(wc, ta)))),
        (CLCA, zero_if_undefined(divide_or_undefined(p.current_liabilities, p.current_assets))),
        (NITA, zero_if_undefined(divide_or_undefined(p.net_income, ta))),
        (FUTL, zero_if_undefined(divide_or_undefined(p.operating_cash_flow, p.total_liabilities))),
        (INTWO, indicator(p.net_income < Decimal::ZERO)),
        (OENEG, indicator(p.total_liabilities > ta)),
        (CHIN, Decimal::ZERO),
    ];

    let score = weighted_sum(INTERCEPT, &terms);
    if score.is_none() {
        debug!(symbol = %p.symbol, "ohlson o-score overflowed");
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{approx_eq, sample_period};

    #[test]
    fn test_sample_o_score() {
        let o = ohlson_o_score(&sample_period()).unwrap();
        assert!(approx_eq(o, dec!(-5.910263), dec!(0.0001)));
    }

    #[test]
    fn test_insolvent_loss_maker_scores_higher() {
        let mut p = sample_period();
        p.total_liabilities = dec!(1200000);
        p.net_income = dec!(-100000);
        let distressed = ohlson_o_score(&p).unwrap();
        assert!(distressed > ohlson_o_score(&sample_period()).unwrap());
    }

    #[test]
    fn test_zero_assets_undefined() {
        let mut p = sample_period();
        p.total_assets = Decimal::ZERO;
        assert_eq!(ohlson_o_score(&p), None);
    }

    #[test]
    fn test_zero_side_denominators_drop_terms() {
        let mut p = sample_period();
        p.current_assets = Decimal::ZERO;
        p.total_liabilities = Decimal::ZERO;
        assert!(ohlson_o_score(&p).is_some());
    }
}
