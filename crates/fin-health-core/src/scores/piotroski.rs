//! Piotroski F-Score: nine binary signals of fundamental strength.
//!
//! Profitability (four), leverage and liquidity (three), operating
//! efficiency (two). Each signal guards its own ratio denominators, so a zero
//! anywhere only withholds that one point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, period_average};
use crate::period::FinancialPeriod;

/// The nine pass/fail signals, in the published order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiotroskiSignals {
    pub positive_roa: bool,
    pub positive_operating_cash_flow: bool,
    pub roa_improved: bool,
    pub cash_backed_earnings: bool,
    pub long_term_debt_decreased: bool,
    pub current_ratio_improved: bool,
    pub no_dilution: bool,
    pub gross_margin_improved: bool,
    pub asset_turnover_improved: bool,
}

impl PiotroskiSignals {
    pub fn score(&self) -> u8 {
        [
            self.positive_roa,
            self.positive_operating_cash_flow,
            self.roa_improved,
            self.cash_backed_earnings,
            self.long_term_debt_decreased,
            self.current_ratio_improved,
            self.no_dilution,
            self.gross_margin_improved,
            self.asset_turnover_improved,
        ]
        .iter()
        .filter(|s| **s)
        .count() as u8
    }
}

/// `numerator / denominator` when the denominator is strictly positive,
/// otherwise zero.
fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        divide_or_undefined(numerator, denominator).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

pub fn piotroski_signals(current: &FinancialPeriod, previous: &FinancialPeriod) -> PiotroskiSignals {
    let positive_roa = period_average(current.total_assets, Some(previous.total_assets))
        .filter(|avg| *avg > Decimal::ZERO)
        .and_then(|avg| divide_or_undefined(current.net_income, avg))
        .is_some_and(|roa| roa > Decimal::ZERO);

    // Only comparable when the prior year had a positive asset base.
    let roa_improved = previous.total_assets > Decimal::ZERO
        && ratio_or_zero(current.net_income, current.total_assets)
            > ratio_or_zero(previous.net_income, previous.total_assets);

    let current_ratio_improved = ratio_or_zero(current.current_assets, current.current_liabilities)
        > ratio_or_zero(previous.current_assets, previous.current_liabilities);

    let gross_margin_improved = ratio_or_zero(current.gross_profit, current.revenue)
        > ratio_or_zero(previous.gross_profit, previous.revenue);

    let asset_turnover_improved = ratio_or_zero(current.revenue, current.total_assets)
        > ratio_or_zero(previous.revenue, previous.total_assets);

    PiotroskiSignals {
        positive_roa,
        positive_operating_cash_flow: current.operating_cash_flow > Decimal::ZERO,
        roa_improved,
        cash_backed_earnings: current.net_income < current.operating_cash_flow,
        long_term_debt_decreased: current.long_term_debt < previous.long_term_debt,
        current_ratio_improved,
        no_dilution: current.shares_outstanding <= previous.shares_outstanding,
        gross_margin_improved,
        asset_turnover_improved,
    }
}

/// F-Score in `0..=9`.
pub fn piotroski_f_score(current: &FinancialPeriod, previous: &FinancialPeriod) -> u8 {
    piotroski_signals(current, previous).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{prior_period, sample_period};
    use rust_decimal_macros::dec;

    #[test]
    fn test_improving_company_scores_nine() {
        let signals = piotroski_signals(&sample_period(), &prior_period());
        assert!(signals.positive_roa);
        assert!(signals.roa_improved);
        assert!(signals.gross_margin_improved);
        assert_eq!(signals.score(), 9);
    }

    #[test]
    fn test_deteriorating_company() {
        // Swapping the periods reverses every year-over-year comparison.
        let score = piotroski_f_score(&prior_period(), &sample_period());
        let signals = piotroski_signals(&prior_period(), &sample_period());
        assert!(signals.positive_roa);
        assert!(signals.positive_operating_cash_flow);
        assert!(signals.cash_backed_earnings);
        assert!(!signals.roa_improved);
        assert!(!signals.long_term_debt_decreased);
        assert!(signals.no_dilution);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_all_zero_periods() {
        let mut current = sample_period();
        let mut previous = prior_period();
        for p in [&mut current, &mut previous] {
            p.total_assets = Decimal::ZERO;
            p.current_liabilities = Decimal::ZERO;
            p.revenue = Decimal::ZERO;
        }
        let score = piotroski_f_score(&current, &previous);
        assert!(score <= 9);
        let signals = piotroski_signals(&current, &previous);
        assert!(!signals.positive_roa);
        assert!(!signals.roa_improved);
        assert!(!signals.current_ratio_improved);
        assert!(!signals.gross_margin_improved);
    }

    #[test]
    fn test_dilution_loses_point() {
        let mut current = sample_period();
        current.shares_outstanding = dec!(45000);
        let signals = piotroski_signals(&current, &prior_period());
        assert!(!signals.no_dilution);
        assert_eq!(signals.score(), 8);
    }
}
