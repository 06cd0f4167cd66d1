//! Moat indicators: margin stability, revenue predictability, returns over
//! the cost of capital and reinvestment intensity.
//!
//! The multi-year sequences and WACC are supplied by the caller, they are
//! not derived from the period history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, mean, percent_or_undefined, population_std_dev};
use crate::period::FinancialPeriod;
use crate::ratios::returns::nopat;
use crate::types::{MetricValue, Rate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveAdvantageMetrics {
    pub gross_margin_stability: MetricValue,
    pub revenue_consistency: MetricValue,
    pub roic_spread: MetricValue,
    pub reinvestment_rate: MetricValue,
}

/// Population standard deviation of the supplied gross margins.
pub fn gross_margin_stability(margins: &[Decimal]) -> MetricValue {
    population_std_dev(margins)
}

/// Coefficient of variation (std dev / mean) of the supplied revenues.
pub fn revenue_consistency(revenues: &[Decimal]) -> MetricValue {
    let std_dev = population_std_dev(revenues)?;
    divide_or_undefined(std_dev, mean(revenues)?)
}

/// Point-in-time ROIC minus WACC, both in percent.
pub fn roic_spread(p: &FinancialPeriod, wacc: Option<Rate>) -> MetricValue {
    let wacc = wacc?;
    let invested_capital = p.invested_capital()?;
    if invested_capital.is_zero() {
        return None;
    }
    let roic = percent_or_undefined(nopat(p)?, invested_capital)?;
    roic.checked_sub(wacc)
}

/// (|capex| + R&D) / operating cash flow, in percent. Unreported R&D counts
/// as zero.
pub fn reinvestment_rate(p: &FinancialPeriod) -> MetricValue {
    let reinvestment = p.capex.abs().checked_add(p.rd_expense.unwrap_or(Decimal::ZERO))?;
    percent_or_undefined(reinvestment, p.operating_cash_flow)
}

pub fn calculate_competitive_advantage_metrics(
    p: &FinancialPeriod,
    margins_5y: &[Decimal],
    revenues_5y: &[Decimal],
    wacc: Option<Rate>,
) -> CompetitiveAdvantageMetrics {
    CompetitiveAdvantageMetrics {
        gross_margin_stability: gross_margin_stability(margins_5y),
        revenue_consistency: revenue_consistency(revenues_5y),
        roic_spread: roic_spread(p, wacc),
        reinvestment_rate: reinvestment_rate(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{approx_eq, sample_period};
    use rust_decimal_macros::dec;

    #[test]
    fn test_margin_stability() {
        let margins = [dec!(48), dec!(50), dec!(52)];
        let sd = gross_margin_stability(&margins).unwrap();
        // sqrt(8 / 3)
        assert!(approx_eq(sd, dec!(1.63299), dec!(0.0001)));
        assert_eq!(gross_margin_stability(&[dec!(50)]), None);
        assert_eq!(gross_margin_stability(&[]), None);
    }

    #[test]
    fn test_revenue_consistency() {
        let flat = [dec!(100), dec!(100), dec!(100)];
        assert_eq!(revenue_consistency(&flat), Some(Decimal::ZERO));

        let volatile = [dec!(50), dec!(150)];
        let cv = revenue_consistency(&volatile).unwrap();
        assert!(approx_eq(cv, dec!(0.5), dec!(0.000001)));

        assert_eq!(revenue_consistency(&[dec!(-100), dec!(100)]), None);
    }

    #[test]
    fn test_roic_spread() {
        let p = sample_period();
        // 176,000 / 850,000 = 20.70588...
        let spread = roic_spread(&p, Some(dec!(9))).unwrap();
        assert!(approx_eq(spread, dec!(11.70588), dec!(0.0001)));
        assert_eq!(roic_spread(&p, None), None);

        let mut no_pretax = sample_period();
        no_pretax.income_before_tax = Decimal::ZERO;
        assert_eq!(roic_spread(&no_pretax, Some(dec!(9))), None);
    }

    #[test]
    fn test_reinvestment_rate() {
        let mut p = sample_period();
        assert_eq!(reinvestment_rate(&p), Some(dec!(50)));
        p.rd_expense = None;
        assert!(approx_eq(reinvestment_rate(&p).unwrap(), dec!(27.7778), dec!(0.001)));
    }

    #[test]
    fn test_aggregate_without_sequences() {
        let m = calculate_competitive_advantage_metrics(&sample_period(), &[], &[], None);
        assert_eq!(m.gross_margin_stability, None);
        assert_eq!(m.revenue_consistency, None);
        assert_eq!(m.roic_spread, None);
        assert!(m.reinvestment_rate.is_some());
    }
}
