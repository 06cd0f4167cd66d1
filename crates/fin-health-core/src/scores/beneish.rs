//! Beneish M-Score: eight-index earnings-manipulation model.
//!
//! M = −4.84 + 0.920·DSRI + 0.528·GMI + 0.404·AQI + 0.892·SGI + 0.115·DEPI
//!     − 0.172·SGAI + 4.679·TATA − 0.327·LVGI
//!
//! Each index compares the current period with the previous one. A side
//! whose own denominator is zero counts as 0; the index itself is 1 (no
//! change) when its divisor is zero or a side overflows. GMI is also 1 when
//! the previous period has no revenue.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arithmetic::{weighted_sum, DAYS_PER_YEAR};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

const INTERCEPT: Decimal = dec!(-4.84);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeneishIndices {
    /// Days sales in receivables index.
    pub dsri: Decimal,
    /// Gross margin index.
    pub gmi: Decimal,
    /// Asset quality index.
    pub aqi: Decimal,
    /// Sales growth index.
    pub sgi: Decimal,
    /// Depreciation index.
    pub depi: Decimal,
    /// SG&A index.
    pub sgai: Decimal,
    /// Total accruals to total assets.
    pub tata: Decimal,
    /// Leverage index.
    pub lvgi: Decimal,
}

impl BeneishIndices {
    pub fn m_score(&self) -> MetricValue {
        weighted_sum(
            INTERCEPT,
            &[
                (dec!(0.920), self.dsri),
                (dec!(0.528), self.gmi),
                (dec!(0.404), self.aqi),
                (dec!(0.892), self.sgi),
                (dec!(0.115), self.depi),
                (dec!(-0.172), self.sgai),
                (dec!(4.679), self.tata),
                (dec!(-0.327), self.lvgi),
            ],
        )
    }
}

/// One side of an index: 0 when its own denominator is zero, `None` only
/// when the value does not fit in a `Decimal`.
fn side_ratio(numerator: Decimal, denominator: Decimal) -> MetricValue {
    if denominator.is_zero() {
        return Some(Decimal::ZERO);
    }
    numerator.checked_div(denominator)
}

fn index(numerator: MetricValue, denominator: MetricValue) -> Decimal {
    match (numerator, denominator) {
        (Some(n), Some(d)) if !d.is_zero() => n.checked_div(d).unwrap_or(Decimal::ONE),
        _ => Decimal::ONE,
    }
}

fn receivable_days(p: &FinancialPeriod) -> MetricValue {
    side_ratio(p.receivables, p.revenue)?.checked_mul(DAYS_PER_YEAR)
}

fn gross_margin(p: &FinancialPeriod) -> MetricValue {
    side_ratio(p.gross_profit, p.revenue)
}

/// Share of assets that are neither current nor PP&E.
fn soft_asset_share(p: &FinancialPeriod) -> MetricValue {
    let soft = p
        .total_assets
        .checked_sub(p.current_assets)?
        .checked_sub(p.ppe_net)?;
    side_ratio(soft, p.total_assets)
}

fn depreciation_rate(p: &FinancialPeriod) -> MetricValue {
    let da = p.depreciation_amortization.unwrap_or(Decimal::ZERO);
    side_ratio(da, da.checked_add(p.ppe_net)?)
}

/// SG&A falls back to operating expenses when not reported.
fn sga_intensity(p: &FinancialPeriod) -> MetricValue {
    side_ratio(p.sga_expense.unwrap_or(p.operating_expenses), p.revenue)
}

fn debt_share(p: &FinancialPeriod) -> MetricValue {
    side_ratio(p.total_debt()?, p.total_assets)
}

/// (Δ working capital − operating cash flow) / total assets, 0 without assets.
fn total_accruals(current: &FinancialPeriod, previous: &FinancialPeriod) -> MetricValue {
    let accruals = current
        .working_capital()?
        .checked_sub(previous.working_capital()?)?
        .checked_sub(current.operating_cash_flow)?;
    side_ratio(accruals, current.total_assets)
}

/// `None` only when total accruals overflow.
pub fn beneish_indices(
    current: &FinancialPeriod,
    previous: &FinancialPeriod,
) -> Option<BeneishIndices> {
    // A previous period without revenue has no margin to compare against.
    let gmi = if previous.revenue.is_zero() {
        Decimal::ONE
    } else {
        index(gross_margin(previous), gross_margin(current))
    };

    Some(BeneishIndices {
        dsri: index(receivable_days(current), receivable_days(previous)),
        gmi,
        aqi: index(soft_asset_share(current), soft_asset_share(previous)),
        sgi: index(Some(current.revenue), Some(previous.revenue)),
        depi: index(depreciation_rate(previous), depreciation_rate(current)),
        sgai: index(sga_intensity(current), sga_intensity(previous)),
        tata: total_accruals(current, previous)?,
        lvgi: index(debt_share(current), debt_share(previous)),
    })
}

pub fn beneish_m_score(current: &FinancialPeriod, previous: &FinancialPeriod) -> MetricValue {
    let score = beneish_indices(current, previous).and_then(|idx| idx.m_score());
    if score.is_none() {
        debug!(symbol = %current.symbol, "beneish m-score overflowed");
    }
    score
}
