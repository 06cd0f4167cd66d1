//! Return ratios and the three-factor DuPont decomposition.
//!
//! ROE and ROA divide by average equity and assets. ROIC divides NOPAT by
//! average invested capital, where invested capital is equity plus total
//! debt and NOPAT is EBIT × (1 − income tax / income before tax).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, percent_or_undefined, period_average, HUNDRED};
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnMetrics {
    pub roe: MetricValue,
    pub roa: MetricValue,
    pub roic: MetricValue,
    pub dupont_net_margin: MetricValue,
    pub dupont_asset_turnover: MetricValue,
    pub dupont_equity_multiplier: MetricValue,
    pub roe_dupont: MetricValue,
}

/// ROE = net margin × asset turnover × equity multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DupontDecomposition {
    /// Percent.
    pub net_margin: MetricValue,
    pub asset_turnover: MetricValue,
    pub equity_multiplier: MetricValue,
    /// Percent.
    pub roe: MetricValue,
}

pub fn roe(p: &FinancialPeriod, avg_equity: Decimal) -> MetricValue {
    percent_or_undefined(p.net_income, avg_equity)
}

pub fn roa(p: &FinancialPeriod, avg_assets: Decimal) -> MetricValue {
    percent_or_undefined(p.net_income, avg_assets)
}

/// Net operating profit after tax. `None` when income before tax is zero,
/// since the effective tax rate cannot be formed.
pub fn nopat(p: &FinancialPeriod) -> MetricValue {
    let tax_rate = divide_or_undefined(p.income_tax, p.income_before_tax)?;
    p.ebit.checked_mul(Decimal::ONE.checked_sub(tax_rate)?)
}

pub fn roic(p: &FinancialPeriod, avg_invested_capital: Decimal) -> MetricValue {
    if avg_invested_capital.is_zero() {
        return None;
    }
    percent_or_undefined(nopat(p)?, avg_invested_capital)
}

/// Average equity plus average total debt.
pub fn average_invested_capital(
    p: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> MetricValue {
    let previous_debt = match previous {
        Some(q) => Some(q.total_debt()?),
        None => None,
    };
    let avg_equity = period_average(p.total_equity, previous.map(|q| q.total_equity))?;
    let avg_debt = period_average(p.total_debt()?, previous_debt)?;
    avg_equity.checked_add(avg_debt)
}

/// All four components are undefined together when revenue, average assets
/// or average equity is zero.
pub fn dupont_three_factor(
    p: &FinancialPeriod,
    avg_equity: Decimal,
    avg_assets: Decimal,
) -> DupontDecomposition {
    let parts = || -> Option<DupontDecomposition> {
        let net_margin = divide_or_undefined(p.net_income, p.revenue)?;
        let asset_turnover = divide_or_undefined(p.revenue, avg_assets)?;
        let equity_multiplier = divide_or_undefined(avg_assets, avg_equity)?;
        let roe = net_margin
            .checked_mul(asset_turnover)?
            .checked_mul(equity_multiplier)?
            .checked_mul(HUNDRED)?;
        Some(DupontDecomposition {
            net_margin: net_margin.checked_mul(HUNDRED),
            asset_turnover: Some(asset_turnover),
            equity_multiplier: Some(equity_multiplier),
            roe: Some(roe),
        })
    };
    parts().unwrap_or_default()
}

pub fn calculate_return_metrics(
    p: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> ReturnMetrics {
    let avg_equity = period_average(p.total_equity, previous.map(|q| q.total_equity));
    let avg_assets = period_average(p.total_assets, previous.map(|q| q.total_assets));
    let avg_invested_capital = average_invested_capital(p, previous);

    let dupont = match (avg_equity, avg_assets) {
        (Some(equity), Some(assets)) => dupont_three_factor(p, equity, assets),
        _ => DupontDecomposition::default(),
    };

    ReturnMetrics {
        roe: avg_equity.and_then(|avg| roe(p, avg)),
        roa: avg_assets.and_then(|avg| roa(p, avg)),
        roic: avg_invested_capital.and_then(|avg| roic(p, avg)),
        dupont_net_margin: dupont.net_margin,
        dupont_asset_turnover: dupont.asset_turnover,
        dupont_equity_multiplier: dupont.equity_multiplier,
        roe_dupont: dupont.roe,
    }
}
