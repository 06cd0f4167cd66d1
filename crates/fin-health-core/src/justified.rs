//! Justified valuation multiples from fundamentals.
//!
//! Gordon-growth derived fair multiples for a company with constant growth
//! `g`, required return `r` and retention ratio `b`:
//!
//! - **P/E** = (1 − b) / (r − g)
//! - **P/B** = (ROE − g) / (r − g)
//! - **P/S** = (E/S) × (1 − b) × (1 + g) / (r − g)
//! - **P/CF** = (1 + g) / (r − g)
//!
//! All rates are decimals (0.12 = 12%). Every input is optional; a multiple
//! whose inputs are absent is undefined.

use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{divide_or_undefined, HUNDRED};
use crate::error::MetricsError;
use crate::types::{with_metadata, ComputationOutput, MetricValue, Money, Multiple, Rate};
use crate::MetricsResult;

const ROE_FLOOR: Decimal = dec!(-1);
const ROE_CEILING: Decimal = dec!(2);
const GROWTH_FLOOR: Decimal = dec!(-0.5);
const GROWTH_CEILING: Decimal = dec!(1);
const SUSTAINABLE_GROWTH_TOLERANCE: Decimal = dec!(0.05);

const PE_SANITY_CAP: Decimal = dec!(100);
const PB_SANITY_CAP: Decimal = dec!(20);
const PS_SANITY_CAP: Decimal = dec!(20);
const PCF_SANITY_CAP: Decimal = dec!(50);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JustifiedInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roe: Option<Rate>,
    /// Share of earnings retained, 1 − payout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_ratio: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<Rate>,
    /// Cost of equity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_return: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Money>,
    /// Free cash flow to equity. Only checked for a zero base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcfe: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JustifiedRatios {
    pub justified_pe: Option<Multiple>,
    pub justified_pb: Option<Multiple>,
    pub justified_ps: Option<Multiple>,
    pub justified_pcf: Option<Multiple>,
    pub payout_ratio: Option<Rate>,
    /// ROE × retention.
    pub sustainable_growth: Option<Rate>,
    /// r − g.
    pub implied_risk_premium: Option<Rate>,
    pub profit_margin: Option<Rate>,
}

/// Market multiples to set against the justified ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualMultiples {
    #[serde(default)]
    pub pe: Option<Multiple>,
    #[serde(default)]
    pub pb: Option<Multiple>,
    #[serde(default)]
    pub ps: Option<Multiple>,
    #[serde(default)]
    pub pcf: Option<Multiple>,
}

#[cfg(feature = "ratios")]
impl From<&crate::ratios::ValuationMetrics> for ActualMultiples {
    fn from(v: &crate::ratios::ValuationMetrics) -> Self {
        Self {
            pe: v.pe_ratio,
            pb: v.price_to_book,
            ps: v.price_to_sales,
            pcf: v.price_to_fcf,
        }
    }
}

/// Premium (positive) or discount (negative) of each actual multiple over
/// its justified value, in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipleComparison {
    pub pe_premium_pct: MetricValue,
    pub pb_premium_pct: MetricValue,
    pub ps_premium_pct: MetricValue,
    pub pcf_premium_pct: MetricValue,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &JustifiedInput, warnings: &mut Vec<String>) -> MetricsResult<()> {
    if let Some(b) = input.retention_ratio {
        if b < Decimal::ZERO || b > Decimal::ONE {
            return Err(MetricsError::InvalidInput {
                field: "retention_ratio".into(),
                reason: format!("Retention ratio must be between 0 and 1, got {b}"),
            });
        }
    }
    if let Some(r) = input.required_return {
        if r <= Decimal::ZERO {
            return Err(MetricsError::InvalidInput {
                field: "required_return".into(),
                reason: format!("Required return must be positive, got {r}"),
            });
        }
    }
    if let (Some(g), Some(r)) = (input.growth_rate, input.required_return) {
        if g >= r {
            return Err(MetricsError::InvalidInput {
                field: "growth_rate".into(),
                reason: format!("Growth rate ({g}) must be below required return ({r})"),
            });
        }
    }

    if let Some(roe) = input.roe {
        if roe < ROE_FLOOR || roe > ROE_CEILING {
            warnings.push(format!("ROE of {roe} is outside the usual -1 to 2 range"));
        }
    }
    if let Some(g) = input.growth_rate {
        if g < GROWTH_FLOOR || g > GROWTH_CEILING {
            warnings.push(format!("Growth rate of {g} is outside the usual -0.5 to 1 range"));
        }
    }
    if let (Some(roe), Some(b), Some(g)) = (input.roe, input.retention_ratio, input.growth_rate) {
        let gap = roe
            .checked_mul(b)
            .and_then(|sustainable| g.checked_sub(sustainable).map(|d| (sustainable, d)));
        if let Some((sustainable, d)) = gap.filter(|(_, d)| d.abs() > SUSTAINABLE_GROWTH_TOLERANCE) {
            warnings.push(format!(
                "Growth rate {g} differs from sustainable growth {sustainable} (ROE x retention)"
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Multiples
// ---------------------------------------------------------------------------

/// r − g when both are present and the spread is positive.
fn spread(input: &JustifiedInput) -> Option<Rate> {
    let s = input.required_return?.checked_sub(input.growth_rate?)?;
    (s > Decimal::ZERO).then_some(s)
}

pub fn justified_pe(input: &JustifiedInput) -> Option<Multiple> {
    let payout = Decimal::ONE.checked_sub(input.retention_ratio?)?;
    divide_or_undefined(payout, spread(input)?)
}

pub fn justified_pb(input: &JustifiedInput) -> Option<Multiple> {
    let excess = input.roe?.checked_sub(input.growth_rate?)?;
    divide_or_undefined(excess, spread(input)?)
}

pub fn justified_ps(input: &JustifiedInput) -> Option<Multiple> {
    let margin = divide_or_undefined(input.earnings?, input.sales?)?;
    let payout = Decimal::ONE.checked_sub(input.retention_ratio?)?;
    let next_year = Decimal::ONE.checked_add(input.growth_rate?)?;
    let numerator = margin.checked_mul(payout)?.checked_mul(next_year)?;
    divide_or_undefined(numerator, spread(input)?)
}

pub fn justified_pcf(input: &JustifiedInput) -> Option<Multiple> {
    if input.fcfe.is_some_and(|f| f.is_zero()) {
        return None;
    }
    divide_or_undefined(Decimal::ONE.checked_add(input.growth_rate?)?, spread(input)?)
}

fn sanity_warnings(ratios: &JustifiedRatios, warnings: &mut Vec<String>) {
    let checks = [
        ("P/E", ratios.justified_pe, PE_SANITY_CAP),
        ("P/B", ratios.justified_pb, PB_SANITY_CAP),
        ("P/S", ratios.justified_ps, PS_SANITY_CAP),
        ("P/CF", ratios.justified_pcf, PCF_SANITY_CAP),
    ];
    for (name, value, cap) in checks {
        match value {
            Some(v) if v < Decimal::ZERO => {
                warnings.push(format!("Negative justified {name} of {}x", v.round_dp(2)))
            }
            Some(v) if v > cap => {
                warnings.push(format!("Unusually high justified {name} of {}x", v.round_dp(2)))
            }
            _ => {}
        }
    }
}

/// Compute every justified multiple and the supporting rates.
pub fn calculate_justified_ratios(
    input: &JustifiedInput,
) -> MetricsResult<ComputationOutput<JustifiedRatios>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input, &mut warnings)?;

    let ratios = JustifiedRatios {
        justified_pe: justified_pe(input),
        justified_pb: justified_pb(input),
        justified_ps: justified_ps(input),
        justified_pcf: justified_pcf(input),
        payout_ratio: input.retention_ratio.and_then(|b| Decimal::ONE.checked_sub(b)),
        sustainable_growth: input
            .roe
            .zip(input.retention_ratio)
            .and_then(|(roe, b)| roe.checked_mul(b)),
        implied_risk_premium: input
            .required_return
            .zip(input.growth_rate)
            .and_then(|(r, g)| r.checked_sub(g)),
        profit_margin: input
            .earnings
            .zip(input.sales)
            .and_then(|(e, s)| divide_or_undefined(e, s)),
    };

    sanity_warnings(&ratios, &mut warnings);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Justified multiples (Gordon growth: P/E, P/B, P/S, P/CF)",
        input,
        warnings,
        elapsed,
        ratios,
    ))
}

fn premium_pct(actual: Option<Multiple>, justified: Option<Multiple>) -> MetricValue {
    let (a, j) = (actual?, justified?);
    divide_or_undefined(a.checked_sub(j)?, j)?.checked_mul(HUNDRED)
}

/// Premium or discount of market multiples over justified ones.
pub fn compare_to_actual(justified: &JustifiedRatios, actual: &ActualMultiples) -> MultipleComparison {
    MultipleComparison {
        pe_premium_pct: premium_pct(actual.pe, justified.justified_pe),
        pb_premium_pct: premium_pct(actual.pb, justified.justified_pb),
        ps_premium_pct: premium_pct(actual.ps, justified.justified_ps),
        pcf_premium_pct: premium_pct(actual.pcf, justified.justified_pcf),
    }
}
