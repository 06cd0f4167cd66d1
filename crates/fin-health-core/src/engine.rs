//! Orchestration of every category calculator and scorer into one record.
//!
//! Nothing is skipped for missing inputs: calculators always run and report
//! undefined values for whatever they cannot form. The only error is a
//! current period without an identity.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::MetricsError;
use crate::period::FinancialPeriod;
use crate::ratios::{
    balance_sheet_quality, cash_flow_quality, competitive_advantage, detailed_profitability,
    efficiency, growth, leverage, liquidity, per_share, profitability, returns,
    shareholder_value, valuation, working_capital, BalanceSheetQualityMetrics,
    CashFlowQualityMetrics, CompetitiveAdvantageMetrics, DetailedProfitabilityMetrics,
    EfficiencyMetrics, GrowthMetrics, LeverageMetrics, LiquidityMetrics, PerShareMetrics,
    ProfitabilityMetrics, ReturnMetrics, ShareholderValueMetrics, ValuationMetrics,
    WorkingCapitalMetrics,
};
use crate::scores::{
    calculate_enhanced_scores, calculate_quality_scores, EnhancedQualityScores, QualityScores,
};
use crate::types::{with_metadata, ComputationOutput, PeriodType, Rate};
use crate::MetricsResult;

const IDENTITY_KEYS: [&str; 3] = ["symbol", "date", "period_type"];

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Caller-supplied figures that are not derivable from the statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalAssumptions {
    /// Expected earnings growth, in the units the PEG ratio should use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings_growth_rate: Option<Rate>,
    /// Weighted average cost of capital, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wacc: Option<Rate>,
    /// Gross margins (percent) over up to five years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins_5y: Option<Vec<Decimal>>,
    /// Revenues over up to five years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenues_5y: Option<Vec<Decimal>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsInput {
    pub current: FinancialPeriod,
    /// The immediately preceding period, used for averaged denominators and
    /// two-period scores.
    #[serde(default)]
    pub previous: Option<FinancialPeriod>,
    /// Prior periods ordered newest to oldest, excluding `current`.
    #[serde(default)]
    pub historical: Vec<FinancialPeriod>,
    #[serde(default)]
    pub assumptions: ExternalAssumptions,
}

impl MetricsInput {
    pub fn new(current: FinancialPeriod) -> Self {
        Self {
            current,
            previous: None,
            historical: Vec::new(),
            assumptions: ExternalAssumptions::default(),
        }
    }

    pub fn with_previous(mut self, previous: FinancialPeriod) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn with_history(mut self, historical: Vec<FinancialPeriod>) -> Self {
        self.historical = historical;
        self
    }

    pub fn with_assumptions(mut self, assumptions: ExternalAssumptions) -> Self {
        self.assumptions = assumptions;
        self
    }
}

/// Every metric for one period, plus the period's identity.
///
/// Serializes to a single flat object: metric names are unique across
/// categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub symbol: String,
    pub date: NaiveDate,
    pub period_type: PeriodType,
    #[serde(flatten)]
    pub liquidity: LiquidityMetrics,
    #[serde(flatten)]
    pub leverage: LeverageMetrics,
    #[serde(flatten)]
    pub efficiency: EfficiencyMetrics,
    #[serde(flatten)]
    pub profitability: ProfitabilityMetrics,
    #[serde(flatten)]
    pub returns: ReturnMetrics,
    #[serde(flatten)]
    pub growth: GrowthMetrics,
    #[serde(flatten)]
    pub per_share: PerShareMetrics,
    #[serde(flatten)]
    pub cash_flow_quality: CashFlowQualityMetrics,
    #[serde(flatten)]
    pub shareholder_value: ShareholderValueMetrics,
    #[serde(flatten)]
    pub balance_sheet_quality: BalanceSheetQualityMetrics,
    #[serde(flatten)]
    pub valuation: ValuationMetrics,
    #[serde(flatten)]
    pub working_capital: WorkingCapitalMetrics,
    #[serde(flatten)]
    pub detailed_profitability: DetailedProfitabilityMetrics,
    #[serde(flatten)]
    pub competitive_advantage: CompetitiveAdvantageMetrics,
    #[serde(flatten)]
    pub quality_scores: QualityScores,
    #[serde(flatten)]
    pub enhanced_scores: EnhancedQualityScores,
}

impl FinancialMetrics {
    /// The flat name → value mapping handed to persistence. Undefined
    /// metrics are present as `null`.
    pub fn to_flat_map(&self) -> MetricsResult<BTreeMap<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(MetricsError::SerializationError(format!(
                "expected a flat object, got {other}"
            ))),
        }
    }

    /// Names of every metric key, excluding the identity fields.
    pub fn metric_names(&self) -> MetricsResult<Vec<String>> {
        Ok(self
            .to_flat_map()?
            .into_keys()
            .filter(|k| !IDENTITY_KEYS.contains(&k.as_str()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

fn validate_input(input: &MetricsInput) -> MetricsResult<()> {
    if input.current.symbol.trim().is_empty() {
        return Err(MetricsError::InvalidInput {
            field: "current.symbol".into(),
            reason: "Current period must carry a symbol".into(),
        });
    }
    Ok(())
}

fn collect_warnings(input: &MetricsInput) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.previous.is_none() {
        warnings.push(
            "No previous period; averaged denominators use current balances and \
             Piotroski/Beneish are undefined."
                .into(),
        );
    }

    let n = input.historical.len();
    match n {
        0 => warnings.push("No history supplied; growth metrics are undefined.".into()),
        1 | 2 => warnings.push(format!(
            "History has {n} period(s); 3-year and 5-year CAGR are undefined."
        )),
        3 | 4 => warnings.push(format!("History has {n} periods; 5-year CAGR is undefined.")),
        n if n > growth::MAX_HISTORY => warnings.push(format!(
            "History has {n} periods; only the {} most recent are used.",
            growth::MAX_HISTORY
        )),
        _ => {}
    }

    let ordered = input
        .historical
        .windows(2)
        .all(|w| w[0].date > w[1].date);
    let before_current = input
        .historical
        .first()
        .map_or(true, |h| h.date < input.current.date);
    if !ordered || !before_current {
        warnings.push("History is not ordered newest to oldest before the current period.".into());
    }

    warnings
}

/// Compute every metric for `input.current`.
pub fn calculate_all_metrics(
    input: &MetricsInput,
) -> MetricsResult<ComputationOutput<FinancialMetrics>> {
    let start = Instant::now();
    validate_input(input)?;
    let warnings = collect_warnings(input);

    let p = &input.current;
    let prev = input.previous.as_ref();
    let a = &input.assumptions;

    debug!(
        symbol = %p.symbol,
        date = %p.date,
        period_type = %p.period_type,
        has_previous = prev.is_some(),
        history = input.historical.len(),
        "calculating financial metrics"
    );

    let metrics = FinancialMetrics {
        symbol: p.symbol.clone(),
        date: p.date,
        period_type: p.period_type,
        liquidity: liquidity::calculate_liquidity_metrics(p),
        leverage: leverage::calculate_leverage_metrics(p),
        efficiency: efficiency::calculate_efficiency_metrics(p, prev),
        profitability: profitability::calculate_profitability_metrics(p),
        returns: returns::calculate_return_metrics(p, prev),
        growth: growth::calculate_growth_metrics(p, &input.historical),
        per_share: per_share::calculate_per_share_metrics(p),
        cash_flow_quality: cash_flow_quality::calculate_cash_flow_quality_metrics(p, prev),
        shareholder_value: shareholder_value::calculate_shareholder_value_metrics(p),
        balance_sheet_quality: balance_sheet_quality::calculate_balance_sheet_quality_metrics(
            p, prev,
        ),
        valuation: valuation::calculate_valuation_metrics(p, a.earnings_growth_rate),
        working_capital: working_capital::calculate_working_capital_metrics(p, prev),
        detailed_profitability: detailed_profitability::calculate_detailed_profitability_metrics(
            p,
        ),
        competitive_advantage: competitive_advantage::calculate_competitive_advantage_metrics(
            p,
            a.margins_5y.as_deref().unwrap_or_default(),
            a.revenues_5y.as_deref().unwrap_or_default(),
            a.wacc,
        ),
        quality_scores: calculate_quality_scores(p, prev),
        enhanced_scores: calculate_enhanced_scores(p, prev),
    };

    let assumptions = serde_json::json!({
        "previous_period": prev.map(|q| q.date),
        "history_periods": input.historical.len(),
        "external": a,
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Financial health metrics (14 ratio categories; Piotroski, Altman, Beneish, Ohlson, Zmijewski, Sloan)",
        &assumptions,
        warnings,
        elapsed,
        metrics,
    ))
}

/// Compute many independent inputs in parallel. Output order follows input.
#[cfg(feature = "parallel")]
pub fn calculate_batch(
    inputs: &[MetricsInput],
) -> Vec<MetricsResult<ComputationOutput<FinancialMetrics>>> {
    use rayon::prelude::*;

    debug!(count = inputs.len(), "calculating metrics batch");
    inputs.par_iter().map(calculate_all_metrics).collect()
}
