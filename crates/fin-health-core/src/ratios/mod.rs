pub mod balance_sheet_quality;
pub mod cash_flow_quality;
pub mod competitive_advantage;
pub mod detailed_profitability;
pub mod efficiency;
pub mod growth;
pub mod leverage;
pub mod liquidity;
pub mod per_share;
pub mod profitability;
pub mod returns;
pub mod shareholder_value;
pub mod valuation;
pub mod working_capital;

pub use balance_sheet_quality::BalanceSheetQualityMetrics;
pub use cash_flow_quality::CashFlowQualityMetrics;
pub use competitive_advantage::CompetitiveAdvantageMetrics;
pub use detailed_profitability::DetailedProfitabilityMetrics;
pub use efficiency::EfficiencyMetrics;
pub use growth::GrowthMetrics;
pub use leverage::LeverageMetrics;
pub use liquidity::LiquidityMetrics;
pub use per_share::PerShareMetrics;
pub use profitability::ProfitabilityMetrics;
pub use returns::ReturnMetrics;
pub use shareholder_value::ShareholderValueMetrics;
pub use valuation::ValuationMetrics;
pub use working_capital::WorkingCapitalMetrics;
