//! One company's statement snapshot for one reporting period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, PeriodType};

/// Statement data for a single symbol / period type / date.
///
/// Required numeric fields default to zero when missing. Market and
/// supplementary fields are `Option`: absence is distinct from a reported
/// zero and gates every metric that depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPeriod {
    // Balance sheet
    #[serde(default)]
    pub total_assets: Money,
    #[serde(default)]
    pub total_liabilities: Money,
    #[serde(default)]
    pub total_equity: Money,
    #[serde(default)]
    pub current_assets: Money,
    #[serde(default)]
    pub current_liabilities: Money,
    #[serde(default)]
    pub cash: Money,
    #[serde(default)]
    pub short_term_investments: Money,
    #[serde(default)]
    pub inventory: Money,
    #[serde(default)]
    pub receivables: Money,
    #[serde(default)]
    pub accounts_payable: Money,
    #[serde(default)]
    pub short_term_debt: Money,
    #[serde(default)]
    pub long_term_debt: Money,
    #[serde(default)]
    pub intangible_assets: Money,
    #[serde(default)]
    pub goodwill: Money,
    #[serde(default)]
    pub ppe_net: Money,

    // Income statement
    #[serde(default)]
    pub revenue: Money,
    #[serde(default)]
    pub cost_of_revenue: Money,
    #[serde(default)]
    pub gross_profit: Money,
    #[serde(default)]
    pub operating_expenses: Money,
    #[serde(default)]
    pub operating_income: Money,
    #[serde(default)]
    pub ebitda: Money,
    #[serde(default)]
    pub ebit: Money,
    #[serde(default)]
    pub interest_expense: Money,
    #[serde(default)]
    pub income_before_tax: Money,
    #[serde(default)]
    pub income_tax: Money,
    #[serde(default)]
    pub net_income: Money,
    #[serde(default)]
    pub eps_diluted: Money,

    // Cash flow
    #[serde(default)]
    pub operating_cash_flow: Money,
    #[serde(default)]
    pub investing_cash_flow: Money,
    #[serde(default)]
    pub financing_cash_flow: Money,
    #[serde(default)]
    pub free_cash_flow: Money,
    #[serde(default)]
    pub capex: Money,

    #[serde(default)]
    pub shares_outstanding: Decimal,

    // Identity
    pub date: NaiveDate,
    pub symbol: String,
    #[serde(default)]
    pub period_type: PeriodType,

    // Shareholder returns
    #[serde(default)]
    pub dividends_paid: Money,
    /// Buybacks net of issuance.
    #[serde(default)]
    pub share_buybacks: Money,

    // Market data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_value: Option<Money>,

    // Supplementary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retained_earnings: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depreciation_amortization: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rd_expense: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sga_expense: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_employees: Option<u64>,
}

impl FinancialPeriod {
    /// An all-zero period with no market or supplementary data.
    pub fn new(symbol: impl Into<String>, date: NaiveDate, period_type: PeriodType) -> Self {
        Self {
            total_assets: Decimal::ZERO,
            total_liabilities: Decimal::ZERO,
            total_equity: Decimal::ZERO,
            current_assets: Decimal::ZERO,
            current_liabilities: Decimal::ZERO,
            cash: Decimal::ZERO,
            short_term_investments: Decimal::ZERO,
            inventory: Decimal::ZERO,
            receivables: Decimal::ZERO,
            accounts_payable: Decimal::ZERO,
            short_term_debt: Decimal::ZERO,
            long_term_debt: Decimal::ZERO,
            intangible_assets: Decimal::ZERO,
            goodwill: Decimal::ZERO,
            ppe_net: Decimal::ZERO,
            revenue: Decimal::ZERO,
            cost_of_revenue: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            operating_expenses: Decimal::ZERO,
            operating_income: Decimal::ZERO,
            ebitda: Decimal::ZERO,
            ebit: Decimal::ZERO,
            interest_expense: Decimal::ZERO,
            income_before_tax: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            net_income: Decimal::ZERO,
            eps_diluted: Decimal::ZERO,
            operating_cash_flow: Decimal::ZERO,
            investing_cash_flow: Decimal::ZERO,
            financing_cash_flow: Decimal::ZERO,
            free_cash_flow: Decimal::ZERO,
            capex: Decimal::ZERO,
            shares_outstanding: Decimal::ZERO,
            date,
            symbol: symbol.into(),
            period_type,
            dividends_paid: Decimal::ZERO,
            share_buybacks: Decimal::ZERO,
            market_price: None,
            market_cap: None,
            enterprise_value: None,
            retained_earnings: None,
            depreciation_amortization: None,
            rd_expense: None,
            sga_expense: None,
            num_employees: None,
        }
    }

    /// Short-term plus long-term debt.
    ///
    /// The derived helpers are `None` when the sum does not fit in a
    /// `Decimal`; every metric built on them is then undefined.
    pub fn total_debt(&self) -> Option<Money> {
        self.short_term_debt.checked_add(self.long_term_debt)
    }

    pub fn working_capital(&self) -> Option<Money> {
        self.current_assets.checked_sub(self.current_liabilities)
    }

    /// Cash plus short-term investments.
    pub fn liquid_assets(&self) -> Option<Money> {
        self.cash.checked_add(self.short_term_investments)
    }

    /// Equity plus total debt.
    pub fn invested_capital(&self) -> Option<Money> {
        self.total_equity.checked_add(self.total_debt()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> FinancialPeriod {
        let mut p = FinancialPeriod::new(
            "EXAMPLE",
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            PeriodType::Yearly,
        );
        p.total_equity = dec!(600000);
        p.current_assets = dec!(300000);
        p.current_liabilities = dec!(150000);
        p.cash = dec!(50000);
        p.short_term_investments = dec!(30000);
        p.short_term_debt = dec!(50000);
        p.long_term_debt = dec!(200000);
        p
    }

    #[test]
    fn test_derived_helpers() {
        let p = sample();
        assert_eq!(p.total_debt(), Some(dec!(250000)));
        assert_eq!(p.working_capital(), Some(dec!(150000)));
        assert_eq!(p.liquid_assets(), Some(dec!(80000)));
        assert_eq!(p.invested_capital(), Some(dec!(850000)));
    }

    #[test]
    fn test_derived_helpers_overflow() {
        let mut p = sample();
        p.short_term_debt = Decimal::MAX;
        p.current_liabilities = Decimal::MIN;
        assert_eq!(p.total_debt(), None);
        assert_eq!(p.invested_capital(), None);
        assert_eq!(p.working_capital(), None);
        assert_eq!(p.liquid_assets(), Some(dec!(80000)));
    }

    #[test]
    fn test_new_has_no_market_data() {
        let p = sample();
        assert!(p.market_price.is_none());
        assert!(p.market_cap.is_none());
        assert!(p.num_employees.is_none());
    }

    #[test]
    fn test_deserialize_defaults_missing_required_fields() {
        let json = r#"{"symbol":"ABC","date":"2023-12-31","revenue":"1000"}"#;
        let p: FinancialPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(p.revenue, dec!(1000));
        assert_eq!(p.total_assets, Decimal::ZERO);
        assert_eq!(p.period_type, PeriodType::Yearly);
        assert!(p.market_price.is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut p = sample();
        p.market_price = Some(Decimal::ZERO);
        let json = serde_json::to_string(&p).unwrap();
        let back: FinancialPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.market_price, Some(Decimal::ZERO));
    }
}
