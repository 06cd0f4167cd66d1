//! Conversion from loosely-typed ingestion rows into [`FinancialPeriod`].
//!
//! Upstream loaders hand over a JSON object whose values may be numbers,
//! numeric strings, `"None"`, `null`, or garbage. Required fields fall back
//! to zero, nullable fields fall back to absent. Identity fields are not
//! recoverable and fail the conversion.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;

use super::FinancialPeriod;
use crate::error::MetricsError;
use crate::types::{Money, PeriodType};
use crate::MetricsResult;

/// A raw statement row keyed by field name.
pub type RawRecord = serde_json::Map<String, Value>;

enum RawNumber {
    Absent,
    Present(Decimal),
    Unparseable,
}

fn parse_number(value: Option<&Value>) -> RawNumber {
    match value {
        None | Some(Value::Null) => RawNumber::Absent,
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                RawNumber::Present(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                RawNumber::Present(Decimal::from(u))
            } else {
                n.as_f64()
                    .and_then(|f| Decimal::try_from(f).ok())
                    .map_or(RawNumber::Unparseable, RawNumber::Present)
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("null") {
                return RawNumber::Absent;
            }
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .map_or(RawNumber::Unparseable, RawNumber::Present)
        }
        Some(_) => RawNumber::Unparseable,
    }
}

struct RawReader<'a> {
    raw: &'a RawRecord,
    symbol: &'a str,
}

impl RawReader<'_> {
    fn required(&self, field: &str) -> Money {
        match parse_number(self.raw.get(field)) {
            RawNumber::Present(v) => v,
            RawNumber::Absent => Decimal::ZERO,
            RawNumber::Unparseable => {
                warn!(symbol = self.symbol, field, "unparseable value, defaulting to 0");
                Decimal::ZERO
            }
        }
    }

    fn optional(&self, field: &str) -> Option<Money> {
        match parse_number(self.raw.get(field)) {
            RawNumber::Present(v) => Some(v),
            RawNumber::Absent => None,
            RawNumber::Unparseable => {
                warn!(symbol = self.symbol, field, "unparseable value, treating as absent");
                None
            }
        }
    }

    fn optional_count(&self, field: &str) -> Option<u64> {
        let value = self.optional(field)?;
        if value.is_sign_negative() || !value.fract().is_zero() {
            warn!(symbol = self.symbol, field, %value, "not a whole count, treating as absent");
            return None;
        }
        value.to_u64()
    }
}

fn identity_text<'a>(raw: &'a RawRecord, field: &str) -> Option<&'a str> {
    raw.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_date(raw: &RawRecord) -> MetricsResult<NaiveDate> {
    let text = identity_text(raw, "date").ok_or_else(|| MetricsError::InvalidInput {
        field: "date".into(),
        reason: "Period date is required".into(),
    })?;

    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    Err(MetricsError::DateError(format!(
        "cannot parse period date '{text}'"
    )))
}

impl FinancialPeriod {
    /// Build a period from a raw ingestion row.
    ///
    /// Fails only when the identity (`symbol`, `date`, `period_type`) is
    /// missing or malformed.
    pub fn from_raw(raw: &RawRecord) -> MetricsResult<Self> {
        let symbol = identity_text(raw, "symbol").ok_or_else(|| MetricsError::InvalidInput {
            field: "symbol".into(),
            reason: "Symbol is required".into(),
        })?;
        let date = parse_date(raw)?;
        let period_type = match identity_text(raw, "period_type") {
            None => PeriodType::Yearly,
            Some(s) => s
                .parse::<PeriodType>()
                .map_err(|reason| MetricsError::InvalidInput {
                    field: "period_type".into(),
                    reason,
                })?,
        };

        let r = RawReader { raw, symbol };

        Ok(Self {
            total_assets: r.required("total_assets"),
            total_liabilities: r.required("total_liabilities"),
            total_equity: r.required("total_equity"),
            current_assets: r.required("current_assets"),
            current_liabilities: r.required("current_liabilities"),
            cash: r.required("cash"),
            short_term_investments: r.required("short_term_investments"),
            inventory: r.required("inventory"),
            receivables: r.required("receivables"),
            accounts_payable: r.required("accounts_payable"),
            short_term_debt: r.required("short_term_debt"),
            long_term_debt: r.required("long_term_debt"),
            intangible_assets: r.required("intangible_assets"),
            goodwill: r.required("goodwill"),
            ppe_net: r.required("ppe_net"),

            revenue: r.required("revenue"),
            cost_of_revenue: r.required("cost_of_revenue"),
            gross_profit: r.required("gross_profit"),
            operating_expenses: r.required("operating_expenses"),
            operating_income: r.required("operating_income"),
            ebitda: r.required("ebitda"),
            ebit: r.required("ebit"),
            interest_expense: r.required("interest_expense"),
            income_before_tax: r.required("income_before_tax"),
            income_tax: r.required("income_tax"),
            net_income: r.required("net_income"),
            eps_diluted: r.required("eps_diluted"),

            operating_cash_flow: r.required("operating_cash_flow"),
            investing_cash_flow: r.required("investing_cash_flow"),
            financing_cash_flow: r.required("financing_cash_flow"),
            free_cash_flow: r.required("free_cash_flow"),
            capex: r.required("capex"),

            shares_outstanding: r.required("shares_outstanding"),

            date,
            symbol: symbol.to_string(),
            period_type,

            dividends_paid: r.required("dividends_paid"),
            share_buybacks: r.required("share_buybacks"),

            market_price: r.optional("market_price"),
            market_cap: r.optional("market_cap"),
            enterprise_value: r.optional("enterprise_value"),

            retained_earnings: r.optional("retained_earnings"),
            depreciation_amortization: r.optional("depreciation_amortization"),
            rd_expense: r.optional("rd_expense"),
            sga_expense: r.optional("sga_expense"),
            num_employees: r.optional_count("num_employees"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let p = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC",
            "date": "2024-03-31",
            "revenue": 800000,
            "net_income": "160000.50",
            "eps_diluted": 4.25,
            "total_assets": "1.5e6",
        })))
        .unwrap();
        assert_eq!(p.revenue, dec!(800000));
        assert_eq!(p.net_income, dec!(160000.50));
        assert_eq!(p.eps_diluted, dec!(4.25));
        assert_eq!(p.total_assets, dec!(1500000));
    }

    #[test]
    fn test_required_fields_default_to_zero() {
        let p = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC",
            "date": "2024-03-31",
            "revenue": "None",
            "cash": null,
            "inventory": "n/a",
            "goodwill": true,
        })))
        .unwrap();
        assert_eq!(p.revenue, Decimal::ZERO);
        assert_eq!(p.cash, Decimal::ZERO);
        assert_eq!(p.inventory, Decimal::ZERO);
        assert_eq!(p.goodwill, Decimal::ZERO);
        assert_eq!(p.total_assets, Decimal::ZERO);
    }

    #[test]
    fn test_nullable_fields_become_absent() {
        let p = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC",
            "date": "2024-03-31",
            "market_price": "None",
            "market_cap": "garbage",
            "rd_expense": null,
        })))
        .unwrap();
        assert_eq!(p.market_price, None);
        assert_eq!(p.market_cap, None);
        assert_eq!(p.rd_expense, None);
        assert_eq!(p.enterprise_value, None);
    }

    #[test]
    fn test_nullable_zero_is_present() {
        let p = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC",
            "date": "2024-03-31",
            "market_price": 0,
            "rd_expense": "0",
        })))
        .unwrap();
        assert_eq!(p.market_price, Some(Decimal::ZERO));
        assert_eq!(p.rd_expense, Some(Decimal::ZERO));
    }

    #[test]
    fn test_employee_count() {
        let ok = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC", "date": "2024-03-31", "num_employees": "500"
        })))
        .unwrap();
        assert_eq!(ok.num_employees, Some(500));

        let fractional = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC", "date": "2024-03-31", "num_employees": 12.5
        })))
        .unwrap();
        assert_eq!(fractional.num_employees, None);
    }

    #[test]
    fn test_timestamp_dates() {
        let p = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC", "date": "2024-03-31T00:00:00Z"
        })))
        .unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());

        let p = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC", "date": "2024-03-31 00:00:00"
        })))
        .unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_period_type() {
        let p = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC", "date": "2024-03-31", "period_type": "quarterly"
        })))
        .unwrap();
        assert_eq!(p.period_type, PeriodType::Quarterly);

        let err = FinancialPeriod::from_raw(&raw(json!({
            "symbol": "ABC", "date": "2024-03-31", "period_type": "weekly"
        })))
        .unwrap_err();
        match err {
            MetricsError::InvalidInput { field, .. } => assert_eq!(field, "period_type"),
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_missing_symbol_rejected() {
        let err = FinancialPeriod::from_raw(&raw(json!({"date": "2024-03-31"}))).unwrap_err();
        match err {
            MetricsError::InvalidInput { field, .. } => assert_eq!(field, "symbol"),
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_bad_date_rejected() {
        let err =
            FinancialPeriod::from_raw(&raw(json!({"symbol": "ABC", "date": "31/03/2024"})))
                .unwrap_err();
        assert!(matches!(err, MetricsError::DateError(_)));

        let err = FinancialPeriod::from_raw(&raw(json!({"symbol": "ABC"}))).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput { .. }));
    }
}
