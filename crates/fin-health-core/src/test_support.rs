//! Fixtures shared by unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::period::FinancialPeriod;
use crate::types::PeriodType;

pub(crate) fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
    (a - b).abs() < eps
}

/// FY2024 reference company.
pub(crate) fn sample_period() -> FinancialPeriod {
    let mut p = FinancialPeriod::new(
        "EXAMPLE",
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        PeriodType::Yearly,
    );
    p.total_assets = dec!(1000000);
    p.total_liabilities = dec!(400000);
    p.total_equity = dec!(600000);
    p.current_assets = dec!(300000);
    p.current_liabilities = dec!(150000);
    p.cash = dec!(50000);
    p.short_term_investments = dec!(30000);
    p.inventory = dec!(80000);
    p.receivables = dec!(70000);
    p.accounts_payable = dec!(60000);
    p.short_term_debt = dec!(50000);
    p.long_term_debt = dec!(200000);
    p.intangible_assets = dec!(20000);
    p.goodwill = dec!(10000);
    p.ppe_net = dec!(500000);
    p.revenue = dec!(800000);
    p.cost_of_revenue = dec!(400000);
    p.gross_profit = dec!(400000);
    p.operating_expenses = dec!(200000);
    p.operating_income = dec!(200000);
    p.ebitda = dec!(250000);
    p.ebit = dec!(220000);
    p.interest_expense = dec!(20000);
    p.income_before_tax = dec!(200000);
    p.income_tax = dec!(40000);
    p.net_income = dec!(160000);
    p.eps_diluted = dec!(4);
    p.operating_cash_flow = dec!(180000);
    p.investing_cash_flow = dec!(-50000);
    p.financing_cash_flow = dec!(-30000);
    p.free_cash_flow = dec!(130000);
    p.capex = dec!(50000);
    p.shares_outstanding = dec!(40000);
    p.dividends_paid = dec!(60000);
    p.share_buybacks = dec!(20000);
    p.market_price = Some(dec!(50));
    p.market_cap = Some(dec!(2000000));
    p.enterprise_value = Some(dec!(2120000));
    p.retained_earnings = Some(dec!(400000));
    p.depreciation_amortization = Some(dec!(30000));
    p.rd_expense = Some(dec!(40000));
    p.sga_expense = Some(dec!(100000));
    p.num_employees = Some(500);
    p
}

/// FY2023 for the same company: smaller, slightly less profitable.
pub(crate) fn prior_period() -> FinancialPeriod {
    let mut p = FinancialPeriod::new(
        "EXAMPLE",
        NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
        PeriodType::Yearly,
    );
    p.total_assets = dec!(900000);
    p.total_liabilities = dec!(380000);
    p.total_equity = dec!(520000);
    p.current_assets = dec!(260000);
    p.current_liabilities = dec!(140000);
    p.cash = dec!(40000);
    p.short_term_investments = dec!(20000);
    p.inventory = dec!(70000);
    p.receivables = dec!(60000);
    p.accounts_payable = dec!(50000);
    p.short_term_debt = dec!(50000);
    p.long_term_debt = dec!(220000);
    p.intangible_assets = dec!(20000);
    p.goodwill = dec!(10000);
    p.ppe_net = dec!(480000);
    p.revenue = dec!(700000);
    p.cost_of_revenue = dec!(364000);
    p.gross_profit = dec!(336000);
    p.operating_expenses = dec!(180000);
    p.operating_income = dec!(156000);
    p.ebitda = dec!(200000);
    p.ebit = dec!(172000);
    p.interest_expense = dec!(22000);
    p.income_before_tax = dec!(150000);
    p.income_tax = dec!(30000);
    p.net_income = dec!(120000);
    p.eps_diluted = dec!(3);
    p.operating_cash_flow = dec!(140000);
    p.investing_cash_flow = dec!(-45000);
    p.financing_cash_flow = dec!(-40000);
    p.free_cash_flow = dec!(95000);
    p.capex = dec!(45000);
    p.shares_outstanding = dec!(40000);
    p.dividends_paid = dec!(50000);
    p.share_buybacks = dec!(10000);
    p.market_price = Some(dec!(40));
    p.market_cap = Some(dec!(1600000));
    p.enterprise_value = Some(dec!(1810000));
    p.retained_earnings = Some(dec!(320000));
    p.depreciation_amortization = Some(dec!(28000));
    p.rd_expense = Some(dec!(35000));
    p.sga_expense = Some(dec!(90000));
    p.num_employees = Some(480);
    p
}
