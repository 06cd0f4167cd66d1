//! Sloan accruals: (net income − operating cash flow) / total assets.
//! Lower is higher-quality earnings.

use crate::arithmetic::divide_or_undefined;
use crate::period::FinancialPeriod;
use crate::types::MetricValue;

pub fn sloan_accruals(p: &FinancialPeriod) -> MetricValue {
    divide_or_undefined(p.net_income.checked_sub(p.operating_cash_flow)?, p.total_assets)
}
