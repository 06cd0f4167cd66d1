use chrono::NaiveDate;
use fin_health_core::scores::{
    altman_z_score, beneish_indices, beneish_m_score, ohlson_o_score, piotroski_f_score,
    sloan_accruals, zmijewski_score,
};
use fin_health_core::types::PeriodType;
use fin_health_core::FinancialPeriod;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn period(year: i32) -> FinancialPeriod {
    let mut p = FinancialPeriod::new(
        "SCORE",
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        PeriodType::Yearly,
    );
    p.total_assets = dec!(500000);
    p.total_liabilities = dec!(300000);
    p.total_equity = dec!(200000);
    p.current_assets = dec!(150000);
    p.current_liabilities = dec!(100000);
    p.receivables = dec!(40000);
    p.long_term_debt = dec!(120000);
    p.ppe_net = dec!(250000);
    p.revenue = dec!(400000);
    p.gross_profit = dec!(160000);
    p.operating_expenses = dec!(90000);
    p.ebit = dec!(70000);
    p.net_income = dec!(45000);
    p.operating_cash_flow = dec!(60000);
    p.shares_outstanding = dec!(10000);
    p
}

fn zeroed(year: i32) -> FinancialPeriod {
    FinancialPeriod::new(
        "ZERO",
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        PeriodType::Yearly,
    )
}

// ===========================================================================
// Piotroski
// ===========================================================================

#[test]
fn test_piotroski_bounded_for_degenerate_pairs() {
    let pairs = [
        (zeroed(2024), zeroed(2023)),
        (period(2024), zeroed(2023)),
        (zeroed(2024), period(2023)),
        (period(2024), period(2023)),
    ];
    for (current, previous) in &pairs {
        let score = piotroski_f_score(current, previous);
        assert!(score <= 9, "score {score} out of range");
    }
}

#[test]
fn test_piotroski_unchanged_company() {
    // Identical periods: only level signals and "no dilution" can pass.
    let p = period(2024);
    // positive ROA, positive OCF, NI < OCF, shares not increased
    assert_eq!(piotroski_f_score(&p, &p), 4);
}

#[test]
fn test_piotroski_zero_previous_assets_skips_roa_change() {
    let current = period(2024);
    let mut previous = period(2023);
    previous.total_assets = Decimal::ZERO;
    previous.net_income = dec!(-1000);
    let score = piotroski_f_score(&current, &previous);
    assert!(score <= 9);
}

// ===========================================================================
// Beneish
// ===========================================================================

#[test]
fn test_beneish_previous_without_revenue_is_defined() {
    let current = period(2024);
    let mut previous = period(2023);
    previous.revenue = Decimal::ZERO;
    previous.gross_profit = Decimal::ZERO;

    let idx = beneish_indices(&current, &previous).unwrap();
    assert_eq!(idx.dsri, Decimal::ONE);
    assert_eq!(idx.gmi, Decimal::ONE);
    assert!(beneish_m_score(&current, &previous).is_some());
}

#[test]
fn test_beneish_current_without_revenue_zeroes_sales_indices() {
    let mut current = period(2024);
    current.revenue = Decimal::ZERO;
    let previous = period(2023);

    let idx = beneish_indices(&current, &previous).unwrap();
    assert_eq!(idx.dsri, Decimal::ZERO);
    assert_eq!(idx.sgai, Decimal::ZERO);
    assert_eq!(idx.sgi, Decimal::ZERO);
    assert!(beneish_m_score(&current, &previous).is_some());
}

#[test]
fn test_beneish_unchanged_company_is_neutral_apart_from_accruals() {
    let p = period(2024);
    let idx = beneish_indices(&p, &p).unwrap();
    assert_eq!(idx.dsri, Decimal::ONE);
    assert_eq!(idx.gmi, Decimal::ONE);
    assert_eq!(idx.sgi, Decimal::ONE);
    assert_eq!(idx.sgai, Decimal::ONE);
    // No D&A reported: the depreciation rate is zero on both sides.
    assert_eq!(idx.depi, Decimal::ONE);
    // -4.84 + 0.920 + 0.528 + 0.404 + 0.892 + 0.115 - 0.172 - 0.327 + 4.679 × TATA
    let tata = dec!(-60000) / dec!(500000);
    let expected = dec!(-2.48) + dec!(4.679) * tata;
    let m = beneish_m_score(&p, &p).unwrap();
    assert!((m - expected).abs() < dec!(0.0000001));
}

// ===========================================================================
// Single-period scores
// ===========================================================================

#[test]
fn test_single_period_scores_undefined_without_assets() {
    let p = zeroed(2024);
    assert_eq!(altman_z_score(&p), None);
    assert_eq!(ohlson_o_score(&p), None);
    assert_eq!(zmijewski_score(&p), None);
    assert_eq!(sloan_accruals(&p), None);
}

#[test]
fn test_altman_known_value() {
    let mut p = period(2024);
    p.retained_earnings = Some(dec!(100000));
    // 1.2(0.1) + 1.4(0.2) + 3.3(0.14) + 0.6(2/3) + 1.0(0.8)
    let z = altman_z_score(&p).unwrap();
    assert!((z - dec!(2.062)).abs() < dec!(0.0001));
}

#[test]
fn test_zmijewski_zero_current_liabilities() {
    let mut p = period(2024);
    p.current_liabilities = Decimal::ZERO;
    // -4.3 - 4.5(0.09) + 5.7(0.6)
    assert_eq!(zmijewski_score(&p), Some(dec!(-1.285)));
}

#[test]
fn test_ohlson_negative_equity_flag_offsets_leverage() {
    let healthy = period(2024);
    let mut stretched = period(2024);
    stretched.total_liabilities = dec!(500001);
    // OENEG switches on and offsets most of the extra leverage term.
    let a = ohlson_o_score(&healthy).unwrap();
    let b = ohlson_o_score(&stretched).unwrap();
    assert!(b - a < dec!(6.03) * dec!(200001) / dec!(500000));
}
