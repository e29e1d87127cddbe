//! Property tests for the DCF calculator.

use proptest::prelude::*;

use dcfcalc::{compute, DcfError, ReportRow};

fn cash_flows() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1_000.0..10_000.0f64, 1..=12)
}

/// Discount and growth rates with `growth < discount` and a usable spread.
fn rates() -> impl Strategy<Value = (f64, f64)> {
    (0.01..0.30f64, 0.005..0.25f64).prop_map(|(r, spread)| (r, r - spread))
}

fn relative_close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The total equals the closed-form DCF sum.
    #[test]
    fn property_total_matches_closed_form(
        flows in cash_flows(),
        (r, g) in rates(),
        start_year in 1900..2200i32,
    ) {
        let report = compute(&flows, r, g, start_year).unwrap();

        let n = flows.len();
        let explicit: f64 = flows
            .iter()
            .enumerate()
            .map(|(i, cf)| cf / (1.0 + r).powf((i + 1) as f64))
            .sum();
        let tv = flows[n - 1] * (1.0 + g) / (r - g);
        let expected = explicit + tv / (1.0 + r).powf(n as f64);

        prop_assert!(relative_close(report.total(), expected),
            "total {} != {}", report.total(), expected);
        prop_assert!(relative_close(report.terminal_value().value, tv));
    }

    /// PROPERTY: The report has one row per year plus terminal value and total,
    /// with consecutive years starting at `start_year`.
    #[test]
    fn property_rows_cover_every_year(
        flows in cash_flows(),
        (r, g) in rates(),
        start_year in 1900..2200i32,
    ) {
        let report = compute(&flows, r, g, start_year).unwrap();
        let rows = report.rows();

        prop_assert_eq!(rows.len(), flows.len() + 2);
        for (i, year) in report.years().iter().enumerate() {
            prop_assert_eq!(year.year, start_year + i as i32);
            prop_assert_eq!(year.cash_flow, flows[i]);
        }
        let is_tv = matches!(rows[flows.len()], ReportRow::TerminalValue(_));
        let is_total = matches!(rows[flows.len() + 1], ReportRow::Total { .. });
        prop_assert!(is_tv);
        prop_assert!(is_total);
    }

    /// PROPERTY: Computing twice yields identical reports.
    #[test]
    fn property_compute_is_deterministic(flows in cash_flows(), (r, g) in rates()) {
        let first = compute(&flows, r, g, 2025).unwrap();
        let second = compute(&flows, r, g, 2025).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Growth at or above the discount rate is always rejected.
    #[test]
    fn property_growth_not_below_discount_fails(
        flows in cash_flows(),
        r in 0.0..0.3f64,
        excess in 0.0..0.2f64,
    ) {
        let err = compute(&flows, r, r + excess, 2025).unwrap_err();
        let rejected = matches!(
            err,
            DcfError::RatesEqual { .. } | DcfError::GrowthExceedsDiscount { .. }
        );
        prop_assert!(rejected, "unexpected error: {err}");
    }
}
