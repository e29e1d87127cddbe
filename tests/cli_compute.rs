mod common;

use common::TestEnv;

#[test]
fn test_single_year_projection() {
    let env = TestEnv::new();

    let result = env.run(&[
        "compute",
        "--cash-flows",
        "100",
        "--discount-rate",
        "0.10",
        "--growth-rate",
        "0.02",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stdout.contains("Estimated total DCF value: 1250.00 M€"),
        "got:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("1275.00"));
    assert!(result.stdout.contains("1159.09"));
}

#[test]
fn test_three_year_projection_table() {
    let env = TestEnv::new();

    let result = env.run(&[
        "compute",
        "--cash-flows",
        "100,110,121",
        "--discount-rate",
        "0.10",
        "--growth-rate",
        "0.02",
        "--unit",
        "k$",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    for expected in ["2025", "2026", "2027", "90.91", "1542.75", "TOTAL DCF", "1431.82"] {
        assert!(
            result.stdout.contains(expected),
            "missing {expected}; got:\n{}",
            result.stdout
        );
    }
    assert!(result.stdout.contains("Estimated total DCF value: 1431.82 k$"));
}

#[test]
fn test_defaults_produce_five_year_series() {
    let env = TestEnv::new();

    let result = env.run(&["compute"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    for year in 2025..=2029 {
        assert!(result.stdout.contains(&year.to_string()));
    }
    assert!(result.stdout.contains("140.00"));
    assert!(!result.stdout.contains("2030"));
}

#[test]
fn test_equal_rates_fail_with_fix_hint() {
    let env = TestEnv::new();

    let result = env.run(&[
        "compute",
        "--cash-flows",
        "100",
        "--discount-rate",
        "0.05",
        "--growth-rate",
        "0.05",
    ]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("equals growth rate"), "got:\n{}", result.stderr);
    assert!(result.stderr.contains("FIX:"));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_growth_above_discount_fails() {
    let env = TestEnv::new();

    let result = env.run(&["compute", "--discount-rate", "0.05", "--growth-rate", "0.08"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("exceeds discount rate"));
}

#[test]
fn test_negative_cash_flows_are_accepted() {
    let env = TestEnv::new();

    let result = env.run(&["compute", "--cash-flows", "-50,100"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("-50.00"));
}

#[test]
fn test_out_of_form_range_values_warn_but_compute() {
    let env = TestEnv::new();

    let result = env.run(&["compute", "--cash-flows", "100", "--discount-rate", "0.30"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("discount_rate = 0.3 is outside the accepted range"));
    assert!(result.stdout.contains("Estimated total DCF value"));
}

#[test]
fn test_years_conflicts_with_cash_flows() {
    let env = TestEnv::new();

    let result = env.run(&["compute", "--cash-flows", "100", "--years", "3"]);

    assert!(!result.success);
    assert!(result.stderr.contains("cannot be used with"));
}

#[test]
fn test_years_outside_form_range_fail() {
    let env = TestEnv::new();

    let result = env.run(&["compute", "--years", "11"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("years = 11 is outside the accepted range"),
        "got:\n{}",
        result.stderr
    );
    assert!(result.stdout.is_empty());

    let result = env.run(&["compute", "--years", "4000000000"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("outside the accepted range"));
}

#[test]
fn test_start_year_at_calendar_limit_fails_cleanly() {
    let env = TestEnv::new();

    let result = env.run(&["compute", "--start-year", "2147483647", "--cash-flows", "1,2"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("start_year"), "got:\n{}", result.stderr);
    assert!(!result.stderr.contains("panicked"));
}
