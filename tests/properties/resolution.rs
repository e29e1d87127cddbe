//! Property tests for input resolution.

use proptest::prelude::*;

use dcfcalc::config::DefaultsConfig;
use dcfcalc::{ValuationInputs, ValuationRequest};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Without explicit cash flows the default series is 100 + 10*i.
    #[test]
    fn property_default_series_is_linear(years in 1u32..=10) {
        let inputs = ValuationInputs::new().with_years(Some(years));
        let request = ValuationRequest::resolve(&inputs, &DefaultsConfig::default()).unwrap();

        let flows = request.projection.as_slice();
        prop_assert_eq!(flows.len(), years as usize);
        for (i, cf) in flows.iter().enumerate() {
            prop_assert_eq!(*cf, 100.0 + 10.0 * i as f64);
        }
    }

    /// PROPERTY: Explicit inputs always win over config defaults.
    #[test]
    fn property_explicit_inputs_win(
        start_year in 2000..2100i32,
        r in 0.05..0.20f64,
        g in 0.0..0.04f64,
    ) {
        let inputs = ValuationInputs::new()
            .with_start_year(Some(start_year))
            .with_discount_rate(Some(r))
            .with_growth_rate(Some(g))
            .with_cash_flows(Some(vec![1.0]));
        let request = ValuationRequest::resolve(&inputs, &DefaultsConfig::default()).unwrap();

        prop_assert_eq!(request.params.start_year, start_year);
        prop_assert_eq!(request.params.discount_rate, r);
        prop_assert_eq!(request.params.growth_rate, g);
        prop_assert!(request.out_of_range().is_empty());
    }
}
