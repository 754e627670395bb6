use doseplot::core::{AxisScale, AxisTransform};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_axis_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let axis = AxisScale::new(domain_start, domain_end, AxisTransform::Linear)
            .expect("valid axis");
        let ratio = axis.value_to_ratio(value).expect("to ratio");
        let recovered = axis.ratio_to_value(ratio).expect("from ratio");

        let tolerance = f64::max(1e-7, value.abs() * 1e-9);
        prop_assert!((recovered - value).abs() <= tolerance);
    }

    #[test]
    fn log_axis_round_trip_property(
        start_exp in -6.0f64..6.0,
        span_exp in 0.01f64..6.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_start = 10_f64.powf(start_exp);
        let domain_end = 10_f64.powf(start_exp + span_exp);
        let value = 10_f64.powf(start_exp + value_factor * span_exp);

        let axis = AxisScale::new(domain_start, domain_end, AxisTransform::Log10)
            .expect("valid axis");
        let ratio = axis.value_to_ratio(value).expect("to ratio");
        let recovered = axis.ratio_to_value(ratio).expect("from ratio");

        prop_assert!((recovered - value).abs() <= value.abs() * 1e-9);
    }

    #[test]
    fn log_axis_rejects_non_positive_values_property(
        value in -1_000.0f64..=0.0
    ) {
        let axis = AxisScale::new(1.0, 100.0, AxisTransform::Log10).expect("valid axis");
        prop_assert!(axis.value_to_ratio(value).is_err());
    }
}
