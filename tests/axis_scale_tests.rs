use approx::assert_relative_eq;
use doseplot::PlotError;
use doseplot::core::{AxisScale, AxisTransform};

#[test]
fn linear_ticks_are_evenly_spaced_over_the_domain() {
    let axis = AxisScale::new(0.0, 10.0, AxisTransform::Linear).expect("axis");
    let ticks = axis.ticks(6).expect("ticks");
    assert_eq!(ticks.len(), 6);
    for (index, tick) in ticks.iter().enumerate() {
        assert_relative_eq!(*tick, 2.0 * index as f64, epsilon = 1e-9);
    }
}

#[test]
fn log_ticks_walk_the_decade_ladder() {
    let axis = AxisScale::new(1.0, 100.0, AxisTransform::Log10).expect("axis");
    let ticks = axis.ticks(10).expect("ticks");
    assert_eq!(ticks, vec![1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0]);
}

#[test]
fn log_ticks_resample_down_to_the_requested_count() {
    let axis = AxisScale::new(1.0, 1e6, AxisTransform::Log10).expect("axis");
    let ticks = axis.ticks(6).expect("ticks");
    assert!(ticks.len() <= 6);
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn log_axis_rejects_non_positive_domain() {
    let err = AxisScale::new(-1.0, 10.0, AxisTransform::Log10).expect_err("negative");
    match err {
        PlotError::InvalidArgument(message) => {
            assert!(message.contains("log axis"), "message: {message}");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }

    assert!(AxisScale::from_values(&[0.0, 1.0], AxisTransform::Log10).is_err());
}

#[test]
fn fitted_axis_pads_beyond_the_data_extent() {
    let axis = AxisScale::from_values(&[10.0, 20.0, 30.0], AxisTransform::Linear).expect("axis");
    let (min, max) = axis.domain();
    assert!(min < 10.0);
    assert!(max > 30.0);
}

#[test]
fn constant_data_still_produces_a_usable_axis() {
    let axis = AxisScale::from_values(&[5.0, 5.0, 5.0], AxisTransform::Linear).expect("axis");
    let (min, max) = axis.domain();
    assert!(min < max);

    let ratio = axis.value_to_ratio(5.0).expect("ratio");
    assert!((0.0..=1.0).contains(&ratio));
}

#[test]
fn fitting_rejects_empty_and_non_finite_data() {
    assert!(AxisScale::from_values(&[], AxisTransform::Linear).is_err());
    assert!(AxisScale::from_values(&[1.0, f64::NAN], AxisTransform::Linear).is_err());
    assert!(AxisScale::from_values(&[1.0, f64::INFINITY], AxisTransform::Linear).is_err());
}

#[test]
fn ratio_mapping_round_trips_in_both_transforms() {
    let linear = AxisScale::new(-50.0, 150.0, AxisTransform::Linear).expect("axis");
    let ratio = linear.value_to_ratio(25.0).expect("ratio");
    assert_relative_eq!(linear.ratio_to_value(ratio).expect("value"), 25.0);

    let log = AxisScale::new(0.1, 1000.0, AxisTransform::Log10).expect("axis");
    let ratio = log.value_to_ratio(10.0).expect("ratio");
    assert_relative_eq!(log.ratio_to_value(ratio).expect("value"), 10.0, epsilon = 1e-9);
}

#[test]
fn log_spacing_is_uniform_per_decade() {
    let axis = AxisScale::new(1.0, 1000.0, AxisTransform::Log10).expect("axis");
    let r1 = axis.value_to_ratio(1.0).expect("ratio");
    let r10 = axis.value_to_ratio(10.0).expect("ratio");
    let r100 = axis.value_to_ratio(100.0).expect("ratio");
    assert_relative_eq!(r10 - r1, r100 - r10, epsilon = 1e-12);
}
