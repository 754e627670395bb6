use approx::assert_relative_eq;
use doseplot::PlotError;
use doseplot::core::{CompositeBundle, PlotData};
use doseplot::plot::{PlotConfig, build_frame, render};
use doseplot::render::NullRenderer;

#[test]
fn fractions_divide_each_population_by_the_per_index_total() {
    let bundle = CompositeBundle::new(
        vec![0.0, 1.0],
        vec![1.0, 2.0],
        vec![1.0, 1.0],
        vec![2.0, 1.0],
    )
    .expect("bundle");

    let fractions = bundle.fractions().expect("fractions");
    assert_relative_eq!(fractions.tumor[0], 0.25);
    assert_relative_eq!(fractions.tumor[1], 0.5);
    assert_relative_eq!(fractions.effector_a[0], 0.25);
    assert_relative_eq!(fractions.effector_b[0], 0.5);
}

#[test]
fn fractions_sum_to_one_at_every_index() {
    let bundle = CompositeBundle::new(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![5.0, 3.0, 2.5, 9.0],
        vec![1.0, 2.0, 0.5, 0.25],
        vec![4.0, 7.0, 1.0, 2.75],
    )
    .expect("bundle");

    let fractions = bundle.fractions().expect("fractions");
    for index in 0..4 {
        let sum =
            fractions.tumor[index] + fractions.effector_a[index] + fractions.effector_b[index];
        assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn zero_population_total_is_rejected_with_its_index() {
    let bundle = CompositeBundle::new(
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![2.0, 0.0],
    )
    .expect("bundle");

    let err = bundle.fractions().expect_err("zero total");
    match err {
        PlotError::InvalidArgument(message) => {
            assert!(message.contains("index 1"), "message: {message}");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn bundle_rejects_length_mismatch_and_empty_axes() {
    let err = CompositeBundle::new(vec![], vec![], vec![], vec![]).expect_err("empty");
    assert!(matches!(err, PlotError::InvalidArgument(_)));

    let err = CompositeBundle::new(
        vec![0.0, 1.0],
        vec![1.0, 2.0],
        vec![1.0],
        vec![2.0, 1.0],
    )
    .expect_err("mismatch");
    match err {
        PlotError::InvalidArgument(message) => {
            assert!(message.contains("effector-a"), "message: {message}");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn composite_render_draws_three_labeled_fraction_curves() {
    let bundle = CompositeBundle::new(
        vec![0.0, 1.0, 2.0],
        vec![1.0, 2.0, 4.0],
        vec![1.0, 1.0, 1.0],
        vec![2.0, 1.0, 3.0],
    )
    .expect("bundle");
    let data = PlotData::Composite(bundle);
    let config = PlotConfig::default();
    let mut renderer = NullRenderer::default();

    let summary = render(&data, &[0.5, 1.5], &config, &mut renderer).expect("render");
    assert_eq!(summary.curves, 3);
    assert_eq!(summary.markers, 2);
    assert_eq!(summary.legend_entries, 4);
    assert_eq!(renderer.render_calls, 1);

    let (frame, _) = build_frame(&data, &[0.5, 1.5], &config).expect("frame");
    let labels: Vec<&str> = frame
        .legend
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert!(labels.contains(&"Tumor Fraction"));
    assert!(labels.contains(&"Effector-A Fraction"));
    assert!(labels.contains(&"Effector-B Fraction"));
}

#[test]
fn composite_render_fails_fast_on_a_zero_total() {
    let bundle = CompositeBundle::new(
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
    )
    .expect("bundle");
    let data = PlotData::Composite(bundle);
    let mut renderer = NullRenderer::default();

    let err = render(&data, &[0.5], &PlotConfig::default(), &mut renderer).expect_err("zero");
    assert!(matches!(err, PlotError::InvalidArgument(_)));
    assert_eq!(renderer.render_calls, 0);
}
