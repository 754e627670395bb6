use doseplot::PlotError;
use doseplot::core::Viewport;
use doseplot::plot::PlotConfig;
use doseplot::render::Color;

#[test]
fn empty_json_object_yields_defaults() {
    let config = PlotConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, PlotConfig::default());
    assert_eq!(config.title, "Growth Model");
    assert_eq!(config.series_label, "Population of Cells");
    assert_eq!(config.marker_label, "Day of Chemo Dosage");
    assert!(config.mode_flags.normal);
    assert!(!config.mode_flags.loglog);
    assert!(!config.save);
    assert!(config.output_path.is_none());
}

#[test]
fn config_round_trips_through_json() {
    let config = PlotConfig::default()
        .with_viewport(Viewport::new(640, 480))
        .with_labels("Relapse Study", "t (Days)", "Burden")
        .with_marker_style(Color::rgb(0.5, 0.0, 0.5), 0.7, 1.2)
        .with_save_to("/tmp/out.pdf");

    let json = config.to_json_pretty().expect("serialize");
    let parsed = PlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn non_boolean_mode_flag_fails_with_boolean_type_error() {
    let err = PlotConfig::from_json_str(r#"{"mode_flags": {"loglog": "yes"}}"#)
        .expect_err("string is not a flag");
    match err {
        PlotError::InvalidArgument(message) => {
            assert!(message.contains("expected a bool"), "message: {message}");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn non_boolean_save_flag_fails_with_boolean_type_error() {
    let err = PlotConfig::from_json_str(r#"{"save": 1}"#).expect_err("number is not a flag");
    match err {
        PlotError::InvalidArgument(message) => {
            assert!(message.contains("expected a bool"), "message: {message}");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn validate_rejects_out_of_range_style_values() {
    let mut config = PlotConfig::default();
    config.marker_alpha = 1.5;
    assert!(matches!(
        config.validate(),
        Err(PlotError::InvalidArgument(_))
    ));

    let mut config = PlotConfig::default();
    config.marker_width = 0.0;
    assert!(matches!(
        config.validate(),
        Err(PlotError::InvalidArgument(_))
    ));

    let mut config = PlotConfig::default();
    config.line_color = Color::rgb(2.0, 0.0, 0.0);
    assert!(matches!(
        config.validate(),
        Err(PlotError::InvalidArgument(_))
    ));
}

#[test]
fn validate_rejects_save_without_output_path() {
    let mut config = PlotConfig::default();
    config.save = true;
    let err = config.validate().expect_err("missing path");
    match err {
        PlotError::InvalidArgument(message) => {
            assert!(message.contains("output path"), "message: {message}");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn validate_rejects_degenerate_viewport_and_margins() {
    let config = PlotConfig::default().with_viewport(Viewport::new(0, 600));
    assert!(matches!(
        config.validate(),
        Err(PlotError::InvalidViewport { .. })
    ));

    let mut config = PlotConfig::default().with_viewport(Viewport::new(80, 80));
    config.margins.left_px = 60.0;
    config.margins.right_px = 60.0;
    assert!(matches!(
        config.validate(),
        Err(PlotError::InvalidArgument(_))
    ));
}
