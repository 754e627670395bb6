#![cfg(feature = "cairo-backend")]

use doseplot::PlotError;
use doseplot::core::{PlotData, Series};
use doseplot::plot::{PlotConfig, render};
use doseplot::render::CairoRenderer;

fn sample_series() -> PlotData {
    let series = Series::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 4.0, 2.0, 8.0]).expect("series");
    PlotData::Single(series)
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidArgument(_)));
}

#[test]
fn cairo_renderer_draws_curve_markers_and_captions() {
    let mut renderer = CairoRenderer::new(960, 600).expect("renderer");
    let data = sample_series();
    let config = PlotConfig::default();

    render(&data, &[0.5, 1.5], &config, &mut renderer).expect("render");
    let stats = renderer.last_stats();

    // 3 curve segments + 2 markers + 4 border lines + tick marks + legend swatches.
    assert!(stats.lines_drawn >= 9);
    // Tick labels + title + two axis labels + legend labels.
    assert!(stats.texts_drawn >= 5);
}

#[test]
fn save_writes_one_pdf_at_the_configured_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("growth.pdf");

    let mut renderer = CairoRenderer::new(960, 600).expect("renderer");
    let data = sample_series();
    let config = PlotConfig::default().with_save_to(path.clone());

    render(&data, &[1.0], &config, &mut renderer).expect("render");

    let metadata = std::fs::metadata(&path).expect("pdf exists");
    assert!(metadata.len() > 0);
}

#[test]
fn no_file_is_written_without_the_save_flag() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut renderer = CairoRenderer::new(960, 600).expect("renderer");
    let data = sample_series();
    let config = PlotConfig::default();

    render(&data, &[1.0], &config, &mut renderer).expect("render");

    let leftover = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(leftover, 0);
}

#[test]
fn unwritable_export_path_surfaces_as_a_backend_error() {
    let mut renderer = CairoRenderer::new(960, 600).expect("renderer");
    let data = sample_series();
    let config = PlotConfig::default().with_save_to("/nonexistent-dir/growth.pdf");

    let err = render(&data, &[1.0], &config, &mut renderer).expect_err("bad path");
    assert!(matches!(err, PlotError::Backend { .. }));
}
