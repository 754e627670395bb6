use std::borrow::Cow;

use tracing::{debug, trace};

use crate::core::{AxisScale, AxisTransform, PlotData, ScaleMode, validate_marks};
use crate::error::PlotResult;
use crate::plot::PlotConfig;
use crate::render::{
    Color, LegendEntry, LinePrimitive, LineStrokeStyle, RenderFrame, TextHAlign, TextOrientation,
    TextPrimitive,
};

const CURVE_STROKE_WIDTH_PX: f64 = 1.5;
const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const TICK_LENGTH_PX: f64 = 4.0;
const TICK_COUNT: usize = 6;
const TICK_FONT_SIZE_PX: f64 = 9.0;
const LABEL_FONT_SIZE_PX: f64 = 11.0;
const TITLE_FONT_SIZE_PX: f64 = 13.0;
const LEGEND_FONT_SIZE_PX: f64 = 9.0;
const LEGEND_SWATCH_LENGTH_PX: f64 = 18.0;
const LEGEND_ROW_HEIGHT_PX: f64 = 14.0;
const LEGEND_INSET_PX: f64 = 8.0;

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const TUMOR_FRACTION_COLOR: Color = Color::rgb(0.0, 0.0, 1.0);
const EFFECTOR_A_FRACTION_COLOR: Color = Color::rgb(0.0, 0.5, 0.0);
const EFFECTOR_B_FRACTION_COLOR: Color = Color::rgb(1.0, 0.55, 0.0);

/// What a successful render drew, for callers that assert the contract
/// without inspecting a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSummary {
    pub mode: ScaleMode,
    pub curves: usize,
    pub markers: usize,
    pub legend_entries: usize,
}

/// Plot area in pixel space, after margins are carved off the viewport.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn right(self) -> f64 {
        self.left + self.width
    }

    fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Maps a normalized axis ratio to pixel X.
    fn x_px(self, ratio: f64) -> f64 {
        self.left + ratio * self.width
    }

    /// Maps a normalized axis ratio to pixel Y (inverted: 1.0 is the top).
    fn y_px(self, ratio: f64) -> f64 {
        self.top + (1.0 - ratio) * self.height
    }
}

struct CurveSpec<'a> {
    label: String,
    color: Color,
    t_vals: &'a [f64],
    values: Cow<'a, [f64]>,
}

/// Validates inputs, resolves the scale mode, and materializes one
/// complete `RenderFrame`.
///
/// Any failure happens before the caller's renderer sees the frame, so a
/// render call never commits partial output.
pub fn build_frame(
    data: &PlotData,
    marks: &[f64],
    config: &PlotConfig,
) -> PlotResult<(RenderFrame, PlotSummary)> {
    config.validate()?;
    validate_marks(marks)?;
    let mode = ScaleMode::resolve(config.mode_flags)?;

    let curves = curve_specs(data, config)?;

    let x_transform = if mode.x_is_log() {
        AxisTransform::Log10
    } else {
        AxisTransform::Linear
    };
    let y_transform = if mode.y_is_log() {
        AxisTransform::Log10
    } else {
        AxisTransform::Linear
    };

    // Markers participate in the time-axis fit so every dosage line lands
    // inside the plot area.
    let mut x_values: Vec<f64> = Vec::new();
    let mut y_values: Vec<f64> = Vec::new();
    for curve in &curves {
        x_values.extend_from_slice(curve.t_vals);
        y_values.extend_from_slice(&curve.values);
    }
    x_values.extend_from_slice(marks);

    let x_axis = AxisScale::from_values(&x_values, x_transform)?;
    let y_axis = AxisScale::from_values(&y_values, y_transform)?;

    let area = PlotArea {
        left: config.margins.left_px,
        top: config.margins.top_px,
        width: f64::from(config.viewport.width) - config.margins.left_px - config.margins.right_px,
        height: f64::from(config.viewport.height)
            - config.margins.top_px
            - config.margins.bottom_px,
    };

    let mut frame = RenderFrame::new(config.viewport);

    draw_axes(&mut frame, area, x_axis, y_axis)?;

    for curve in &curves {
        trace!(label = %curve.label, points = curve.t_vals.len(), "projecting curve");
        draw_curve(&mut frame, area, x_axis, y_axis, curve)?;
        frame.push_legend(LegendEntry::new(
            curve.label.clone(),
            curve.color,
            LineStrokeStyle::Solid,
        ));
    }

    let marker_color = config.marker_color.with_alpha(config.marker_alpha);
    for (index, &mark) in marks.iter().enumerate() {
        let x = area.x_px(x_axis.value_to_ratio(mark)?);
        frame.push_line(
            LinePrimitive::new(
                x,
                area.top,
                x,
                area.bottom(),
                config.marker_width,
                marker_color,
            )
            .with_stroke_style(LineStrokeStyle::Dashed),
        );
        // Only the first marker carries the legend label; the rest stay
        // unlabeled.
        if index == 0 {
            frame.push_legend(LegendEntry::new(
                config.marker_label.clone(),
                marker_color,
                LineStrokeStyle::Dashed,
            ));
        }
    }

    draw_legend(&mut frame, area);
    draw_captions(&mut frame, area, config);

    let summary = PlotSummary {
        mode,
        curves: curves.len(),
        markers: marks.len(),
        legend_entries: frame.legend.len(),
    };
    debug!(
        ?mode,
        curves = summary.curves,
        markers = summary.markers,
        "built plot frame"
    );

    Ok((frame, summary))
}

fn curve_specs<'a>(data: &'a PlotData, config: &PlotConfig) -> PlotResult<Vec<CurveSpec<'a>>> {
    match data {
        PlotData::Single(series) => Ok(vec![CurveSpec {
            label: config.series_label.clone(),
            color: config.line_color,
            t_vals: series.t_vals(),
            values: Cow::Borrowed(series.sol_vals()),
        }]),
        PlotData::Composite(bundle) => {
            let fractions = bundle.fractions()?;
            Ok(vec![
                CurveSpec {
                    label: "Tumor Fraction".to_owned(),
                    color: TUMOR_FRACTION_COLOR,
                    t_vals: bundle.t_vals(),
                    values: Cow::Owned(fractions.tumor),
                },
                CurveSpec {
                    label: "Effector-A Fraction".to_owned(),
                    color: EFFECTOR_A_FRACTION_COLOR,
                    t_vals: bundle.t_vals(),
                    values: Cow::Owned(fractions.effector_a),
                },
                CurveSpec {
                    label: "Effector-B Fraction".to_owned(),
                    color: EFFECTOR_B_FRACTION_COLOR,
                    t_vals: bundle.t_vals(),
                    values: Cow::Owned(fractions.effector_b),
                },
            ])
        }
    }
}

fn draw_axes(
    frame: &mut RenderFrame,
    area: PlotArea,
    x_axis: AxisScale,
    y_axis: AxisScale,
) -> PlotResult<()> {
    let border = [
        (area.left, area.top, area.right(), area.top),
        (area.left, area.bottom(), area.right(), area.bottom()),
        (area.left, area.top, area.left, area.bottom()),
        (area.right(), area.top, area.right(), area.bottom()),
    ];
    for (x1, y1, x2, y2) in border {
        frame.push_line(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            AXIS_STROKE_WIDTH_PX,
            AXIS_COLOR,
        ));
    }

    for tick in x_axis.ticks(TICK_COUNT)? {
        let x = area.x_px(x_axis.value_to_ratio(tick)?);
        frame.push_line(LinePrimitive::new(
            x,
            area.bottom(),
            x,
            area.bottom() + TICK_LENGTH_PX,
            AXIS_STROKE_WIDTH_PX,
            AXIS_COLOR,
        ));
        frame.push_text(TextPrimitive::new(
            format_tick(tick),
            x,
            area.bottom() + TICK_LENGTH_PX + 2.0,
            TICK_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }

    for tick in y_axis.ticks(TICK_COUNT)? {
        let y = area.y_px(y_axis.value_to_ratio(tick)?);
        frame.push_line(LinePrimitive::new(
            area.left - TICK_LENGTH_PX,
            y,
            area.left,
            y,
            AXIS_STROKE_WIDTH_PX,
            AXIS_COLOR,
        ));
        frame.push_text(TextPrimitive::new(
            format_tick(tick),
            area.left - TICK_LENGTH_PX - 3.0,
            y - TICK_FONT_SIZE_PX / 2.0,
            TICK_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }

    Ok(())
}

fn draw_curve(
    frame: &mut RenderFrame,
    area: PlotArea,
    x_axis: AxisScale,
    y_axis: AxisScale,
    curve: &CurveSpec<'_>,
) -> PlotResult<()> {
    let mut mapped = Vec::with_capacity(curve.t_vals.len());
    for (&t, &value) in curve.t_vals.iter().zip(curve.values.iter()) {
        let x = area.x_px(x_axis.value_to_ratio(t)?);
        let y = area.y_px(y_axis.value_to_ratio(value)?);
        mapped.push((x, y));
    }

    for pair in mapped.windows(2) {
        frame.push_line(LinePrimitive::new(
            pair[0].0,
            pair[0].1,
            pair[1].0,
            pair[1].1,
            CURVE_STROKE_WIDTH_PX,
            curve.color,
        ));
    }

    Ok(())
}

fn draw_legend(frame: &mut RenderFrame, area: PlotArea) {
    let x0 = area.left + LEGEND_INSET_PX;
    let mut y = area.top + LEGEND_INSET_PX;

    let entries = frame.legend.clone();
    for entry in &entries {
        let mid = y + LEGEND_ROW_HEIGHT_PX / 2.0;
        frame.push_line(
            LinePrimitive::new(
                x0,
                mid,
                x0 + LEGEND_SWATCH_LENGTH_PX,
                mid,
                CURVE_STROKE_WIDTH_PX,
                entry.color,
            )
            .with_stroke_style(entry.stroke_style),
        );
        frame.push_text(TextPrimitive::new(
            entry.label.clone(),
            x0 + LEGEND_SWATCH_LENGTH_PX + 4.0,
            y + (LEGEND_ROW_HEIGHT_PX - LEGEND_FONT_SIZE_PX) / 2.0,
            LEGEND_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Left,
        ));
        y += LEGEND_ROW_HEIGHT_PX;
    }
}

fn draw_captions(frame: &mut RenderFrame, area: PlotArea, config: &PlotConfig) {
    if !config.title.is_empty() {
        frame.push_text(TextPrimitive::new(
            config.title.clone(),
            area.left + area.width / 2.0,
            ((area.top - TITLE_FONT_SIZE_PX) / 2.0).max(2.0),
            TITLE_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }

    if !config.x_label.is_empty() {
        frame.push_text(TextPrimitive::new(
            config.x_label.clone(),
            area.left + area.width / 2.0,
            area.bottom() + TICK_LENGTH_PX + TICK_FONT_SIZE_PX + 8.0,
            LABEL_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }

    if !config.y_label.is_empty() {
        frame.push_text(
            TextPrimitive::new(
                config.y_label.clone(),
                14.0,
                area.top + area.height / 2.0,
                LABEL_FONT_SIZE_PX,
                AXIS_COLOR,
                TextHAlign::Center,
            )
            .with_orientation(TextOrientation::VerticalUp),
        );
    }
}

fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if magnitude >= 100_000.0 || magnitude < 0.001 {
        format!("{value:.1e}")
    } else {
        let formatted = format!("{value:.3}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    }
}
