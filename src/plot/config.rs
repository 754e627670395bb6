use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{ScaleModeFlags, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Pixel insets reserved around the plot area for title, axis labels, and
/// tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left_px: f64,
    pub right_px: f64,
    pub top_px: f64,
    pub bottom_px: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left_px: 70.0,
            right_px: 20.0,
            top_px: 40.0,
            bottom_px: 50.0,
        }
    }
}

impl PlotMargins {
    pub fn validate(self, viewport: Viewport) -> PlotResult<()> {
        for (value, name) in [
            (self.left_px, "left_px"),
            (self.right_px, "right_px"),
            (self.top_px, "top_px"),
            (self.bottom_px, "bottom_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidArgument(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }

        let plot_width = f64::from(viewport.width) - self.left_px - self.right_px;
        let plot_height = f64::from(viewport.height) - self.top_px - self.bottom_px;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(PlotError::InvalidArgument(
                "margins leave no plot area inside the viewport".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Render configuration for one plot call.
///
/// The type is serializable so host applications can persist/load plot
/// setup without inventing their own ad-hoc format. The JSON boundary is
/// also where flag types are enforced: a config supplying a string where a
/// boolean mode flag belongs fails `from_json_str` with an
/// `InvalidArgument` whose message names the expected boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_marker_color")]
    pub marker_color: Color,
    #[serde(default = "default_marker_alpha")]
    pub marker_alpha: f64,
    #[serde(default = "default_marker_width")]
    pub marker_width: f64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_series_label")]
    pub series_label: String,
    #[serde(default = "default_marker_label")]
    pub marker_label: String,
    #[serde(default)]
    pub mode_flags: ScaleModeFlags,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default)]
    pub save: bool,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            line_color: default_line_color(),
            marker_color: default_marker_color(),
            marker_alpha: default_marker_alpha(),
            marker_width: default_marker_width(),
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            series_label: default_series_label(),
            marker_label: default_marker_label(),
            mode_flags: ScaleModeFlags::default(),
            margins: PlotMargins::default(),
            save: false,
            output_path: None,
        }
    }
}

impl PlotConfig {
    /// Sets viewport size in pixels.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the primary curve color.
    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Sets color, transparency, and width of the dosage marker lines.
    #[must_use]
    pub fn with_marker_style(mut self, color: Color, alpha: f64, width: f64) -> Self {
        self.marker_color = color;
        self.marker_alpha = alpha;
        self.marker_width = width;
        self
    }

    /// Sets title and axis labels.
    #[must_use]
    pub fn with_labels(
        mut self,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Sets the legend label used for the primary curve.
    #[must_use]
    pub fn with_series_label(mut self, label: impl Into<String>) -> Self {
        self.series_label = label.into();
        self
    }

    /// Sets the legend label carried by the first marker line.
    #[must_use]
    pub fn with_marker_label(mut self, label: impl Into<String>) -> Self {
        self.marker_label = label.into();
        self
    }

    /// Sets the boolean scale-mode selection resolved at render time.
    #[must_use]
    pub fn with_mode_flags(mut self, flags: ScaleModeFlags) -> Self {
        self.mode_flags = flags;
        self
    }

    /// Requests PDF export to `path` after a successful render.
    #[must_use]
    pub fn with_save_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.save = true;
        self.output_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.line_color.validate()?;
        self.marker_color.validate()?;
        if !self.marker_alpha.is_finite() || !(0.0..=1.0).contains(&self.marker_alpha) {
            return Err(PlotError::InvalidArgument(
                "marker alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.marker_width.is_finite() || self.marker_width <= 0.0 {
            return Err(PlotError::InvalidArgument(
                "marker width must be finite and > 0".to_owned(),
            ));
        }
        self.margins.validate(self.viewport)?;
        if self.save && self.output_path.is_none() {
            return Err(PlotError::InvalidArgument(
                "save requested without an output path".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidArgument(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidArgument(format!("failed to parse config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(960, 600)
}

fn default_line_color() -> Color {
    Color::rgb(0.0, 0.0, 1.0)
}

fn default_marker_color() -> Color {
    Color::rgb(1.0, 0.0, 0.0)
}

fn default_marker_alpha() -> f64 {
    1.0
}

fn default_marker_width() -> f64 {
    0.8
}

fn default_title() -> String {
    "Growth Model".to_owned()
}

fn default_x_label() -> String {
    "t (Days)".to_owned()
}

fn default_y_label() -> String {
    "T (Tumor Burden)".to_owned()
}

fn default_series_label() -> String {
    "Population of Cells".to_owned()
}

fn default_marker_label() -> String {
    "Day of Chemo Dosage".to_owned()
}
