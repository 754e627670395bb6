use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Axis scaling applied to a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Linear spacing on both axes.
    #[default]
    Linear,
    /// Log10 spacing on both axes.
    LogLog,
    /// Log10 spacing on the value axis, linear time axis.
    SemilogY,
    /// Log10 spacing on the time axis, linear value axis.
    SemilogX,
}

/// Caller-facing boolean mode selection.
///
/// The four flags mirror the keyword-style API this crate exposes over
/// JSON configs. They are resolved into a single [`ScaleMode`] exactly
/// once, at the render boundary; nothing downstream branches on booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleModeFlags {
    /// Plain linear plot. Defaults to true, like the other flags default
    /// to false, so an empty config resolves to [`ScaleMode::Linear`].
    #[serde(default = "default_normal")]
    pub normal: bool,
    #[serde(default)]
    pub loglog: bool,
    #[serde(default)]
    pub semilogy: bool,
    #[serde(default)]
    pub semilogx: bool,
}

impl Default for ScaleModeFlags {
    fn default() -> Self {
        Self {
            normal: true,
            loglog: false,
            semilogy: false,
            semilogx: false,
        }
    }
}

impl ScaleMode {
    /// Resolves boolean flags into one mode.
    ///
    /// Precedence is `loglog > semilogy > semilogx > normal`: a higher
    /// flag disables every lower one for the call. When no flag survives
    /// the selection is degenerate and the call fails, naming the flags.
    pub fn resolve(flags: ScaleModeFlags) -> PlotResult<Self> {
        if flags.loglog {
            return Ok(Self::LogLog);
        }
        if flags.semilogy {
            return Ok(Self::SemilogY);
        }
        if flags.semilogx {
            return Ok(Self::SemilogX);
        }
        if flags.normal {
            return Ok(Self::Linear);
        }

        Err(PlotError::InvalidArgument(format!(
            "no scale mode selected: normal={} loglog={} semilogy={} semilogx={}",
            flags.normal, flags.loglog, flags.semilogy, flags.semilogx
        )))
    }

    /// Whether the time axis is log-spaced in this mode.
    #[must_use]
    pub fn x_is_log(self) -> bool {
        matches!(self, Self::LogLog | Self::SemilogX)
    }

    /// Whether the value axis is log-spaced in this mode.
    #[must_use]
    pub fn y_is_log(self) -> bool {
        matches!(self, Self::LogLog | Self::SemilogY)
    }
}

fn default_normal() -> bool {
    true
}
