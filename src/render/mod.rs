mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LegendEntry, LinePrimitive, LineStrokeStyle, TextHAlign, TextOrientation, TextPrimitive,
};

use std::path::Path;

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain logic. A renderer handle
/// is the only rendering surface a call touches; there is no process-wide
/// current-figure state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

/// Extension contract for backends that can persist a frame as a
/// vector-graphics file.
pub trait VectorExport {
    fn export_vector(&mut self, frame: &RenderFrame, path: &Path) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
