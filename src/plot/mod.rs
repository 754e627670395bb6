mod config;
mod scene;

pub use config::{PlotConfig, PlotMargins};
pub use scene::{PlotSummary, build_frame};

use tracing::debug;

use crate::core::PlotData;
use crate::error::{PlotError, PlotResult};
use crate::render::{Renderer, VectorExport};

/// Renders one chart through an explicit backend handle.
///
/// The call is atomic: validation and scene construction happen before the
/// renderer is touched, the display pass happens before any file export,
/// and backend failures surface unchanged. No state survives the call.
pub fn render<R>(
    data: &PlotData,
    marks: &[f64],
    config: &PlotConfig,
    renderer: &mut R,
) -> PlotResult<PlotSummary>
where
    R: Renderer + VectorExport,
{
    let (frame, summary) = build_frame(data, marks, config)?;

    renderer.render(&frame)?;

    if config.save {
        let path = config.output_path.as_ref().ok_or_else(|| {
            PlotError::InvalidArgument("save requested without an output path".to_owned())
        })?;
        renderer.export_vector(&frame, path)?;
        debug!(path = %path.display(), "exported plot");
    }

    Ok(summary)
}
