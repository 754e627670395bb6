use std::path::{Path, PathBuf};

use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer, VectorExport};

/// No-op renderer used by tests and headless callers.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced, and it records export requests so
/// the save contract can be asserted without touching the filesystem.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_legend_count: usize,
    pub last_export_path: Option<PathBuf>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.render_calls += 1;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_legend_count = frame.legend.len();
        Ok(())
    }
}

impl VectorExport for NullRenderer {
    fn export_vector(&mut self, frame: &RenderFrame, path: &Path) -> PlotResult<()> {
        frame.validate()?;
        self.last_export_path = Some(path.to_path_buf());
        Ok(())
    }
}
