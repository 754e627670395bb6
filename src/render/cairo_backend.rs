use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, PdfSurface};
use pango::FontDescription;

use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, LineStrokeStyle, RenderFrame, Renderer, TextHAlign, TextOrientation, VectorExport,
};

const DASH_PATTERN: [f64; 2] = [6.0, 3.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two output paths:
/// - offscreen image-surface rendering through `Renderer::render`
/// - vector PDF export through `VectorExport::export_vector`, replaying the
///   same frame onto a `PdfSurface` at the requested path
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidArgument(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| PlotError::backend("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| PlotError::backend("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            match line.stroke_style {
                LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
                LineStrokeStyle::Dashed => context.set_dash(&DASH_PATTERN, 0.0),
            }
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| PlotError::backend("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let align_offset = match text.h_align {
                TextHAlign::Left => 0.0,
                TextHAlign::Center => -f64::from(text_width) / 2.0,
                TextHAlign::Right => -f64::from(text_width),
            };

            apply_color(context, text.color);
            match text.orientation {
                TextOrientation::Horizontal => {
                    context.move_to(text.x + align_offset, text.y);
                    pangocairo::functions::show_layout(context, &layout);
                }
                TextOrientation::VerticalUp => {
                    context
                        .save()
                        .map_err(|err| PlotError::backend("failed to save cairo state", err))?;
                    context.translate(text.x, text.y);
                    context.rotate(-FRAC_PI_2);
                    context.move_to(align_offset, 0.0);
                    pangocairo::functions::show_layout(context, &layout);
                    context
                        .restore()
                        .map_err(|err| PlotError::backend("failed to restore cairo state", err))?;
                }
            }
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| PlotError::backend("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl VectorExport for CairoRenderer {
    fn export_vector(&mut self, frame: &RenderFrame, path: &Path) -> PlotResult<()> {
        let surface = PdfSurface::new(
            f64::from(frame.viewport.width),
            f64::from(frame.viewport.height),
            path,
        )
        .map_err(|err| PlotError::backend("failed to create pdf surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| PlotError::backend("failed to create pdf context", err))?;

        self.render_with_context(&context, frame)?;

        surface.finish();
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}
