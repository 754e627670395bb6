pub mod axis;
pub mod mode;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{AxisScale, AxisTransform, AxisTuning};
pub use mode::{ScaleMode, ScaleModeFlags};
pub use scale::LinearScale;
pub use series::{CompositeBundle, CompositeFractions, PlotData, Series, validate_marks};
pub use types::Viewport;
