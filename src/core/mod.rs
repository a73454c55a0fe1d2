pub mod curve;
pub mod layout;
pub mod measure;
pub mod selection;
pub mod style;
pub mod types;
pub mod value_label;

pub use curve::{PathCommand, PathCommands, build_path};
pub use layout::{
    ChartLayout, PlotArea, ProjectedPoint, ValueLabelPlacement, XAxisLabel, YAxisLabel,
    compute_layout,
};
pub use measure::{HeadlessTextMeasurer, TextMeasurer, TextMetrics};
pub use selection::selected_index;
pub use style::ChartStyle;
pub use types::{CanvasSize, DataPoint, VisibleRange};
pub use value_label::ValueLabel;
