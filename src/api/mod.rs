mod config;
mod engine;

pub use config::LineChartConfig;
pub use engine::{FrameOutput, LineChartEngine, SelectionChange};
