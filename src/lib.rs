//! sparkline-rs: headless interactive line-chart engine.
//!
//! This crate computes text-measured viewport/axis layout, smoothed cubic
//! chart paths, and drag-driven point selection over an ordered value series.
//! It emits backend-neutral draw primitives; rendering and text rasterization
//! stay behind the `Renderer` and `TextMeasurer` seams owned by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{FrameOutput, LineChartConfig, LineChartEngine, SelectionChange};
pub use error::{ChartError, ChartResult};
