use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space canvas the chart is laid out against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One plot-space sample with its pre-formatted axis caption.
///
/// `x` and `y` are abstract plot coordinates, not pixels. The label text is
/// supplied by the host (the engine never formats timestamps itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    /// Builds a sample from a timestamped decimal price.
    ///
    /// `x` becomes the sample's unix time in fractional seconds; the caption
    /// is still host-formatted and passed through unchanged.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        price: Decimal,
        label: impl Into<String>,
    ) -> ChartResult<Self> {
        let y = price.to_f64().ok_or_else(|| {
            ChartError::InvalidData("price cannot be represented as f64".to_owned())
        })?;
        Ok(Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y,
            label: label.into(),
        })
    }
}

/// Inclusive index window of the full series currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Clamps the window into `[0, len - 1]`, collapsing to an empty range
    /// for an empty series.
    #[must_use]
    pub fn clamped(self, len: usize) -> Self {
        if len == 0 {
            return Self { start: 0, end: 0 };
        }
        let start = self.start.min(len - 1);
        let end = self.end.min(len - 1).max(start);
        Self { start, end }
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Number of indices in the inclusive window.
    #[must_use]
    pub fn count(self) -> usize {
        self.end - self.start + 1
    }
}
