use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, ChartStyle};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub canvas: CanvasSize,
    #[serde(default)]
    pub style: ChartStyle,
    /// Unit suffix appended to every Y-axis value caption (e.g. "$").
    #[serde(default)]
    pub unit: String,
    /// Overrides the pointer hit-test tolerance. Defaults to the computed
    /// X-label slot width when absent.
    #[serde(default)]
    pub trigger_width_px: Option<f64>,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(canvas: CanvasSize, unit: impl Into<String>) -> Self {
        Self {
            canvas,
            style: ChartStyle::default(),
            unit: unit.into(),
            trigger_width_px: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_trigger_width(mut self, trigger_width_px: f64) -> Self {
        self.trigger_width_px = Some(trigger_width_px);
        self
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        // A zero-area canvas is a defined degenerate layout input, but the
        // dimensions themselves must be finite and non-negative.
        if !self.canvas.width.is_finite()
            || !self.canvas.height.is_finite()
            || self.canvas.width < 0.0
            || self.canvas.height < 0.0
        {
            return Err(ChartError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        if let Some(width) = self.trigger_width_px {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidData(
                    "trigger width must be finite and >= 0".to_owned(),
                ));
            }
        }

        self.style.validate()
    }
}
