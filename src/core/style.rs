use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual configuration for one chart instance.
///
/// Pure data: stroke widths and spacings are device pixels, colors are
/// normalized RGBA. Hosts typically derive this from their theme once and
/// pass it on every render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub chart_line_color: Color,
    pub unselected_color: Color,
    pub selected_color: Color,
    pub helper_line_width_px: f64,
    pub axis_line_width_px: f64,
    pub label_font_size_px: f64,
    pub min_y_label_spacing_px: f64,
    pub vertical_padding_px: f64,
    pub horizontal_padding_px: f64,
    pub x_axis_label_spacing_px: f64,
    #[serde(default = "default_show_helper_lines")]
    pub show_helper_lines: bool,
}

fn default_show_helper_lines() -> bool {
    true
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            chart_line_color: Color::rgb(0.0, 0.0, 0.0),
            unselected_color: Color::rgb(0.486, 0.486, 0.486),
            selected_color: Color::rgb(0.0, 0.0, 0.0),
            helper_line_width_px: 1.0,
            axis_line_width_px: 5.0,
            label_font_size_px: 14.0,
            min_y_label_spacing_px: 25.0,
            vertical_padding_px: 8.0,
            horizontal_padding_px: 8.0,
            x_axis_label_spacing_px: 8.0,
            show_helper_lines: true,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("helper_line_width_px", self.helper_line_width_px),
            ("axis_line_width_px", self.axis_line_width_px),
            ("label_font_size_px", self.label_font_size_px),
            ("min_y_label_spacing_px", self.min_y_label_spacing_px),
            ("vertical_padding_px", self.vertical_padding_px),
            ("horizontal_padding_px", self.horizontal_padding_px),
            ("x_axis_label_spacing_px", self.x_axis_label_spacing_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "`{field}` must be finite and >= 0"
                )));
            }
        }

        self.chart_line_color.validate()?;
        self.unselected_color.validate()?;
        self.selected_color.validate()?;
        Ok(())
    }
}
