use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::measure::TextMeasurer;
use crate::core::style::ChartStyle;
use crate::core::types::{CanvasSize, DataPoint, VisibleRange};
use crate::core::value_label::ValueLabel;

/// Gap between the selected value caption / viewport top and the plot area.
const VIEWPORT_TOP_GAP_PX: f64 = 10.0;

/// Pixel rectangle reserved for plotting, excluding label margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// A data sample mapped from plot space into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Positioned X-axis caption, one per visible sample.
///
/// `x`/`y` are the caption's top-left corner; `width`/`height` are its
/// measured extent. The vertical helper line for this slot runs at
/// `x + width / 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub selected: bool,
}

/// Positioned Y-axis caption with its horizontal helper line at
/// `y + height / 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Value caption drawn above the viewport for the selected sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Full geometry of one layout pass.
///
/// Recomputed from scratch on every call; layout holds no state between
/// passes. `x_label_slot_width` is reported back so the caller can decide how
/// many samples fit and feed an updated visible range into the next pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub plot_area: PlotArea,
    pub points: Vec<ProjectedPoint>,
    pub x_labels: Vec<XAxisLabel>,
    pub y_labels: Vec<YAxisLabel>,
    pub selected_value_label: Option<ValueLabelPlacement>,
    pub x_label_slot_width: f64,
    pub value_increment: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// False when the canvas is too small for the measured labels. The
    /// layout is still fully populated; the host decides whether to draw it.
    pub feasible: bool,
}

impl ChartLayout {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            plot_area: PlotArea::ZERO,
            points: Vec::new(),
            x_labels: Vec::new(),
            y_labels: Vec::new(),
            selected_value_label: None,
            x_label_slot_width: 0.0,
            value_increment: 0.0,
            min_y: 0.0,
            max_y: 0.0,
            feasible: true,
        }
    }
}

/// Computes viewport bounds, axis captions, and per-sample pixel positions.
///
/// Deterministic and side-effect free: identical inputs produce identical
/// output, so interaction code and tests can consume the exact same geometry.
/// Degenerate inputs (empty series, flat series, too-small canvas) produce a
/// defined layout instead of an error; this sits on the render path and must
/// never panic.
///
/// `selected_local` indexes into the visible slice, not the full series.
#[must_use]
pub fn compute_layout(
    points: &[DataPoint],
    visible_range: VisibleRange,
    style: &ChartStyle,
    canvas: CanvasSize,
    measurer: &dyn TextMeasurer,
    unit: &str,
    selected_local: Option<usize>,
) -> ChartLayout {
    if points.is_empty() {
        return ChartLayout::empty();
    }

    let range = visible_range.clamped(points.len());
    let visible = &points[range.start..=range.end];

    let max_y = max_of(visible.iter().map(|p| p.y));
    let min_y = visible
        .iter()
        .map(|p| OrderedFloat(p.y))
        .min()
        .map_or(0.0, |v| v.0);

    let font = style.label_font_size_px;
    let x_metrics: Vec<_> = visible
        .iter()
        .map(|p| measurer.measure(&p.label, font))
        .collect();
    let max_label_w = max_of(x_metrics.iter().map(|m| m.width));
    let max_label_h = max_of(x_metrics.iter().map(|m| m.height));
    let max_line_count = x_metrics.iter().map(|m| m.line_count).max().unwrap_or(0);
    let line_height = if max_line_count > 0 {
        max_label_h / f64::from(max_line_count)
    } else {
        0.0
    };

    let viewport_height = canvas.height
        - (max_label_h + 2.0 * style.vertical_padding_px + line_height
            + style.x_axis_label_spacing_px);
    let feasible = viewport_height >= 0.0;

    // Y labels share the viewport plus one label line of breathing room.
    let label_viewport_height = viewport_height + line_height;
    let label_count =
        (label_viewport_height / (line_height + style.min_y_label_spacing_px)).floor();
    let label_count = if label_count.is_finite() && label_count >= 1.0 {
        label_count as usize
    } else {
        0
    };

    let (value_increment, y_values) = if label_count == 0 {
        (0.0, vec![max_y])
    } else {
        let increment = (max_y - min_y) / label_count as f64;
        let values = (0..=label_count)
            .map(|i| max_y - increment * i as f64)
            .collect();
        (increment, values)
    };

    let y_metrics: Vec<_> = y_values
        .iter()
        .map(|value| {
            let text = ValueLabel::new(*value, unit).formatted();
            (measurer.measure(&text, font), text)
        })
        .collect();
    let max_y_label_w = max_of(y_metrics.iter().map(|(m, _)| m.width));

    let plot_area = PlotArea {
        left: 2.0 * style.horizontal_padding_px + max_y_label_w,
        top: style.vertical_padding_px + line_height + VIEWPORT_TOP_GAP_PX,
        right: canvas.width,
        bottom: style.vertical_padding_px + line_height + VIEWPORT_TOP_GAP_PX + viewport_height,
    };

    let slot_width = max_label_w + style.x_axis_label_spacing_px;

    let mut x_labels = Vec::with_capacity(visible.len());
    let mut selected_value_label = None;
    for (i, (point, metrics)) in visible.iter().zip(&x_metrics).enumerate() {
        let x = plot_area.left + style.x_axis_label_spacing_px / 2.0 + slot_width * i as f64;
        let selected = selected_local == Some(i);
        x_labels.push(XAxisLabel {
            text: point.label.clone(),
            x,
            y: plot_area.bottom + style.x_axis_label_spacing_px,
            width: metrics.width,
            height: metrics.height,
            selected,
        });

        if selected {
            selected_value_label = place_selected_value_label(
                point.y,
                unit,
                x,
                metrics.width,
                i == visible.len() - 1,
                plot_area.top,
                canvas,
                style,
                measurer,
            );
        }
    }

    // Leftover vertical space is split evenly across the gaps between labels.
    let height_required = line_height * (label_count + 1) as f64;
    let space_between = if label_count == 0 {
        0.0
    } else {
        (label_viewport_height - height_required) / label_count as f64
    };

    let y_labels = y_metrics
        .into_iter()
        .enumerate()
        .map(|(i, (metrics, text))| {
            let y = if label_count == 0 {
                // Single label centered in the label viewport.
                plot_area.top + (label_viewport_height - line_height) / 2.0
            } else {
                plot_area.top + i as f64 * (line_height + space_between) - line_height / 2.0
            };
            YAxisLabel {
                text,
                x: style.horizontal_padding_px + max_y_label_w - metrics.width,
                y,
                width: metrics.width,
                height: metrics.height,
            }
        })
        .collect();

    let y_span = max_y - min_y;
    let projected = visible
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = plot_area.left + i as f64 * slot_width + slot_width / 2.0;
            // [min_y; max_y] -> [0; 1]; a flat series pins every point to 0.
            let ratio = if y_span == 0.0 {
                0.0
            } else {
                (point.y - min_y) / y_span
            };
            ProjectedPoint {
                x,
                y: plot_area.bottom - ratio * viewport_height,
            }
        })
        .collect();

    ChartLayout {
        plot_area,
        points: projected,
        x_labels,
        y_labels,
        selected_value_label,
        x_label_slot_width: slot_width,
        value_increment,
        min_y,
        max_y,
        feasible,
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.map(OrderedFloat).max().map_or(0.0, |v| v.0)
}

#[allow(clippy::too_many_arguments)]
fn place_selected_value_label(
    value: f64,
    unit: &str,
    label_x: f64,
    label_width: f64,
    is_last_visible: bool,
    viewport_top: f64,
    canvas: CanvasSize,
    style: &ChartStyle,
    measurer: &dyn TextMeasurer,
) -> Option<ValueLabelPlacement> {
    let text = ValueLabel::new(value, unit).formatted();
    let metrics = measurer.measure(&text, style.label_font_size_px);

    // Right-align against the slot when the selection is the last visible
    // sample so the caption stays on canvas.
    let x = if is_last_visible {
        label_x - metrics.width
    } else {
        label_x - metrics.width / 2.0
    } + label_width / 2.0;

    let distance_to_right_edge = (canvas.width - x).round();
    if distance_to_right_edge < 0.0 || distance_to_right_edge > canvas.width.round() {
        return None;
    }

    Some(ValueLabelPlacement {
        text,
        x,
        y: viewport_top - metrics.height - VIEWPORT_TOP_GAP_PX,
    })
}
