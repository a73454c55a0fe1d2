use tracing::{debug, trace};

use crate::core::{
    CanvasSize, ChartLayout, ChartStyle, DataPoint, TextMeasurer, VisibleRange, build_path,
    compute_layout, selected_index,
};
use crate::error::ChartResult;
use crate::interaction::DragState;
use crate::render::{
    CirclePrimitive, Color, LineCap, LinePrimitive, PathPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::LineChartConfig;

/// Stroke width of the chart curve.
const CURVE_STROKE_WIDTH_PX: f64 = 5.0;
/// Radius of the per-sample marker circle while markers are showing.
const MARKER_RADIUS_PX: f64 = 10.0;
/// Radius of the highlight ring drawn around the selected sample.
const SELECTED_RING_RADIUS_PX: f64 = 15.0;
const SELECTED_RING_STROKE_PX: f64 = 3.0;
/// Helper-line width multiplier for the selected X slot.
const SELECTED_HELPER_LINE_FACTOR: f64 = 1.8;

/// Selection notification produced by a drag update.
///
/// `index` is absolute into the full series.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub index: usize,
    pub point: DataPoint,
}

/// Result of one frame pass.
///
/// `x_label_slot_width` implements the two-phase sizing protocol: the caller
/// owns the "how many samples fit" decision, recomputes the visible range
/// from the reported slot width, and runs another pass. The engine keeps no
/// sizing cache of its own beyond the change flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub frame: RenderFrame,
    pub x_label_slot_width: f64,
    pub x_label_slot_width_changed: bool,
}

/// Main orchestration facade consumed by host applications.
///
/// `LineChartEngine` coordinates the data series, visible window, drag
/// selection state, and frame assembly. All geometry is recomputed per pass;
/// the persisted selected index is the only cross-pass state.
pub struct LineChartEngine<M: TextMeasurer> {
    measurer: M,
    canvas: CanvasSize,
    style: ChartStyle,
    unit: String,
    trigger_width_px: Option<f64>,
    points: Vec<DataPoint>,
    visible_range: VisibleRange,
    drag: DragState,
    last_slot_width: Option<f64>,
}

impl<M: TextMeasurer> LineChartEngine<M> {
    pub fn new(measurer: M, config: LineChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            measurer,
            canvas: config.canvas,
            style: config.style,
            unit: config.unit,
            trigger_width_px: config.trigger_width_px,
            points: Vec::new(),
            visible_range: VisibleRange::new(0, 0),
            drag: DragState::default(),
            last_slot_width: None,
        })
    }

    /// Replaces the data series. The visible range is re-clamped and a
    /// now-dangling selection is dropped.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        debug!(count = points.len(), "set data points");
        self.points = points;
        self.visible_range = self.visible_range.clamped(self.points.len());
        if let Some(selected) = self.drag.selected_index() {
            if selected >= self.points.len() {
                self.drag.clear_selection();
            }
        }
    }

    /// Moves the visible window, clamped to the series bounds.
    pub fn set_visible_range(&mut self, start: usize, end: usize) {
        let range = VisibleRange::new(start, end).clamped(self.points.len());
        trace!(start = range.start, end = range.end, "set visible range");
        self.visible_range = range;
    }

    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Computes the current pass geometry. Pure with respect to engine
    /// state: calling it repeatedly without mutations yields identical
    /// layouts.
    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        compute_layout(
            &self.points,
            self.visible_range,
            &self.style,
            self.canvas,
            &self.measurer,
            &self.unit,
            self.selected_local_index(),
        )
    }

    /// Resolves a horizontal drag position against the current geometry.
    ///
    /// Markers show only when the hit maps to an absolute index inside the
    /// visible range; a miss keeps the prior selection visible but emits no
    /// notification.
    pub fn on_drag_update(&mut self, pointer_x: f64) -> Option<SelectionChange> {
        self.drag.on_drag_update(pointer_x);

        let layout = self.layout();
        let trigger_width = self
            .trigger_width_px
            .unwrap_or(layout.x_label_slot_width);

        let Some(local) = selected_index(pointer_x, trigger_width, &layout.points) else {
            self.drag.set_showing_markers(false);
            return None;
        };

        let absolute = self.visible_range.start + local;
        let inside = self.visible_range.contains(absolute);
        self.drag.set_showing_markers(inside);
        if !inside {
            return None;
        }

        self.drag.set_selected_index(absolute);
        trace!(index = absolute, "drag selection resolved");
        Some(SelectionChange {
            index: absolute,
            point: self.points[absolute].clone(),
        })
    }

    /// Ends the drag gesture; the last resolved selection persists.
    pub fn on_drag_end(&mut self) {
        self.drag.on_drag_end();
    }

    /// Assembles the draw primitives for one pass: axis captions, helper
    /// lines, the smoothed curve, and selection markers.
    pub fn build_frame(&mut self) -> FrameOutput {
        let layout = self.layout();
        let mut frame = RenderFrame::new(self.canvas);

        self.push_x_axis(&mut frame, &layout);
        self.push_y_axis(&mut frame, &layout);
        self.push_curve(&mut frame, &layout);
        self.push_markers(&mut frame, &layout);

        let slot_width = layout.x_label_slot_width;
        let changed = self.last_slot_width != Some(slot_width);
        self.last_slot_width = Some(slot_width);
        if changed {
            debug!(slot_width, "x label slot width changed");
        }

        FrameOutput {
            frame,
            x_label_slot_width: slot_width,
            x_label_slot_width_changed: changed,
        }
    }

    /// Runs one full pass into a rendering backend.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<FrameOutput> {
        let output = self.build_frame();
        renderer.render(&output.frame)?;
        Ok(output)
    }

    /// Maps the persisted absolute selection into the visible slice.
    fn selected_local_index(&self) -> Option<usize> {
        let selected = self.drag.selected_index()?;
        if self.points.is_empty() || !self.visible_range.contains(selected) {
            return None;
        }
        Some(selected - self.visible_range.start)
    }

    fn push_x_axis(&self, frame: &mut RenderFrame, layout: &ChartLayout) {
        let style = &self.style;
        for label in &layout.x_labels {
            let color = if label.selected {
                style.selected_color
            } else {
                style.unselected_color
            };

            if !label.text.is_empty() && style.label_font_size_px > 0.0 {
                frame.texts.push(TextPrimitive::new(
                    label.text.clone(),
                    label.x,
                    label.y,
                    style.label_font_size_px,
                    color,
                    TextHAlign::Left,
                ));
            }

            if style.show_helper_lines && style.helper_line_width_px > 0.0 {
                let width = if label.selected {
                    style.helper_line_width_px * SELECTED_HELPER_LINE_FACTOR
                } else {
                    style.helper_line_width_px
                };
                let x = label.x + label.width / 2.0;
                frame.lines.push(LinePrimitive::new(
                    x,
                    layout.plot_area.bottom,
                    x,
                    layout.plot_area.top,
                    width,
                    color,
                ));
            }
        }

        if let Some(value_label) = &layout.selected_value_label {
            if !value_label.text.is_empty() && style.label_font_size_px > 0.0 {
                frame.texts.push(TextPrimitive::new(
                    value_label.text.clone(),
                    value_label.x,
                    value_label.y,
                    style.label_font_size_px,
                    style.selected_color,
                    TextHAlign::Left,
                ));
            }
        }
    }

    fn push_y_axis(&self, frame: &mut RenderFrame, layout: &ChartLayout) {
        let style = &self.style;
        for label in &layout.y_labels {
            if !label.text.is_empty() && style.label_font_size_px > 0.0 {
                frame.texts.push(TextPrimitive::new(
                    label.text.clone(),
                    label.x,
                    label.y,
                    style.label_font_size_px,
                    style.unselected_color,
                    TextHAlign::Left,
                ));
            }

            if style.show_helper_lines && style.helper_line_width_px > 0.0 {
                let y = label.y + label.height / 2.0;
                frame.lines.push(LinePrimitive::new(
                    layout.plot_area.left,
                    y,
                    layout.plot_area.right,
                    y,
                    style.helper_line_width_px,
                    style.unselected_color,
                ));
            }
        }
    }

    fn push_curve(&self, frame: &mut RenderFrame, layout: &ChartLayout) {
        let commands = build_path(&layout.points);
        if commands.is_empty() {
            return;
        }
        frame.paths.push(PathPrimitive::new(
            commands.into_vec(),
            CURVE_STROKE_WIDTH_PX,
            self.style.chart_line_color,
            LineCap::Round,
        ));
    }

    fn push_markers(&self, frame: &mut RenderFrame, layout: &ChartLayout) {
        if !self.drag.showing_markers() {
            return;
        }

        let selected_local = self.selected_local_index();
        for (i, point) in layout.points.iter().enumerate() {
            frame.circles.push(CirclePrimitive::filled(
                point.x,
                point.y,
                MARKER_RADIUS_PX,
                self.style.selected_color,
            ));

            if selected_local == Some(i) {
                frame.circles.push(CirclePrimitive::filled(
                    point.x,
                    point.y,
                    SELECTED_RING_RADIUS_PX,
                    Color::WHITE,
                ));
                frame.circles.push(CirclePrimitive::stroked(
                    point.x,
                    point.y,
                    SELECTED_RING_RADIUS_PX,
                    self.style.selected_color,
                    SELECTED_RING_STROKE_PX,
                ));
            }
        }
    }
}
