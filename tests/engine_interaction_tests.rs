use sparkline_rs::core::{CanvasSize, DataPoint, HeadlessTextMeasurer};
use sparkline_rs::interaction::DragPhase;
use sparkline_rs::render::NullRenderer;
use sparkline_rs::{LineChartConfig, LineChartEngine};

fn price_points() -> Vec<DataPoint> {
    [1.0, 2.0, 3.0, 2.0, 1.0]
        .iter()
        .zip(["a", "b", "c", "d", "e"])
        .map(|(y, label)| DataPoint::new(0.0, *y, label))
        .collect()
}

fn engine_with_data() -> LineChartEngine<HeadlessTextMeasurer> {
    let config = LineChartConfig::new(CanvasSize::new(500.0, 300.0), "$");
    let mut engine =
        LineChartEngine::new(HeadlessTextMeasurer::default(), config).expect("valid config");
    engine.set_data(price_points());
    engine.set_visible_range(0, 4);
    engine
}

#[test]
fn dragging_over_the_third_point_selects_c() {
    let mut engine = engine_with_data();
    let pointer_x = engine.layout().points[2].x;

    let change = engine.on_drag_update(pointer_x).expect("selection");
    assert_eq!(change.index, 2);
    assert_eq!(change.point.label, "c");
    assert!(engine.drag_state().showing_markers());
    assert_eq!(engine.drag_state().phase(), DragPhase::Dragging);
}

#[test]
fn selection_persists_after_drag_ends() {
    let mut engine = engine_with_data();
    let pointer_x = engine.layout().points[1].x;

    engine.on_drag_update(pointer_x).expect("selection");
    engine.on_drag_end();

    assert_eq!(engine.drag_state().phase(), DragPhase::Idle);
    assert_eq!(engine.drag_state().selected_index(), Some(1));
    assert!(engine.drag_state().showing_markers());
}

#[test]
fn drag_miss_keeps_prior_selection_but_hides_markers() {
    let mut engine = engine_with_data();
    let pointer_x = engine.layout().points[3].x;
    engine.on_drag_update(pointer_x).expect("selection");

    let miss = engine.on_drag_update(-500.0);
    assert!(miss.is_none());
    assert!(!engine.drag_state().showing_markers());
    assert_eq!(engine.drag_state().selected_index(), Some(3));
}

#[test]
fn selection_index_is_absolute_for_a_shifted_visible_range() {
    let mut engine = engine_with_data();
    engine.set_visible_range(2, 4);

    // First visible slot maps back to absolute index 2.
    let pointer_x = engine.layout().points[0].x;
    let change = engine.on_drag_update(pointer_x).expect("selection");
    assert_eq!(change.index, 2);
    assert_eq!(change.point.label, "c");
}

#[test]
fn replacing_data_drops_a_dangling_selection() {
    let mut engine = engine_with_data();
    let pointer_x = engine.layout().points[4].x;
    engine.on_drag_update(pointer_x).expect("selection");
    assert_eq!(engine.drag_state().selected_index(), Some(4));

    engine.set_data(price_points()[..2].to_vec());
    assert_eq!(engine.drag_state().selected_index(), None);
    assert!(!engine.drag_state().showing_markers());
}

#[test]
fn frame_contains_labels_helper_lines_and_the_curve() {
    let mut engine = engine_with_data();
    let output = engine.build_frame();
    let frame = &output.frame;

    // 5 X captions + at least 2 Y captions.
    assert!(frame.texts.len() >= 7);
    // One vertical helper per visible sample plus the horizontal Y lines.
    assert!(frame.lines.len() >= 7);
    assert_eq!(frame.paths.len(), 1);
    // No markers while idle with no selection.
    assert!(frame.circles.is_empty());

    assert!(output.x_label_slot_width > 0.0);
    assert!(output.x_label_slot_width_changed);
}

#[test]
fn slot_width_change_flag_clears_once_stable() {
    let mut engine = engine_with_data();
    let first = engine.build_frame();
    let second = engine.build_frame();

    assert!(first.x_label_slot_width_changed);
    assert!(!second.x_label_slot_width_changed);
    assert_eq!(first.x_label_slot_width, second.x_label_slot_width);
}

#[test]
fn markers_appear_while_dragging_with_a_ring_on_the_selection() {
    let mut engine = engine_with_data();
    let pointer_x = engine.layout().points[2].x;
    engine.on_drag_update(pointer_x).expect("selection");

    let output = engine.build_frame();
    // One filled marker per visible sample plus white fill + ring for the
    // selected one.
    assert_eq!(output.frame.circles.len(), 5 + 2);

    // The selected slot also gets a value caption above the viewport.
    let layout = engine.layout();
    assert!(layout.selected_value_label.is_some());
}

#[test]
fn render_drives_a_backend_and_validates_the_frame() {
    let mut engine = engine_with_data();
    let mut renderer = NullRenderer::default();

    let output = engine.render(&mut renderer).expect("render");
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_text_count, output.frame.texts.len());
    assert!(renderer.last_line_count > 0);
}

#[test]
fn empty_series_renders_an_empty_frame() {
    let config = LineChartConfig::new(CanvasSize::new(500.0, 300.0), "$");
    let mut engine =
        LineChartEngine::new(HeadlessTextMeasurer::default(), config).expect("valid config");

    let output = engine.build_frame();
    assert!(output.frame.is_empty());
    assert_eq!(output.x_label_slot_width, 0.0);

    assert!(engine.on_drag_update(100.0).is_none());
}

#[test]
fn helper_lines_can_be_disabled_by_style() {
    let mut engine = engine_with_data();
    let mut style = *engine.style();
    style.show_helper_lines = false;
    engine.set_style(style).expect("valid style");

    let output = engine.build_frame();
    assert!(output.frame.lines.is_empty());
    assert_eq!(output.frame.paths.len(), 1);
}
