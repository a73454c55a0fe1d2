use sparkline_rs::core::{ProjectedPoint, selected_index};

fn points_at(xs: &[f64]) -> Vec<ProjectedPoint> {
    xs.iter().map(|x| ProjectedPoint { x: *x, y: 0.0 }).collect()
}

#[test]
fn pointer_over_a_point_selects_it() {
    let points = points_at(&[10.0, 30.0, 50.0]);
    assert_eq!(selected_index(30.0, 10.0, &points), Some(1));
}

#[test]
fn pointer_far_from_every_point_selects_nothing() {
    let points = points_at(&[10.0, 30.0, 50.0]);
    assert_eq!(selected_index(100.0, 10.0, &points), None);
    assert_eq!(selected_index(20.0, 5.0, &points), None);
}

#[test]
fn trigger_window_edges_are_inclusive() {
    let points = points_at(&[10.0]);
    // Window around pointer 15 with width 10 is [10, 20].
    assert_eq!(selected_index(15.0, 10.0, &points), Some(0));
    let points = points_at(&[20.0]);
    assert_eq!(selected_index(15.0, 10.0, &points), Some(0));
}

#[test]
fn overlapping_windows_resolve_to_the_lower_index() {
    // Two points at the same pixel x: both fall inside the window, the
    // leftmost (lower index) wins rather than the nearest.
    let points = points_at(&[40.0, 40.0]);
    assert_eq!(selected_index(42.0, 20.0, &points), Some(0));

    // A wide trigger covering two adjacent points also picks the first.
    let points = points_at(&[40.0, 44.0]);
    assert_eq!(selected_index(42.0, 20.0, &points), Some(0));
}

#[test]
fn empty_point_list_selects_nothing() {
    assert_eq!(selected_index(42.0, 20.0, &[]), None);
}

#[test]
fn zero_trigger_width_requires_an_exact_hit() {
    let points = points_at(&[10.0, 30.0]);
    assert_eq!(selected_index(30.0, 0.0, &points), Some(1));
    assert_eq!(selected_index(29.999, 0.0, &points), None);
}
