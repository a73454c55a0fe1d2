use approx::assert_abs_diff_eq;
use sparkline_rs::core::{PathCommand, ProjectedPoint, build_path};

fn projected(points: &[(f64, f64)]) -> Vec<ProjectedPoint> {
    points
        .iter()
        .map(|(x, y)| ProjectedPoint { x: *x, y: *y })
        .collect()
}

#[test]
fn empty_input_builds_an_empty_path() {
    assert!(build_path(&[]).is_empty());
}

#[test]
fn single_point_builds_an_empty_path() {
    let points = projected(&[(10.0, 20.0)]);
    assert!(build_path(&points).is_empty());
}

#[test]
fn path_starts_with_move_to_the_first_point() {
    let points = projected(&[(10.0, 20.0), (30.0, 40.0)]);
    let commands = build_path(&points);

    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], PathCommand::MoveTo { x: 10.0, y: 20.0 });
}

#[test]
fn each_segment_uses_midpoint_controls_with_endpoint_ys() {
    let points = projected(&[(0.0, 100.0), (20.0, 60.0), (40.0, 80.0)]);
    let commands = build_path(&points);

    assert_eq!(commands.len(), 3);

    let PathCommand::CubicTo {
        c1x,
        c1y,
        c2x,
        c2y,
        x,
        y,
    } = commands[1]
    else {
        panic!("expected cubic segment");
    };
    assert_abs_diff_eq!(c1x, 10.0);
    assert_abs_diff_eq!(c2x, 10.0);
    assert_abs_diff_eq!(c1y, 100.0);
    assert_abs_diff_eq!(c2y, 60.0);
    assert_abs_diff_eq!(x, 20.0);
    assert_abs_diff_eq!(y, 60.0);

    let PathCommand::CubicTo {
        c1x, c1y, c2x, c2y, ..
    } = commands[2]
    else {
        panic!("expected cubic segment");
    };
    assert_abs_diff_eq!(c1x, 30.0);
    assert_abs_diff_eq!(c2x, 30.0);
    assert_abs_diff_eq!(c1y, 60.0);
    assert_abs_diff_eq!(c2y, 80.0);
}

#[test]
fn five_points_produce_four_cubic_segments() {
    let points = projected(&[
        (0.0, 10.0),
        (10.0, 20.0),
        (20.0, 5.0),
        (30.0, 20.0),
        (40.0, 10.0),
    ]);
    let commands = build_path(&points);

    let cubics = commands
        .iter()
        .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
        .count();
    assert_eq!(cubics, 4);
    assert_eq!(commands.len(), 5);
}
