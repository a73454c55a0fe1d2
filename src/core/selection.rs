use crate::core::layout::ProjectedPoint;

/// Maps a pointer x coordinate to the projected point it lands on.
///
/// A point is hit when its pixel x lies inside the trigger window
/// `[pointer_x - trigger_width / 2, pointer_x + trigger_width / 2]`. The
/// first hit in ascending index order wins; overlapping windows are resolved
/// leftmost, not by distance. Returns `None` when nothing is hit.
#[must_use]
pub fn selected_index(
    pointer_x: f64,
    trigger_width: f64,
    points: &[ProjectedPoint],
) -> Option<usize> {
    let left = pointer_x - trigger_width / 2.0;
    let right = pointer_x + trigger_width / 2.0;
    points
        .iter()
        .position(|point| point.x >= left && point.x <= right)
}
