use serde::{Deserialize, Serialize};

/// Pointer interaction phase for one chart instance.
///
/// Only two phases exist: selection is resolved synchronously on every drag
/// update, and the last resolved selection persists after the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Public drag/selection state exposed to host applications.
///
/// The selected index is absolute (into the full series), not local to the
/// visible slice. It is the only piece of state that survives across render
/// passes; all geometry is recomputed per pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    phase: DragPhase,
    pointer_x: f64,
    selected_index: Option<usize>,
    showing_markers: bool,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            pointer_x: 0.0,
            selected_index: None,
            showing_markers: false,
        }
    }
}

impl DragState {
    #[must_use]
    pub fn phase(self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn pointer_x(self) -> f64 {
        self.pointer_x
    }

    #[must_use]
    pub fn selected_index(self) -> Option<usize> {
        self.selected_index
    }

    /// True while point markers should be drawn on every visible sample.
    #[must_use]
    pub fn showing_markers(self) -> bool {
        self.showing_markers
    }

    pub fn on_drag_update(&mut self, pointer_x: f64) {
        self.phase = DragPhase::Dragging;
        self.pointer_x = pointer_x;
    }

    /// Ends the gesture. The last resolved selection persists into `Idle`.
    pub fn on_drag_end(&mut self) {
        self.phase = DragPhase::Idle;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
        self.showing_markers = false;
    }

    pub fn set_showing_markers(&mut self, showing: bool) {
        self.showing_markers = showing;
    }
}
