//! Drag gesture interpretation.
//!
//! # Responsibility
//! - Map a released horizontal drag displacement to a status transition.
//! - Stay pure and rendering-framework independent.
//!
//! # Invariants
//! - Displacements below the threshold never produce a transition.
//! - Transitions move exactly one step and clamp at the sequence ends.

use crate::model::task::Status;

/// Minimum horizontal displacement, in display units, for a released drag
/// to count as a status move.
pub const DRAG_THRESHOLD: f64 = 50.0;

/// Interprets a released drag over a task card.
///
/// `delta_x` is the accumulated horizontal displacement at release; positive
/// values drag toward the next stage, negative toward the previous one.
/// Returns the target status, or `None` when the gesture is discarded
/// (below threshold) or clamped (already at the boundary). The caller snaps
/// the card back to its origin either way.
pub fn interpret_drag(current: Status, delta_x: f64) -> Option<Status> {
    if delta_x.abs() < DRAG_THRESHOLD {
        return None;
    }

    if delta_x > 0.0 {
        current.next()
    } else {
        current.previous()
    }
}

#[cfg(test)]
mod tests {
    use super::{interpret_drag, DRAG_THRESHOLD};
    use crate::model::task::Status;

    #[test]
    fn displacement_below_threshold_is_discarded() {
        assert_eq!(interpret_drag(Status::Todo, 49.0), None);
        assert_eq!(interpret_drag(Status::InProgress, -49.0), None);
        assert_eq!(interpret_drag(Status::InProgress, 0.0), None);
    }

    #[test]
    fn displacement_beyond_threshold_moves_one_step() {
        assert_eq!(interpret_drag(Status::Todo, 51.0), Some(Status::InProgress));
        assert_eq!(
            interpret_drag(Status::InProgress, 51.0),
            Some(Status::Completed)
        );
        assert_eq!(
            interpret_drag(Status::Completed, -51.0),
            Some(Status::InProgress)
        );
        assert_eq!(interpret_drag(Status::InProgress, -51.0), Some(Status::Todo));
    }

    #[test]
    fn displacement_at_exact_threshold_triggers() {
        assert_eq!(
            interpret_drag(Status::Todo, DRAG_THRESHOLD),
            Some(Status::InProgress)
        );
        assert_eq!(
            interpret_drag(Status::Completed, -DRAG_THRESHOLD),
            Some(Status::InProgress)
        );
    }

    #[test]
    fn transitions_clamp_at_sequence_ends() {
        assert_eq!(interpret_drag(Status::Completed, 500.0), None);
        assert_eq!(interpret_drag(Status::Todo, -500.0), None);
    }
}
