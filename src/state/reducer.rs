//! Reducers turning an [`EditorState`] and an [`Action`] into the next state.
//!
//! The history reducer groups edits into checkpoints. A picture-carrying
//! action opens a new checkpoint only when the previous one is at least
//! [`CHECKPOINT_INTERVAL_MS`] old; everything dispatched inside that window
//! shares it, so one freehand stroke (dozens of pointer moves) undoes in a
//! single step.
//!
//! ```text
//!   undo, history empty ──────────────► unchanged
//!   undo ─────────────────────────────► picture = history[0], window closed
//!   picture, window expired ──────────► push old picture, merge, window = now
//!   anything else ────────────────────► merge
//! ```

use super::{Action, EditorState};

/// Default coalescing window between two checkpoints
pub const CHECKPOINT_INTERVAL_MS: u64 = 1000;

/// Merge `action` into `state` without recording any history
pub fn update_state(state: EditorState, action: Action) -> EditorState {
    state.merge(action)
}

/// Merge `action` into `state`, recording an undo checkpoint when the
/// default window has elapsed since the last one.
pub fn history_update_state(state: EditorState, action: Action, now: u64) -> EditorState {
    Reducer::default().apply(state, action, now)
}

/// Which reducer the editor dispatches through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Plain merge, no undo
    Plain,
    /// Checkpointed undo with the given coalescing window
    History { window_ms: u64 },
}

impl Default for Reducer {
    fn default() -> Self {
        Self::History {
            window_ms: CHECKPOINT_INTERVAL_MS,
        }
    }
}

impl Reducer {
    /// Produce the state following `action`, dispatched at `now` (milliseconds)
    pub fn apply(&self, state: EditorState, action: Action, now: u64) -> EditorState {
        let window_ms = match *self {
            Self::Plain => return update_state(state, action),
            Self::History { window_ms } => window_ms,
        };

        if action.undo {
            return undo(state);
        }

        let expired = now.saturating_sub(state.last_checkpoint) >= window_ms;
        if action.picture.is_some() && expired {
            let mut state = state;
            let previous = state.picture.clone();
            state.history.push_front(previous);
            log::debug!("checkpoint at {now}ms, {} undo steps", state.history.len());
            let mut state = state.merge(action);
            state.last_checkpoint = now;
            return state;
        }

        state.merge(action)
    }
}

fn undo(mut state: EditorState) -> EditorState {
    let Some(picture) = state.history.pop_front() else {
        log::debug!("undo requested with empty history");
        return state;
    };
    state.picture = picture;
    state.last_checkpoint = 0;
    log::debug!("undo, {} steps left", state.history.len());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::picture::{Picture, PixelWrite};
    use crate::tools::ToolType;

    const BG: Color = Color::rgb(0xf0, 0xf0, 0xf0);
    const INK: Color = Color::BLACK;

    fn start_state() -> EditorState {
        EditorState::new(Picture::empty(4, 4, BG).unwrap(), ToolType::Draw, INK)
    }

    fn painted(state: &EditorState, x: i32) -> Picture {
        state
            .picture
            .draw(&[PixelWrite::new(x, 0, state.color)])
            .unwrap()
    }

    #[test]
    fn test_edits_inside_window_share_checkpoint() {
        let state = start_state();
        let first = painted(&state, 0);
        let state = history_update_state(state, Action::picture(first), 5_000);
        let second = painted(&state, 1);
        let state = history_update_state(state, Action::picture(second.clone()), 5_999);

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.picture, second);
        assert_eq!(state.last_checkpoint, 5_000);
    }

    #[test]
    fn test_edits_a_window_apart_checkpoint_twice() {
        let state = start_state();
        let original = state.picture.clone();
        let first = painted(&state, 0);
        let state = history_update_state(state, Action::picture(first.clone()), 5_000);
        let second = painted(&state, 1);
        let state = history_update_state(state, Action::picture(second), 6_000);

        assert_eq!(state.history, [first, original]);
        assert_eq!(state.last_checkpoint, 6_000);
    }

    #[test]
    fn test_undo_restores_and_closes_window() {
        let state = start_state();
        let original = state.picture.clone();
        let edited = painted(&state, 2);
        let state = history_update_state(state, Action::picture(edited), 5_000);
        let state = history_update_state(state, Action::undo(), 5_100);

        assert_eq!(state.picture, original);
        assert!(state.history.is_empty());
        assert_eq!(state.last_checkpoint, 0);

        let again = history_update_state(state.clone(), Action::undo(), 5_200);
        assert_eq!(again, state);
    }

    #[test]
    fn test_edit_right_after_undo_checkpoints_again() {
        let state = start_state();
        let edited = painted(&state, 0);
        let state = history_update_state(state, Action::picture(edited), 5_000);
        let state = history_update_state(state, Action::undo(), 5_100);
        let redrawn = painted(&state, 3);
        let state = history_update_state(state, Action::picture(redrawn), 5_200);

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.last_checkpoint, 5_200);
    }

    #[test]
    fn test_tool_and_color_changes_never_checkpoint() {
        let state = start_state();
        let state = history_update_state(state, Action::tool(ToolType::Fill), 10_000);
        let state = history_update_state(state, Action::color(BG), 20_000);

        assert!(state.history.is_empty());
        assert_eq!(state.tool, ToolType::Fill);
        assert_eq!(state.color, BG);
        assert_eq!(state.last_checkpoint, 0);
    }

    #[test]
    fn test_plain_reducer_only_merges() {
        let state = start_state();
        let edited = painted(&state, 0);
        let state = Reducer::Plain.apply(state, Action::picture(edited.clone()), 5_000);
        let state = Reducer::Plain.apply(state, Action::undo(), 6_000);

        assert_eq!(state.picture, edited);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_custom_window() {
        let reducer = Reducer::History { window_ms: 100 };
        let state = start_state();
        let first = painted(&state, 0);
        let state = reducer.apply(state, Action::picture(first), 1_000);
        let second = painted(&state, 1);
        let state = reducer.apply(state, Action::picture(second), 1_100);

        assert_eq!(state.history.len(), 2);
    }
}
