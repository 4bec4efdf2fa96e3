mod action;
mod editor_state;
pub mod reducer;

pub use action::Action;
pub use editor_state::EditorState;
pub use reducer::{CHECKPOINT_INTERVAL_MS, Reducer, history_update_state, update_state};
