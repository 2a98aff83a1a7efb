// Tick clock, event dispatch, and the per-input board registry

mod display_state;

pub use display_state::DisplayState;
