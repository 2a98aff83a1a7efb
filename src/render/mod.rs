// Text rendering of display snapshots

mod text;

// Public API for library consumers
pub use text::TextFrame;
