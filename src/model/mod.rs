// Core block model: transition history and its reduction to display blocks

pub mod block;
pub mod board;
pub mod button;
pub mod track;
pub mod transition;

pub use block::Block;
pub use board::ButtonBoard;
pub use button::Button;
pub use track::Track;
pub use transition::Transition;

/// Discrete frame counter. Advanced once per animation frame by the
/// display driver; all distances and window sizes are measured in it.
pub type Tick = u64;
