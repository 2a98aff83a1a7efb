use crate::model::Tick;

/// A single press or release edge stored in a track's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Tick at which the edge was recorded.
    pub tick: Tick,
    /// `true` for a press edge, `false` for a release edge.
    pub is_down: bool,
}

impl Transition {
    pub fn down(tick: Tick) -> Self {
        Self { tick, is_down: true }
    }

    pub fn up(tick: Tick) -> Self {
        Self { tick, is_down: false }
    }
}
