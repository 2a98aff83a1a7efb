use crate::model::Tick;

/// A renderable note interval, measured in ticks behind the playhead.
///
/// `start` is the newer edge (closer to the playhead at distance 0),
/// `stop` the older one. The reduction clamps both into
/// `[0, track_limit]`, so `start <= stop` always holds once a block
/// leaves [`Track::render`](crate::model::Track::render). An open block
/// for a still-held button has `start == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: Tick,
    pub stop: Tick,
}

impl Block {
    pub fn new(start: Tick, stop: Tick) -> Self {
        Self { start, stop }
    }

    /// Span covered by the block, in ticks.
    pub fn len(&self) -> Tick {
        self.stop.saturating_sub(self.start)
    }

    /// A block whose edges coincide covers nothing and is never shown.
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }
}
