use crate::model::{Block, Tick, Track};

/// One physical button: held/released state plus its note track.
///
/// The `is_down` flag is the single source of truth for whether a press
/// is open. Controllers repeat their current signal level, so `note_on`
/// while held and `note_off` while released are no-ops; only genuine
/// state changes reach the track, which keeps its history strictly
/// alternating.
#[derive(Debug, Clone)]
pub struct Button {
    track: Track,
    is_down: bool,
}

impl Button {
    pub fn new(track_limit: Tick, track_length: Tick) -> Self {
        Self {
            track: Track::new(track_limit, track_length),
            is_down: false,
        }
    }

    /// Record a press edge. Ignored while already held.
    pub fn note_on(&mut self, tick: Tick) {
        if !self.is_down {
            self.track.add(tick, true);
            self.is_down = true;
        }
    }

    /// Record a release edge. Ignored while already released.
    pub fn note_off(&mut self, tick: Tick) {
        if self.is_down {
            self.track.add(tick, false);
            self.is_down = false;
        }
    }

    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Blocks visible on this button at `tick`.
    pub fn render(&self, tick: Tick) -> Vec<Block> {
        self.track.render(tick)
    }

    /// Release the button and forget its history.
    pub fn reset(&mut self) {
        self.is_down = false;
        self.track.reset();
    }

    pub fn track(&self) -> &Track {
        &self.track
    }
}
