use crate::model::{Block, Tick, Transition};

/// Rolling press/release history for one button, plus the reduction
/// that turns it into display blocks.
///
/// Edges are stored in the order they arrive and pruned once they fall
/// more than `track_length` ticks behind the newest appended edge.
/// Pruning happens on append only; rendering never mutates, so a stale
/// history stays visible until the next edge arrives. The track trusts
/// its caller to alternate press and release edges; deduplicating held
/// keys is [`Button`](crate::model::Button)'s job.
#[derive(Debug, Clone)]
pub struct Track {
    track_limit: Tick,
    track_length: Tick,
    data: Vec<Transition>,
}

impl Track {
    pub fn new(track_limit: Tick, track_length: Tick) -> Self {
        Self {
            track_limit,
            track_length,
            data: Vec::new(),
        }
    }

    /// Append an edge at `tick`.
    ///
    /// Edges older than the newest stored one are dropped silently:
    /// event delivery can lag the clock, and a late edge is noise, not
    /// an error. Equal ticks are accepted so a press and release can
    /// share a frame.
    pub fn add(&mut self, tick: Tick, is_down: bool) {
        if let Some(last) = self.data.last() {
            if tick < last.tick {
                return;
            }
        }
        self.data.push(Transition { tick, is_down });
        self.prune(tick);
    }

    /// Evict edges that have left the rolling history window.
    fn prune(&mut self, latest: Tick) {
        if let Some(expired) = latest.checked_sub(self.track_length) {
            self.data.retain(|t| t.tick > expired);
        }
    }

    /// Reduce the stored history to the blocks visible at `current_tick`.
    ///
    /// Each press opens a block pinned to the playhead (`start == 0`);
    /// the matching release moves `start` to the release distance. Both
    /// edges are clamped to `track_limit`, and blocks whose clamped
    /// edges coincide are dropped, which removes both fully scrolled-off
    /// notes and zero-width same-tick taps. Blocks come back
    /// oldest-opened first.
    pub fn render(&self, current_tick: Tick) -> Vec<Block> {
        let mut blocks: Vec<Block> = Vec::new();
        let mut open = false;
        for transition in &self.data {
            let distance = current_tick
                .saturating_sub(transition.tick)
                .min(self.track_limit);
            if transition.is_down {
                blocks.push(Block::new(0, distance));
                open = true;
            } else if open {
                // A release closes the newest block exactly once.
                if let Some(last) = blocks.last_mut() {
                    last.start = distance;
                }
                open = false;
            }
        }
        blocks.retain(|block| !block.is_empty());
        blocks
    }

    /// Forget the entire history.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Edges currently retained, oldest first.
    pub fn transitions(&self) -> &[Transition] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track::new(200, 1000)
    }

    #[test]
    fn test_open_block_pinned_to_playhead() {
        let mut track = track();
        track.add(975, true);
        assert_eq!(track.render(1000), vec![Block::new(0, 25)]);
    }

    #[test]
    fn test_release_sets_block_start() {
        let mut track = track();
        track.add(50, true);
        track.add(90, false);
        assert_eq!(track.render(100), vec![Block::new(10, 50)]);
    }

    #[test]
    fn test_open_block_clamped_to_limit() {
        let mut track = track();
        track.add(0, true);
        assert_eq!(track.render(1000), vec![Block::new(0, 200)]);
    }

    #[test]
    fn test_scrolled_off_block_dropped() {
        let mut track = track();
        track.add(100, true);
        track.add(200, false);
        assert_eq!(track.render(1000), vec![]);
    }

    #[test]
    fn test_old_pair_dropped_new_press_open() {
        let mut track = track();
        track.add(0, true);
        track.add(100, false);
        track.add(900, true);
        assert_eq!(track.render(1000), vec![Block::new(0, 100)]);
    }

    #[test]
    fn test_blocks_ordered_oldest_opened_first() {
        let mut track = track();
        track.add(750, true);
        track.add(850, false);
        track.add(900, true);
        assert_eq!(
            track.render(1000),
            vec![Block::new(150, 200), Block::new(0, 100)]
        );
    }

    #[test]
    fn test_stale_edge_ignored() {
        let mut track = track();
        track.add(100, true);
        track.add(50, false);
        assert_eq!(track.len(), 1);
        assert_eq!(track.transitions()[0], Transition::down(100));
    }

    #[test]
    fn test_same_tick_edge_accepted() {
        let mut track = track();
        track.add(100, true);
        track.add(100, false);
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_same_tick_tap_is_invisible() {
        let mut track = track();
        track.add(100, true);
        track.add(100, false);
        assert_eq!(track.render(150), vec![]);
    }

    #[test]
    fn test_release_before_any_press_ignored() {
        let mut track = track();
        track.add(500, false);
        assert_eq!(track.render(600), vec![]);
    }

    #[test]
    fn test_prune_keeps_window() {
        let mut track = Track::new(200, 400);
        track.add(0, true);
        track.add(100, false);
        track.add(900, true);
        // 0 and 100 are more than 400 ticks behind 900
        assert_eq!(track.transitions(), &[Transition::down(900)]);
    }

    #[test]
    fn test_prune_boundary_is_exclusive() {
        let mut track = Track::new(200, 400);
        track.add(0, true);
        track.add(400, false);
        // an edge exactly track_length behind the newest is evicted
        assert_eq!(track.transitions(), &[Transition::up(400)]);
    }

    #[test]
    fn test_early_ticks_never_pruned() {
        let mut track = Track::new(200, 400);
        track.add(0, true);
        track.add(399, false);
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_render_does_not_prune() {
        let mut track = Track::new(200, 400);
        track.add(0, true);
        // no further edges arrive, so the stale press survives any render
        track.render(10_000);
        assert_eq!(track.len(), 1);
        assert_eq!(track.render(10_000), vec![Block::new(0, 200)]);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut track = track();
        track.add(10, true);
        track.add(20, false);
        track.reset();
        assert!(track.is_empty());
        assert_eq!(track.render(100), vec![]);
    }

    #[test]
    fn test_consecutive_presses_trusted() {
        // alternation is the caller's contract; a double press just
        // leaves the older block pinned open
        let mut track = track();
        track.add(900, true);
        track.add(950, true);
        assert_eq!(
            track.render(1000),
            vec![Block::new(0, 100), Block::new(0, 50)]
        );
    }
}
