use tracing::{debug, warn};

use crate::config::{ConfigError, DisplayConfig};
use crate::event::{ButtonFeedback, DeviceEvent, NullFeedback, RawEvent};
use crate::model::{Block, ButtonBoard, Tick};

/// The whole display model: the tick clock plus one board per input.
///
/// A single external driver owns the frame loop and calls `tick()`
/// once per frame, feeds whatever events arrived, then snapshots
/// `display()` for the renderer. Nothing here locks; keep all three on
/// one thread.
pub struct DisplayState {
    config: DisplayConfig,
    boards: Vec<ButtonBoard>,
    tick: Tick,
    feedback: Box<dyn ButtonFeedback>,
}

impl DisplayState {
    /// Validate `config` and build the boards for it.
    pub fn new(config: DisplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let boards = (0..config.inputs)
            .map(|_| ButtonBoard::new(config.buttons, config.track_limit, config.track_length))
            .collect();
        Ok(Self {
            config,
            boards,
            tick: 0,
            feedback: Box::new(NullFeedback),
        })
    }

    /// Replace the sink for cosmetic press/release notifications.
    pub fn set_feedback(&mut self, feedback: Box<dyn ButtonFeedback>) {
        self.feedback = feedback;
    }

    /// Advance the clock by one frame.
    ///
    /// If the counter wraps, every stored edge would suddenly sit in the
    /// far future, so the whole history is discarded instead of rendered
    /// garbled.
    pub fn tick(&mut self) {
        let previous = self.tick;
        self.tick = self.tick.wrapping_add(1);
        if self.tick < previous {
            warn!("tick counter wrapped, resetting all boards");
            self.reset();
        }
    }

    /// Current frame number.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Feed one wire event from the device adapter.
    ///
    /// Unknown event names are logged and dropped so newer adapters can
    /// keep talking to this display.
    pub fn event(&mut self, raw: &RawEvent) {
        match raw.decode() {
            Some(event) => self.apply(event),
            None => debug!(event = %raw.event, "ignoring unrecognized device event"),
        }
    }

    /// Feed one decoded event, stamped with the current tick.
    ///
    /// # Panics
    ///
    /// Panics if the 1-based input number is zero or beyond the
    /// configured input count, or if a note's button index is beyond the
    /// configured button count. Either means the adapter and this
    /// display disagree about the hardware, which cannot be papered
    /// over.
    pub fn apply(&mut self, event: DeviceEvent) {
        let tick = self.tick;
        match event {
            DeviceEvent::ButtonDown { input, button } => {
                self.feedback.button_down(input_index(input), button);
            }
            DeviceEvent::ButtonUp { input, button } => {
                self.feedback.button_up(input_index(input), button);
            }
            DeviceEvent::NoteOn { input, button } => {
                self.boards[input_index(input)].note_on(tick, button);
            }
            DeviceEvent::NoteOff { input } => {
                self.boards[input_index(input)].note_off(tick);
            }
        }
    }

    /// Snapshot of the blocks to paint, indexed `[input][button]`.
    pub fn display(&self) -> Vec<Vec<Vec<Block>>> {
        self.boards.iter().map(|board| board.render(self.tick)).collect()
    }

    /// Release everything and forget all history. The clock keeps its
    /// value.
    pub fn reset(&mut self) {
        for board in &mut self.boards {
            board.reset();
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn board(&self, index: usize) -> &ButtonBoard {
        &self.boards[index]
    }

    #[cfg(test)]
    fn set_tick(&mut self, tick: Tick) {
        self.tick = tick;
    }
}

/// Adjust a 1-based wire input number to a board index.
fn input_index(input: u32) -> usize {
    (input as usize)
        .checked_sub(1)
        .expect("input numbers on the wire are 1-based")
}
