use crate::model::{Block, Button, Tick};

/// All buttons belonging to one input device.
#[derive(Debug, Clone)]
pub struct ButtonBoard {
    buttons: Vec<Button>,
}

impl ButtonBoard {
    pub fn new(buttons: usize, track_limit: Tick, track_length: Tick) -> Self {
        Self {
            buttons: (0..buttons)
                .map(|_| Button::new(track_limit, track_length))
                .collect(),
        }
    }

    /// Press the button at `button`.
    ///
    /// # Panics
    ///
    /// Panics if `button` is out of range. An out-of-range index means
    /// the device adapter and this display were configured for different
    /// hardware; masking that would silently eat notes.
    pub fn note_on(&mut self, tick: Tick, button: usize) {
        self.buttons[button].note_on(tick);
    }

    /// Release whichever button is held.
    ///
    /// The controller reports releases without a button number (only one
    /// note sounds at a time), so the release is broadcast; buttons that
    /// are already up ignore it.
    pub fn note_off(&mut self, tick: Tick) {
        for button in &mut self.buttons {
            button.note_off(tick);
        }
    }

    /// Blocks per button at `tick`, indexed like the buttons.
    pub fn render(&self, tick: Tick) -> Vec<Vec<Block>> {
        self.buttons.iter().map(|b| b.render(tick)).collect()
    }

    /// Release every button and forget all history.
    pub fn reset(&mut self) {
        for button in &mut self.buttons {
            button.reset();
        }
    }

    pub fn button(&self, index: usize) -> &Button {
        &self.buttons[index]
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }
}
