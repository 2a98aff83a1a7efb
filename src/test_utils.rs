//! Test utilities for scripting device events and recording feedback.
//!
//! This module provides helpers for creating test fixtures in a fluent manner.

#[cfg(test)]
pub mod scripts {
    use crate::event::DeviceEvent;
    use crate::model::Tick;
    use crate::script::{ScriptedEvent, ScriptedEvents};

    /// Builder for event scripts.
    ///
    /// `press` and `release` schedule the cosmetic and note events
    /// together, the way the real adapter sends them.
    #[derive(Debug, Default)]
    pub struct ScriptBuilder {
        events: Vec<ScriptedEvent>,
    }

    impl ScriptBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn press(mut self, tick: Tick, input: u32, button: usize) -> Self {
            self.events
                .push(ScriptedEvent::new(tick, DeviceEvent::ButtonDown { input, button }));
            self.events
                .push(ScriptedEvent::new(tick, DeviceEvent::NoteOn { input, button }));
            self
        }

        pub fn release(mut self, tick: Tick, input: u32, button: usize) -> Self {
            self.events
                .push(ScriptedEvent::new(tick, DeviceEvent::ButtonUp { input, button }));
            self.events
                .push(ScriptedEvent::new(tick, DeviceEvent::NoteOff { input }));
            self
        }

        pub fn build(self) -> ScriptedEvents {
            ScriptedEvents::new(self.events)
        }
    }
}

#[cfg(test)]
pub mod feedback {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::event::ButtonFeedback;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FeedbackCall {
        Down { input: usize, button: usize },
        Up { input: usize, button: usize },
    }

    /// Feedback sink that records every call for assertions.
    ///
    /// Clone it before boxing; all clones share the call log.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingFeedback {
        calls: Rc<RefCell<Vec<FeedbackCall>>>,
    }

    impl RecordingFeedback {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<FeedbackCall> {
            self.calls.borrow().clone()
        }
    }

    impl ButtonFeedback for RecordingFeedback {
        fn button_down(&mut self, input: usize, button: usize) {
            self.calls.borrow_mut().push(FeedbackCall::Down { input, button });
        }

        fn button_up(&mut self, input: usize, button: usize) {
            self.calls.borrow_mut().push(FeedbackCall::Up { input, button });
        }
    }
}
