/// Receiver for cosmetic button press/release notifications.
///
/// `button_down` and `button_up` wire events exist so the UI can light
/// the physical key the instant it moves, independently of the note
/// model. By the time the sink is called the input has been adjusted to
/// zero-based.
///
/// Implementations: a highlight layer in the real display,
/// `RecordingFeedback` in tests, [`NullFeedback`] when nobody cares.
pub trait ButtonFeedback {
    fn button_down(&mut self, input: usize, button: usize);
    fn button_up(&mut self, input: usize, button: usize);
}

/// Feedback sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl ButtonFeedback for NullFeedback {
    fn button_down(&mut self, _input: usize, _button: usize) {}

    fn button_up(&mut self, _input: usize, _button: usize) {}
}
