use serde::{Deserialize, Serialize};

/// One event as pushed over the wire by the input-device adapter.
///
/// `input` is 1-based on the wire; it is adjusted to a board index only
/// when the event is applied. `button` is carried by everything except
/// `note_off`, which deliberately has no button identity: the
/// controller plays one note at a time, so a release closes whichever
/// button is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub event: String,
    pub input: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<usize>,
}

impl RawEvent {
    pub fn new(event: &str, input: u32, button: Option<usize>) -> Self {
        Self {
            event: event.to_string(),
            input,
            button,
        }
    }

    /// Decode the stringly wire event into the closed enum.
    ///
    /// Unknown event names decode to `None`: adapters grow new message
    /// kinds over time and older displays must keep working, so the
    /// dispatcher treats `None` as a deliberate no-op rather than a
    /// fault.
    ///
    /// # Panics
    ///
    /// Panics if an event kind that requires a `button` field arrives
    /// without one. That is a malformed payload, not a new message kind,
    /// and masking it would hide an adapter bug.
    pub fn decode(&self) -> Option<DeviceEvent> {
        let event = match self.event.as_str() {
            "button_down" => DeviceEvent::ButtonDown {
                input: self.input,
                button: self.required_button(),
            },
            "button_up" => DeviceEvent::ButtonUp {
                input: self.input,
                button: self.required_button(),
            },
            "note_on" => DeviceEvent::NoteOn {
                input: self.input,
                button: self.required_button(),
            },
            "note_off" => DeviceEvent::NoteOff { input: self.input },
            _ => return None,
        };
        Some(event)
    }

    fn required_button(&self) -> usize {
        match self.button {
            Some(button) => button,
            None => panic!("event '{}' requires a button field", self.event),
        }
    }
}

/// A recognized device event, `input` still 1-based as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    /// Physical press feedback. Cosmetic only; never touches the model.
    ButtonDown { input: u32, button: usize },
    /// Physical release feedback. Cosmetic only; never touches the model.
    ButtonUp { input: u32, button: usize },
    /// A note started sounding on one button.
    NoteOn { input: u32, button: usize },
    /// The sounding note stopped, on whichever button held it.
    NoteOff { input: u32 },
}

impl DeviceEvent {
    /// The 1-based input number the adapter sent.
    pub fn input(&self) -> u32 {
        match *self {
            DeviceEvent::ButtonDown { input, .. }
            | DeviceEvent::ButtonUp { input, .. }
            | DeviceEvent::NoteOn { input, .. }
            | DeviceEvent::NoteOff { input } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_note_on() {
        let raw = RawEvent::new("note_on", 1, Some(2));
        assert_eq!(
            raw.decode(),
            Some(DeviceEvent::NoteOn { input: 1, button: 2 })
        );
    }

    #[test]
    fn test_decode_note_off_without_button() {
        let raw = RawEvent::new("note_off", 2, None);
        assert_eq!(raw.decode(), Some(DeviceEvent::NoteOff { input: 2 }));
    }

    #[test]
    fn test_decode_cosmetic_events() {
        assert_eq!(
            RawEvent::new("button_down", 1, Some(0)).decode(),
            Some(DeviceEvent::ButtonDown { input: 1, button: 0 })
        );
        assert_eq!(
            RawEvent::new("button_up", 1, Some(0)).decode(),
            Some(DeviceEvent::ButtonUp { input: 1, button: 0 })
        );
    }

    #[test]
    fn test_unknown_event_decodes_to_none() {
        assert_eq!(RawEvent::new("pitch_bend", 1, Some(3)).decode(), None);
        assert_eq!(RawEvent::new("", 1, None).decode(), None);
    }

    #[test]
    #[should_panic(expected = "requires a button field")]
    fn test_missing_button_panics() {
        RawEvent::new("note_on", 1, None).decode();
    }

    #[test]
    fn test_note_off_serializes_without_button() {
        let raw = RawEvent::new("note_off", 1, None);
        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"event":"note_off","input":1}"#);
    }

    #[test]
    fn test_deserialize_wire_payloads() {
        let raw: RawEvent =
            serde_json::from_str(r#"{"event":"note_on","input":1,"button":4}"#).unwrap();
        assert_eq!(raw, RawEvent::new("note_on", 1, Some(4)));

        let raw: RawEvent = serde_json::from_str(r#"{"event":"note_off","input":2}"#).unwrap();
        assert_eq!(raw, RawEvent::new("note_off", 2, None));
    }

    #[test]
    fn test_input_accessor() {
        assert_eq!(DeviceEvent::NoteOff { input: 2 }.input(), 2);
        assert_eq!(DeviceEvent::NoteOn { input: 1, button: 0 }.input(), 1);
    }
}
