// Wire events from the input-device adapter and their decoded form

mod device_event;
mod feedback;

pub use device_event::{DeviceEvent, RawEvent};
pub use feedback::{ButtonFeedback, NullFeedback};
