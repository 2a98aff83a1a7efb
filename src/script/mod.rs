// Pre-built event sequences for demos and tests

mod riff;
mod scripted_events;

pub use riff::random_riff;
pub use scripted_events::{ScriptedEvent, ScriptedEvents};
