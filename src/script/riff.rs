use rand::Rng;

use crate::config::DisplayConfig;
use crate::event::DeviceEvent;
use crate::model::Tick;
use crate::script::{ScriptedEvent, ScriptedEvents};

/// Generate a plausible noodling session over the configured inputs.
///
/// Each input improvises independently: pick a button, hold it for a
/// handful of frames, rest, repeat until `ticks` runs out. Presses emit
/// the cosmetic `ButtonDown`/`ButtonUp` pair alongside the note events,
/// the way the real adapter does. Seed the rng to make a riff
/// reproducible.
pub fn random_riff(config: &DisplayConfig, rng: &mut impl Rng, ticks: Tick) -> ScriptedEvents {
    let mut events = Vec::new();
    for input in 1..=config.inputs as u32 {
        let mut tick: Tick = rng.gen_range(0..20);
        while tick < ticks {
            let button = rng.gen_range(0..config.buttons);
            let hold: Tick = rng.gen_range(5..45);
            let gap: Tick = rng.gen_range(2..50);
            events.push(ScriptedEvent::new(
                tick,
                DeviceEvent::ButtonDown { input, button },
            ));
            events.push(ScriptedEvent::new(
                tick,
                DeviceEvent::NoteOn { input, button },
            ));
            let release = tick + hold;
            events.push(ScriptedEvent::new(
                release,
                DeviceEvent::ButtonUp { input, button },
            ));
            events.push(ScriptedEvent::new(
                release,
                DeviceEvent::NoteOff { input },
            ));
            tick = release + gap;
        }
    }
    ScriptedEvents::new(events)
}
