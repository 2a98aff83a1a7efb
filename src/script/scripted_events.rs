use crate::event::DeviceEvent;
use crate::model::Tick;

/// One device event scheduled for a specific tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedEvent {
    pub tick: Tick,
    pub event: DeviceEvent,
}

impl ScriptedEvent {
    pub fn new(tick: Tick, event: DeviceEvent) -> Self {
        Self { tick, event }
    }
}

/// A pre-built event sequence handed out tick by tick.
///
/// Events are sorted by tick on construction (stably, so same-tick
/// events keep their order) and each is delivered exactly once. This
/// mirrors how a live adapter interleaves event delivery with the frame
/// loop: after `tick()`, everything due is applied before rendering.
#[derive(Debug, Clone)]
pub struct ScriptedEvents {
    events: Vec<ScriptedEvent>,
    cursor: usize,
}

impl ScriptedEvents {
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        events.sort_by_key(|e| e.tick);
        Self { events, cursor: 0 }
    }

    /// Return every not-yet-delivered event scheduled at or before
    /// `tick`, in schedule order.
    pub fn poll_up_to(&mut self, tick: Tick) -> Vec<DeviceEvent> {
        let mut delivered = Vec::new();
        while let Some(next) = self.events.get(self.cursor) {
            if next.tick > tick {
                break;
            }
            delivered.push(next.event);
            self.cursor += 1;
        }
        delivered
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
