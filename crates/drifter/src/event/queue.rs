use std::collections::VecDeque;

use super::types::DrifterEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct PendingEvent {
    pub tick: u32,
    pub sequence: u32,
    pub event: DrifterEvent,
}

pub struct EventQueue {
    pending: VecDeque<PendingEvent>,
    next_sequence: u32,
    max_pending: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new(256)
    }
}

impl EventQueue {
    pub fn new(max_pending: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(max_pending),
            next_sequence: 0,
            max_pending: max_pending.max(1),
        }
    }

    pub fn push(&mut self, tick: u32, event: DrifterEvent) -> u32 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);

        if self.pending.len() >= self.max_pending {
            self.evict_one();
        }

        self.pending.push_back(PendingEvent {
            tick,
            sequence,
            event,
        });

        sequence
    }

    pub fn drain(&mut self) -> Vec<PendingEvent> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn evict_one(&mut self) {
        match self.pending.iter().position(|e| e.event.is_transient()) {
            Some(idx) => {
                self.pending.remove(idx);
            }
            None => {
                self.pending.pop_front();
            }
        }
    }
}
