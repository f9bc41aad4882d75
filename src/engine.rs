// Boundary to the Monte Carlo engine that actually produces collisions
use std::collections::VecDeque;

use crate::event::EventRecord;

/// Capabilities required from the underlying event engine.
///
/// The engine owns its random state and event buffer. After
/// `generate_one` returns true, `current_event` exposes the produced record
/// until the next call to `generate_one`.
pub trait EventEngine {
    /// Try to produce one event, reporting whether it succeeded.
    fn generate_one(&mut self) -> bool;

    fn current_event(&self) -> &EventRecord;
}

impl<E: EventEngine + ?Sized> EventEngine for Box<E> {
    fn generate_one(&mut self) -> bool {
        (**self).generate_one()
    }

    fn current_event(&self) -> &EventRecord {
        (**self).current_event()
    }
}

/// Engine replaying a fixed sequence of outcomes.
///
/// `Some(record)` is a successful generation of `record`, `None` a failed
/// attempt. Once the sequence is used up every call fails.
#[derive(Debug, Clone, Default)]
pub struct ReplayEngine {
    queue: VecDeque<Option<EventRecord>>,
    current: EventRecord,
    calls: u64,
}

impl ReplayEngine {
    pub fn new(outcomes: impl IntoIterator<Item = Option<EventRecord>>) -> Self {
        Self {
            queue: outcomes.into_iter().collect(),
            current: EventRecord::empty(),
            calls: 0,
        }
    }

    /// Replays only successful generations
    pub fn from_records(records: impl IntoIterator<Item = EventRecord>) -> Self {
        Self::new(records.into_iter().map(Some))
    }

    pub fn push_record(&mut self, record: EventRecord) {
        self.queue.push_back(Some(record));
    }

    pub fn push_failure(&mut self) {
        self.queue.push_back(None);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Number of `generate_one` calls so far
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl EventEngine for ReplayEngine {
    fn generate_one(&mut self) -> bool {
        self.calls += 1;
        match self.queue.pop_front() {
            Some(Some(record)) => {
                self.current = record;
                true
            }
            _ => false,
        }
    }

    fn current_event(&self) -> &EventRecord {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    fn single(pdg: i32) -> EventRecord {
        EventRecord::new(vec![Particle::stable(pdg, 0.0)]).unwrap()
    }

    #[test]
    fn test_replay_order() {
        let mut engine = ReplayEngine::new(vec![Some(single(211)), None, Some(single(-211))]);
        assert_eq!(engine.remaining(), 3);

        assert!(engine.generate_one());
        assert_eq!(engine.current_event()[0].pdg, 211);

        assert!(!engine.generate_one());

        assert!(engine.generate_one());
        assert_eq!(engine.current_event()[0].pdg, -211);
        assert_eq!(engine.calls(), 3);
    }

    #[test]
    fn test_exhausted_engine_fails() {
        let mut engine = ReplayEngine::from_records(vec![single(22)]);
        assert!(engine.generate_one());
        assert!(!engine.generate_one());
        assert!(!engine.generate_one());
        // last successful record stays readable
        assert_eq!(engine.current_event()[0].pdg, 22);
    }

    #[test]
    fn test_boxed_engine() {
        let mut engine: Box<dyn EventEngine> = Box::new(ReplayEngine::from_records(vec![single(111)]));
        assert!(engine.generate_one());
        assert_eq!(engine.current_event().len(), 1);
    }
}
