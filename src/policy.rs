use serde::{Deserialize, Serialize};
use std::fmt;

/// Class an event request is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventClass {
    /// Must pass the heavy-flavour trigger
    Triggered,
    MinimumBias,
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventClass::Triggered => write!(f, "triggered"),
            EventClass::MinimumBias => write!(f, "minimum-bias"),
        }
    }
}

/// Deterministic gap-trigger schedule.
///
/// Request `n` (counting from 0) is triggered iff `n % inverse_ratio == 0`,
/// so triggered events land on 0, K, 2K, ... independently of any random
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingPolicy {
    inverse_ratio: u32,
    events_requested: u64,
}

impl SamplingPolicy {
    /// `inverse_ratio` must be at least 1; this is enforced by
    /// [`crate::GeneratorConfig::validate`]. A ratio of 0 is treated as 1
    /// here so the schedule arithmetic never divides by zero.
    pub fn new(inverse_ratio: u32) -> Self {
        Self {
            inverse_ratio: inverse_ratio.max(1),
            events_requested: 0,
        }
    }

    pub fn inverse_ratio(&self) -> u32 {
        self.inverse_ratio
    }

    pub fn events_requested(&self) -> u64 {
        self.events_requested
    }

    pub fn class_of(&self, request_index: u64) -> EventClass {
        if request_index % u64::from(self.inverse_ratio) == 0 {
            EventClass::Triggered
        } else {
            EventClass::MinimumBias
        }
    }

    /// Class of the next request, without consuming it.
    pub fn next_class(&self) -> EventClass {
        self.class_of(self.events_requested)
    }

    /// Mark the current request as served.
    pub fn advance(&mut self) {
        self.events_requested += 1;
    }

    /// Classify the next request and consume it.
    pub fn should_trigger(&mut self) -> bool {
        let class = self.next_class();
        self.advance();
        class == EventClass::Triggered
    }

    /// Classes of the next `n` requests. Does not advance the counter.
    pub fn schedule(&self, n: u64) -> impl Iterator<Item = EventClass> + '_ {
        let start = self.events_requested;
        (start..start.saturating_add(n)).map(move |i| self.class_of(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_five_twelve_requests() {
        let mut policy = SamplingPolicy::new(5);
        let triggered: Vec<u64> = (0..12)
            .filter(|_| policy.should_trigger())
            .collect();
        assert_eq!(triggered, vec![0, 5, 10]);
        assert_eq!(policy.events_requested(), 12);
    }

    #[test]
    fn test_ratio_one_triggers_everything() {
        let mut policy = SamplingPolicy::new(1);
        assert!((0..20).all(|_| policy.should_trigger()));
    }

    #[test]
    fn test_triggered_indices_match_multiples() {
        for k in 1..=9u32 {
            let mut policy = SamplingPolicy::new(k);
            for n in 0..50u64 {
                let expected = n % u64::from(k) == 0;
                assert_eq!(policy.should_trigger(), expected, "k={} n={}", k, n);
            }
        }
    }

    #[test]
    fn test_next_class_does_not_advance() {
        let mut policy = SamplingPolicy::new(3);
        assert_eq!(policy.next_class(), EventClass::Triggered);
        assert_eq!(policy.next_class(), EventClass::Triggered);
        assert_eq!(policy.events_requested(), 0);
        policy.advance();
        assert_eq!(policy.next_class(), EventClass::MinimumBias);
    }

    #[test]
    fn test_schedule_preview() {
        let mut policy = SamplingPolicy::new(2);
        policy.advance();
        let classes: Vec<EventClass> = policy.schedule(4).collect();
        assert_eq!(
            classes,
            vec![
                EventClass::MinimumBias,
                EventClass::Triggered,
                EventClass::MinimumBias,
                EventClass::Triggered
            ]
        );
        assert_eq!(policy.events_requested(), 1);
    }

    #[test]
    fn test_zero_ratio_clamped() {
        let policy = SamplingPolicy::new(0);
        assert_eq!(policy.inverse_ratio(), 1);
    }
}
