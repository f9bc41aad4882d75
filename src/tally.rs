use std::fmt;

use crate::policy::EventClass;

/// Running counters of a generator.
///
/// Every engine invocation is counted, not only the ones that end a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationTally {
    /// Requests that returned an event
    pub requests: u64,
    pub triggered: u64,
    pub minimum_bias: u64,
    pub engine_calls: u64,
    pub engine_failures: u64,
    /// Triggered-class candidates discarded by the trigger
    pub predicate_rejections: u64,
}

impl GenerationTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_accepted(&mut self, class: EventClass) {
        self.requests += 1;
        match class {
            EventClass::Triggered => self.triggered += 1,
            EventClass::MinimumBias => self.minimum_bias += 1,
        }
    }

    /// Fraction of successfully generated triggered-class candidates that
    /// passed the trigger. 0 before any candidate was seen.
    pub fn trigger_efficiency(&self) -> f64 {
        let candidates = self.triggered + self.predicate_rejections;
        if candidates == 0 {
            0.0
        } else {
            self.triggered as f64 / candidates as f64
        }
    }

    /// Average engine invocations per returned event
    pub fn calls_per_request(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.engine_calls as f64 / self.requests as f64
        }
    }
}

impl fmt::Display for GenerationTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation tally")?;
        writeln!(f, "  requests:             {}", self.requests)?;
        writeln!(f, "  triggered:            {}", self.triggered)?;
        writeln!(f, "  minimum-bias:         {}", self.minimum_bias)?;
        writeln!(f, "  engine calls:         {}", self.engine_calls)?;
        writeln!(f, "  engine failures:      {}", self.engine_failures)?;
        writeln!(f, "  predicate rejections: {}", self.predicate_rejections)?;
        write!(f, "  trigger efficiency:   {:.4}", self.trigger_efficiency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally() {
        let tally = GenerationTally::new();
        assert_eq!(tally.trigger_efficiency(), 0.0);
        assert_eq!(tally.calls_per_request(), 0.0);
    }

    #[test]
    fn test_efficiency() {
        let mut tally = GenerationTally::new();
        tally.record_accepted(EventClass::Triggered);
        tally.record_accepted(EventClass::MinimumBias);
        tally.predicate_rejections = 3;
        tally.engine_calls = 6;
        assert_eq!(tally.requests, 2);
        assert_eq!(tally.triggered, 1);
        assert_eq!(tally.minimum_bias, 1);
        assert_eq!(tally.trigger_efficiency(), 0.25);
        assert_eq!(tally.calls_per_request(), 3.0);
    }

    #[test]
    fn test_display() {
        let tally = GenerationTally::new();
        let text = tally.to_string();
        assert!(text.contains("requests:"));
        assert!(text.contains("trigger efficiency:   0.0000"));
    }
}
