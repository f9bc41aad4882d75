// Gap-triggered event generation.
//
// `GapTriggeredGenerator` wraps an `EventEngine` and serves one event
// per request. Requests follow the fixed schedule of a `SamplingPolicy`:
// minimum-bias requests take the first event the engine manages to
// produce, triggered requests keep regenerating until the event passes the
// `TriggerPredicate`. Engine failures and trigger rejections are retried
// silently; there is no retry limit unless one is set with
// `GapTriggeredGenerator::with_max_attempts`.

use tracing::{debug, trace, warn, Level};

use crate::config::GeneratorConfig;
use crate::engine::EventEngine;
use crate::error::{ConfigError, GeneratorError};
use crate::event::EventRecord;
use crate::policy::{EventClass, SamplingPolicy};
use crate::tally::GenerationTally;
use crate::trigger::TriggerPredicate;

/// Contract a host framework drives a generator through.
pub trait EventGenerator {
    /// Class the next request will be served with
    fn next_class(&self) -> EventClass;

    /// Produce the next accepted event.
    fn generate_event(&mut self) -> Result<&EventRecord, GeneratorError>;
}

/// Result of a single engine invocation inside a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Accepted,
    EngineFailure,
    Rejected,
}

pub struct GapTriggeredGenerator<E> {
    config: GeneratorConfig,
    policy: SamplingPolicy,
    predicate: TriggerPredicate,
    engine: E,
    max_attempts: Option<u64>,
    tally: GenerationTally,
}

impl<E: EventEngine> GapTriggeredGenerator<E> {
    /// Fails if `config` does not pass [`GeneratorConfig::validate`].
    pub fn new(config: GeneratorConfig, engine: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            policy: SamplingPolicy::new(config.inverse_trigger_ratio),
            predicate: TriggerPredicate::new(&config),
            config,
            engine,
            max_attempts: None,
            tally: GenerationTally::new(),
        })
    }

    /// Cap the engine invocations spent on a single request.
    ///
    /// When the cap is hit the request fails with
    /// [`GeneratorError::AttemptsExhausted`] and the schedule does not
    /// advance, so the next call retries the same class. A cap of 0 is
    /// raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn policy(&self) -> &SamplingPolicy {
        &self.policy
    }

    pub fn predicate(&self) -> &TriggerPredicate {
        &self.predicate
    }

    pub fn tally(&self) -> &GenerationTally {
        &self.tally
    }

    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }

    pub fn events_requested(&self) -> u64 {
        self.policy.events_requested()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Serve one request.
    ///
    /// The returned record is the engine's current event and stays valid
    /// until the generator is used again.
    pub fn produce_event(&mut self) -> Result<&EventRecord, GeneratorError> {
        let class = self.policy.next_class();
        let request = self.policy.events_requested();

        let mut attempts = 0u64;
        let mut accepted = false;
        while !accepted && self.max_attempts.map_or(true, |max| attempts < max) {
            attempts += 1;
            accepted = self.attempt(class, request) == Attempt::Accepted;
        }

        if !accepted {
            warn!(request, %class, attempts, "attempt cap reached without an accepted event");
            return Err(GeneratorError::AttemptsExhausted { class, attempts });
        }

        self.policy.advance();
        self.tally.record_accepted(class);
        debug!(request, %class, attempts, "event accepted");
        Ok(self.engine.current_event())
    }

    /// Serve `n` requests, handing each accepted event to `sink` together
    /// with its request index and class.
    pub fn run<F>(&mut self, n: u64, mut sink: F) -> Result<(), GeneratorError>
    where
        F: FnMut(u64, EventClass, &EventRecord),
    {
        for _ in 0..n {
            let request = self.policy.events_requested();
            let class = self.policy.next_class();
            let event = self.produce_event()?;
            sink(request, class, event);
        }
        debug!(
            n,
            requests = self.tally.requests,
            triggered = self.tally.triggered,
            minimum_bias = self.tally.minimum_bias,
            engine_calls = self.tally.engine_calls,
            engine_failures = self.tally.engine_failures,
            predicate_rejections = self.tally.predicate_rejections,
            trigger_efficiency = self.tally.trigger_efficiency(),
            "run finished"
        );
        Ok(())
    }

    fn attempt(&mut self, class: EventClass, request: u64) -> Attempt {
        self.tally.engine_calls += 1;
        if !self.engine.generate_one() {
            self.tally.engine_failures += 1;
            trace!(request, %class, "engine failed to generate an event, retrying");
            return Attempt::EngineFailure;
        }

        if class == EventClass::MinimumBias {
            return Attempt::Accepted;
        }

        let event = self.engine.current_event();
        if self.predicate.accepts(event) {
            return Attempt::Accepted;
        }

        self.tally.predicate_rejections += 1;
        if tracing::enabled!(Level::TRACE) {
            let outcome = self.predicate.inspect(event);
            trace!(
                request,
                parton_level = outcome.parton_level,
                hadron_level = outcome.hadron_level,
                "candidate rejected by trigger"
            );
        }
        Attempt::Rejected
    }
}

impl<E: EventEngine> EventGenerator for GapTriggeredGenerator<E> {
    fn next_class(&self) -> EventClass {
        self.policy.next_class()
    }

    fn generate_event(&mut self) -> Result<&EventRecord, GeneratorError> {
        self.produce_event()
    }
}
