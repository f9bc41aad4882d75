// Gap-triggered heavy-flavour event sampling.
//
// Every K-th requested event is forced to contain a heavy quark/antiquark
// pair (optionally with a given hadron) inside a rapidity window; all other
// events are minimum-bias. Event production itself is delegated to an
// external engine behind the `EventEngine` trait.
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod generator;
pub mod particle;
pub mod policy;
pub mod presets;
pub mod tally;
pub mod toy_engine;
pub mod trigger;
pub mod window;

pub use config::GeneratorConfig;
pub use engine::{EventEngine, ReplayEngine};
pub use error::{ConfigError, GeneratorError, RecordError};
pub use event::EventRecord;
pub use generator::{EventGenerator, GapTriggeredGenerator};
pub use particle::{Particle, BOTTOM_QUARK, CHARM_QUARK};
pub use policy::{EventClass, SamplingPolicy};
pub use presets::{beauty_enriched, beauty_enriched_in, charm_enriched, charm_enriched_in, preset};
pub use tally::GenerationTally;
pub use toy_engine::{ToyEngine, ToySettings};
pub use trigger::{SelectionOutcome, TriggerPredicate};
pub use window::RapidityWindow;
