// Heavy-flavour trigger applied to triggered-class candidates.
//
// Two conditions are tracked during a single forward pass over the record:
//
// * parton level: some particle has, among its direct daughters, a
//   `+quark` and a `-quark` entry, and at least one daughter of that same
//   list (not necessarily one of the quarks) lies inside the quark window;
// * hadron level: some particle with `|pdg| == target_hadron_species` lies
//   inside the hadron window. Always satisfied when no hadron is targeted.
//
// Both flags only ever flip from false to true, and the event is accepted as
// soon as both are set.

use crate::config::GeneratorConfig;
use crate::event::EventRecord;
use crate::window::RapidityWindow;

/// Which trigger conditions a record satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionOutcome {
    pub parton_level: bool,
    pub hadron_level: bool,
}

impl SelectionOutcome {
    pub fn accepted(&self) -> bool {
        self.parton_level && self.hadron_level
    }
}

/// Stateless selection derived from a [`GeneratorConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPredicate {
    quark_species: i32,
    quark_window: RapidityWindow,
    hadron_species: i32,
    hadron_window: RapidityWindow,
}

impl From<&GeneratorConfig> for TriggerPredicate {
    fn from(config: &GeneratorConfig) -> Self {
        Self::new(config)
    }
}

impl TriggerPredicate {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            quark_species: config.quark_species,
            quark_window: config.quark_window,
            // compared against |pdg|, so the sign of the target is irrelevant
            hadron_species: config.target_hadron_species.abs(),
            hadron_window: config.hadron_window,
        }
    }

    /// Decide whether a generated event passes the trigger.
    pub fn accepts(&self, record: &EventRecord) -> bool {
        self.scan(record, true).accepted()
    }

    /// Same pass as [`accepts`](Self::accepts) but runs to the end of the
    /// record, reporting which conditions were met.
    pub fn inspect(&self, record: &EventRecord) -> SelectionOutcome {
        self.scan(record, false)
    }

    fn scan(&self, record: &EventRecord, stop_when_accepted: bool) -> SelectionOutcome {
        let mut outcome = SelectionOutcome {
            parton_level: false,
            hadron_level: self.hadron_species == 0,
        };

        for (index, particle) in record.iter().enumerate() {
            if !outcome.parton_level && self.has_quark_pair_in_window(record, index) {
                outcome.parton_level = true;
            }

            if !outcome.hadron_level
                && particle.abs_pdg() == self.hadron_species
                && self.hadron_window.contains(particle.rapidity)
            {
                outcome.hadron_level = true;
            }

            if stop_when_accepted && outcome.accepted() {
                break;
            }
        }

        outcome
    }

    fn has_quark_pair_in_window(&self, record: &EventRecord, index: usize) -> bool {
        let mut has_quark = false;
        let mut has_antiquark = false;
        let mut in_window = false;
        for daughter in record.daughters(index) {
            if daughter.pdg == self.quark_species {
                has_quark = true;
            }
            if daughter.pdg == -self.quark_species {
                has_antiquark = true;
            }
            if self.quark_window.contains(daughter.rapidity) {
                in_window = true;
            }
        }
        has_quark && has_antiquark && in_window
    }
}

/// Evaluate the trigger of `config` on `record`.
pub fn accepts(record: &EventRecord, config: &GeneratorConfig) -> bool {
    TriggerPredicate::new(config).accepts(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::presets::charm_enriched;

    fn pair_record(y_quark: f64, y_antiquark: f64) -> EventRecord {
        EventRecord::new(vec![
            Particle::new(21, 0.0, vec![1, 2]),
            Particle::stable(4, y_quark),
            Particle::stable(-4, y_antiquark),
        ])
        .unwrap()
    }

    #[test]
    fn test_pair_in_window_accepted() {
        let config = charm_enriched(5);
        assert!(accepts(&pair_record(0.0, 0.0), &config));
    }

    #[test]
    fn test_pair_outside_window_rejected() {
        let config = charm_enriched(5);
        assert!(!accepts(&pair_record(2.0, 2.0), &config));
    }

    #[test]
    fn test_one_daughter_in_window_is_enough() {
        let config = charm_enriched(5);
        assert!(accepts(&pair_record(2.0, 0.3), &config));
    }

    #[test]
    fn test_window_bounds_excluded() {
        let config = charm_enriched(5);
        assert!(!accepts(&pair_record(1.5, -1.5), &config));
        assert!(!accepts(&pair_record(-1.5, 1.5), &config));
    }

    #[test]
    fn test_wrong_species_rejected() {
        let config = crate::presets::beauty_enriched(5);
        assert!(!accepts(&pair_record(0.0, 0.0), &config));
    }

    #[test]
    fn test_inspect_reports_each_level() {
        let config = charm_enriched(5).with_hadron_trigger(421, -0.5, 0.5);
        let predicate = TriggerPredicate::new(&config);

        let outcome = predicate.inspect(&pair_record(0.0, 0.0));
        assert_eq!(
            outcome,
            SelectionOutcome {
                parton_level: true,
                hadron_level: false
            }
        );
        assert!(!outcome.accepted());

        let no_target = TriggerPredicate::new(&charm_enriched(5));
        let outcome = no_target.inspect(&EventRecord::empty());
        assert!(outcome.hadron_level);
        assert!(!outcome.parton_level);
    }

    #[test]
    fn test_negative_hadron_target_matches_both_charges() {
        let mut config = charm_enriched(5);
        config.target_hadron_species = -421;
        config.set_hadron_rapidity(-0.5, 0.5);
        let predicate = TriggerPredicate::new(&config);

        for pdg in [421, -421] {
            let mut particles = vec![
                Particle::new(21, 0.0, vec![1, 2]),
                Particle::stable(4, 0.0),
                Particle::stable(-4, 0.0),
            ];
            particles.push(Particle::stable(pdg, 0.1));
            let record = EventRecord::new(particles).unwrap();
            assert!(predicate.accepts(&record), "hadron {} not matched", pdg);
        }
    }

    #[test]
    fn test_empty_record_rejected() {
        let config = charm_enriched(1);
        assert!(!accepts(&EventRecord::empty(), &config));
    }
}
