use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::EventEngine;
use crate::event::EventRecord;
use crate::particle::{Particle, CHARM_QUARK};

/// Tuning knobs of the synthetic engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ToySettings {
    /// Probability that a `generate_one` call fails
    pub failure_probability: f64,
    /// Probability that the hard process produces a heavy-quark pair
    pub heavy_pair_probability: f64,
    pub quark_species: i32,
    /// Rapidities are drawn uniformly from `[-rapidity_spread, rapidity_spread)`
    pub rapidity_spread: f64,
    /// Number of final-state light hadrons per event
    pub light_multiplicity: usize,
    /// Heavy hadron species attached to heavy-pair events, 0 for none
    pub hadron_species: i32,
    pub hadron_probability: f64,
}

impl Default for ToySettings {
    fn default() -> Self {
        Self {
            failure_probability: 0.0,
            heavy_pair_probability: 0.1,
            quark_species: CHARM_QUARK,
            rapidity_spread: 4.0,
            light_multiplicity: 8,
            hadron_species: 0,
            hadron_probability: 0.0,
        }
    }
}

/// Synthetic event engine with a simple two-level decay tree.
///
/// Index 0 is the collision system whose daughters are the hard partons
/// (a light parton pair, plus a heavy quark pair when one is produced).
/// Final-state hadrons follow and have no daughters. Only the structure
/// matters here, the kinematics are not physical.
#[derive(Debug, Clone)]
pub struct ToyEngine<R = StdRng> {
    settings: ToySettings,
    rng: R,
    current: EventRecord,
    generated: u64,
}

impl ToyEngine<StdRng> {
    pub fn seeded(settings: ToySettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ToyEngine<R> {
    pub fn with_rng(settings: ToySettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            current: EventRecord::empty(),
            generated: 0,
        }
    }

    pub fn settings(&self) -> &ToySettings {
        &self.settings
    }

    /// Number of successfully generated events
    pub fn generated(&self) -> u64 {
        self.generated
    }

    fn sample_rapidity(&mut self) -> f64 {
        let xi: f64 = self.rng.gen();
        self.settings.rapidity_spread * (2.0 * xi - 1.0)
    }

    fn sample_event(&mut self) -> EventRecord {
        let mut particles = vec![Particle::new(90, 0.0, Vec::new())];
        let mut hard = Vec::new();

        // light parton pair from the hard scattering
        for pdg in [21, 21] {
            hard.push(particles.len());
            let y = self.sample_rapidity();
            particles.push(Particle::stable(pdg, y));
        }

        let xi: f64 = self.rng.gen();
        let heavy_pair = xi < self.settings.heavy_pair_probability;
        if heavy_pair {
            let q = self.settings.quark_species;
            for pdg in [q, -q] {
                hard.push(particles.len());
                let y = self.sample_rapidity();
                particles.push(Particle::stable(pdg, y));
            }
        }
        particles[0].daughters = hard;

        const LIGHT: [i32; 3] = [211, -211, 111];
        for _ in 0..self.settings.light_multiplicity {
            let pdg = LIGHT[self.rng.gen_range(0..LIGHT.len())];
            let y = self.sample_rapidity();
            particles.push(Particle::stable(pdg, y));
        }

        if heavy_pair && self.settings.hadron_species != 0 {
            let xi: f64 = self.rng.gen();
            if xi < self.settings.hadron_probability {
                let sign = if self.rng.gen::<bool>() { 1 } else { -1 };
                let y = self.sample_rapidity();
                particles.push(Particle::stable(sign * self.settings.hadron_species.abs(), y));
            }
        }

        EventRecord::from_trusted(particles)
    }
}

impl<R: Rng> EventEngine for ToyEngine<R> {
    fn generate_one(&mut self) -> bool {
        let xi: f64 = self.rng.gen();
        if xi < self.settings.failure_probability {
            return false;
        }
        self.current = self.sample_event();
        self.generated += 1;
        true
    }

    fn current_event(&self) -> &EventRecord {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_events() {
        let mut a = ToyEngine::seeded(ToySettings::default(), 7);
        let mut b = ToyEngine::seeded(ToySettings::default(), 7);
        for _ in 0..50 {
            assert_eq!(a.generate_one(), b.generate_one());
            assert_eq!(a.current_event(), b.current_event());
        }
    }

    #[test]
    fn test_record_structure() {
        let settings = ToySettings {
            heavy_pair_probability: 1.0,
            light_multiplicity: 5,
            ..ToySettings::default()
        };
        let mut engine = ToyEngine::seeded(settings, 1);
        assert!(engine.generate_one());
        let record = engine.current_event();

        // system + 2 light partons + heavy pair + 5 hadrons
        assert_eq!(record.len(), 10);
        assert_eq!(record[0].daughters, vec![1, 2, 3, 4]);
        let ids: Vec<i32> = record.daughters(0).map(|p| p.pdg).collect();
        assert_eq!(ids, vec![21, 21, 4, -4]);
        assert!(record.iter().skip(1).all(|p| p.is_final_state()));
        assert!(record.iter().all(|p| p.rapidity.abs() <= 4.0));
    }

    #[test]
    fn test_no_heavy_pair() {
        let settings = ToySettings {
            heavy_pair_probability: 0.0,
            ..ToySettings::default()
        };
        let mut engine = ToyEngine::seeded(settings, 3);
        for _ in 0..20 {
            assert!(engine.generate_one());
            assert!(engine.current_event().iter().all(|p| p.abs_pdg() != 4));
        }
        assert_eq!(engine.generated(), 20);
    }

    #[test]
    fn test_always_failing_engine() {
        let settings = ToySettings {
            failure_probability: 1.0,
            ..ToySettings::default()
        };
        let mut engine = ToyEngine::seeded(settings, 3);
        assert!(!engine.generate_one());
        assert!(engine.current_event().is_empty());
        assert_eq!(engine.generated(), 0);
    }

    #[test]
    fn test_hadron_attached_to_heavy_pair() {
        let settings = ToySettings {
            heavy_pair_probability: 1.0,
            hadron_species: 421,
            hadron_probability: 1.0,
            ..ToySettings::default()
        };
        let mut engine = ToyEngine::seeded(settings, 11);
        assert!(engine.generate_one());
        let last = engine.current_event().iter().last().unwrap();
        assert_eq!(last.abs_pdg(), 421);
    }
}
