use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::RecordError;
use crate::particle::Particle;

/// Particle record of one generated event.
///
/// The decay tree is stored flat: every particle refers to its direct
/// daughters by index into the same array. Construction checks that every
/// daughter index is in range, so lookups during selection never go out of
/// bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventRecord {
    particles: Vec<Particle>,
}

impl EventRecord {
    pub fn new(particles: Vec<Particle>) -> Result<Self, RecordError> {
        let len = particles.len();
        for (i, particle) in particles.iter().enumerate() {
            if let Some(&bad) = particle.daughters.iter().find(|&&d| d >= len) {
                return Err(RecordError::DaughterOutOfRange {
                    particle: i,
                    daughter: bad,
                    len,
                });
            }
        }
        Ok(Self { particles })
    }

    /// For records assembled in-crate whose daughter indices are known to be
    /// in range.
    pub(crate) fn from_trusted(particles: Vec<Particle>) -> Self {
        debug_assert!(
            particles
                .iter()
                .all(|p| p.daughters.iter().all(|&d| d < particles.len())),
            "daughter index out of range"
        );
        Self { particles }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct daughters of the particle at `index`, in the order listed.
    ///
    /// Yields nothing for an out of range index.
    pub fn daughters(&self, index: usize) -> impl Iterator<Item = &Particle> + '_ {
        self.particles
            .get(index)
            .map(|p| p.daughters.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&d| &self.particles[d])
    }

    pub fn into_particles(self) -> Vec<Particle> {
        self.particles
    }
}

impl Index<usize> for EventRecord {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl<'a> IntoIterator for &'a EventRecord {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

impl TryFrom<Vec<Particle>> for EventRecord {
    type Error = RecordError;

    fn try_from(particles: Vec<Particle>) -> Result<Self, Self::Error> {
        Self::new(particles)
    }
}

// Deserialized records go through the same daughter check as `new`.
impl<'de> Deserialize<'de> for EventRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            particles: Vec<Particle>,
        }
        let raw = Raw::deserialize(deserializer)?;
        EventRecord::new(raw.particles).map_err(serde::de::Error::custom)
    }
}
