use serde::{Deserialize, Serialize};

/// PDG code of the charm quark.
pub const CHARM_QUARK: i32 = 4;
/// PDG code of the bottom quark.
pub const BOTTOM_QUARK: i32 = 5;

/// One entry of an event record.
///
/// `pdg` is signed: antiparticles carry the negated code. `daughters` holds
/// indices into the same record and is empty for final-state particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pdg: i32,
    pub rapidity: f64,
    #[serde(default)]
    pub daughters: Vec<usize>,
}

impl Particle {
    pub fn new(pdg: i32, rapidity: f64, daughters: Vec<usize>) -> Self {
        Self {
            pdg,
            rapidity,
            daughters,
        }
    }

    /// Final-state particle with no decay products
    pub fn stable(pdg: i32, rapidity: f64) -> Self {
        Self::new(pdg, rapidity, Vec::new())
    }

    pub fn is_final_state(&self) -> bool {
        self.daughters.is_empty()
    }

    pub fn abs_pdg(&self) -> i32 {
        self.pdg.abs()
    }
}
