// Selection and scheduling parameters of a gap-triggered generator
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::window::RapidityWindow;

/// Lower bound shared by all default windows.
pub const DEFAULT_RAPIDITY_MIN: f64 = -1.5;
/// Upper bound of the preset quark window.
pub const DEFAULT_RAPIDITY_MAX: f64 = 1.5;
/// Inverse trigger ratio used when a config file leaves it out.
pub const DEFAULT_INVERSE_TRIGGER_RATIO: u32 = 5;

/// Configuration of the gap-triggered heavy-flavour generator.
///
/// Every `inverse_trigger_ratio`-th request is forced to contain a
/// `quark_species` quark/antiquark pair near `quark_window`, optionally
/// together with a `target_hadron_species` hadron inside `hadron_window`.
/// All other requests are minimum-bias.
///
/// A freshly constructed config mirrors the historical defaults: both windows
/// are the degenerate `(-1.5, -1.5)` and no hadron is required. The presets in
/// [`crate::presets`] open the quark window to `(-1.5, 1.5)`. Call
/// [`GeneratorConfig::validate`] (the generator does it on construction) to
/// catch windows that would make triggered events unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub quark_species: i32,
    pub inverse_trigger_ratio: u32,
    /// 0 disables the hadron-level condition
    pub target_hadron_species: i32,
    pub quark_window: RapidityWindow,
    pub hadron_window: RapidityWindow,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INVERSE_TRIGGER_RATIO, crate::particle::CHARM_QUARK)
    }
}

impl GeneratorConfig {
    pub fn new(inverse_trigger_ratio: u32, quark_species: i32) -> Self {
        let disabled = RapidityWindow::new(DEFAULT_RAPIDITY_MIN, DEFAULT_RAPIDITY_MIN);
        Self {
            quark_species,
            inverse_trigger_ratio,
            target_hadron_species: 0,
            quark_window: disabled,
            hadron_window: disabled,
        }
    }

    /// Require a hadron of species `|pdg|` in every triggered event.
    /// Passing 0 switches the hadron condition off again.
    pub fn add_trigger_on_hadron(&mut self, pdg: i32) {
        self.target_hadron_species = pdg.abs();
    }

    pub fn set_quark_rapidity(&mut self, y_min: f64, y_max: f64) {
        self.quark_window = RapidityWindow::new(y_min, y_max);
    }

    pub fn set_hadron_rapidity(&mut self, y_min: f64, y_max: f64) {
        self.hadron_window = RapidityWindow::new(y_min, y_max);
    }

    pub fn with_quark_rapidity(mut self, y_min: f64, y_max: f64) -> Self {
        self.set_quark_rapidity(y_min, y_max);
        self
    }

    pub fn with_hadron_trigger(mut self, pdg: i32, y_min: f64, y_max: f64) -> Self {
        self.add_trigger_on_hadron(pdg);
        self.set_hadron_rapidity(y_min, y_max);
        self
    }

    pub fn hadron_trigger_enabled(&self) -> bool {
        self.target_hadron_species != 0
    }

    /// Check that triggered events are reachable with this configuration.
    ///
    /// The hadron window is only checked once a hadron trigger is enabled,
    /// so the disabled-by-default window is accepted as is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inverse_trigger_ratio == 0 {
            return Err(ConfigError::InvalidTriggerRatio(0));
        }
        if self.quark_species == 0 {
            return Err(ConfigError::ZeroQuarkSpecies);
        }
        if !self.quark_window.is_finite() {
            return Err(ConfigError::NonFiniteWindow { which: "quark" });
        }
        if self.quark_window.is_empty() {
            return Err(ConfigError::EmptyQuarkWindow {
                min: self.quark_window.min,
                max: self.quark_window.max,
            });
        }
        if self.hadron_trigger_enabled() {
            if !self.hadron_window.is_finite() {
                return Err(ConfigError::NonFiniteWindow { which: "hadron" });
            }
            if self.hadron_window.is_empty() {
                return Err(ConfigError::EmptyHadronWindow {
                    species: self.target_hadron_species,
                    min: self.hadron_window.min,
                    max: self.hadron_window.max,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: GeneratorConfig = serde_json::from_str(json)?;
        config.target_hadron_species = config.target_hadron_species.abs();
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
