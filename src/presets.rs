// Predefined generator configurations
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::config::{GeneratorConfig, DEFAULT_RAPIDITY_MAX, DEFAULT_RAPIDITY_MIN};
use crate::error::ConfigError;
use crate::particle::{BOTTOM_QUARK, CHARM_QUARK};

type PresetFn = fn(u32) -> GeneratorConfig;

// Registry of presets reachable by name, e.g. from a host framework's config
static PRESETS: Lazy<BTreeMap<&'static str, PresetFn>> = Lazy::new(|| {
    let mut map: BTreeMap<&'static str, PresetFn> = BTreeMap::new();
    map.insert("charm", charm_enriched);
    map.insert("beauty", beauty_enriched);
    map
});

/// Charm-enriched generator with the default quark window `(-1.5, 1.5)`.
pub fn charm_enriched(inverse_trigger_ratio: u32) -> GeneratorConfig {
    charm_enriched_in(inverse_trigger_ratio, DEFAULT_RAPIDITY_MIN, DEFAULT_RAPIDITY_MAX)
}

/// Charm-enriched generator with a caller supplied quark window.
pub fn charm_enriched_in(inverse_trigger_ratio: u32, y_min: f64, y_max: f64) -> GeneratorConfig {
    GeneratorConfig::new(inverse_trigger_ratio, CHARM_QUARK).with_quark_rapidity(y_min, y_max)
}

/// Beauty-enriched generator with the default quark window `(-1.5, 1.5)`.
pub fn beauty_enriched(inverse_trigger_ratio: u32) -> GeneratorConfig {
    beauty_enriched_in(inverse_trigger_ratio, DEFAULT_RAPIDITY_MIN, DEFAULT_RAPIDITY_MAX)
}

pub fn beauty_enriched_in(inverse_trigger_ratio: u32, y_min: f64, y_max: f64) -> GeneratorConfig {
    GeneratorConfig::new(inverse_trigger_ratio, BOTTOM_QUARK).with_quark_rapidity(y_min, y_max)
}

/// Look up a preset by name (case-insensitive).
pub fn preset(name: &str, inverse_trigger_ratio: u32) -> Result<GeneratorConfig, ConfigError> {
    let key = name.to_ascii_lowercase();
    PRESETS
        .get(key.as_str())
        .map(|make| make(inverse_trigger_ratio))
        .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
}

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.keys().copied().collect()
}
