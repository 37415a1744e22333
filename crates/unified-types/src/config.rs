// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{UnifiedError, UnifiedResult};
use crate::state::{PropertyBag, StateKind, StateParameterStore};

/// Top-level simulator configuration.
/// Every section is optional; an empty JSON object yields the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Per-state property overrides applied on top of the built-in table.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub state_properties: IndexMap<String, PropertyBag>,
    /// Inputs for the one-shot `simulate` command.
    #[serde(default)]
    pub scenario: ScenarioParams,
}

/// Inputs of one scenario evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    #[serde(default = "default_states")]
    pub states: Vec<String>,
    #[serde(default = "default_unit")]
    pub meters: f64,
    #[serde(default = "default_unit")]
    pub seconds: f64,
    /// Fibonacci / prime index.
    #[serde(default = "default_n")]
    pub n: i64,
}

fn default_states() -> Vec<String> {
    StateKind::ALL.iter().map(|k| k.to_string()).collect()
}
fn default_unit() -> f64 {
    1.0
}
fn default_n() -> i64 {
    5
}

impl Default for ScenarioParams {
    fn default() -> Self {
        ScenarioParams {
            states: default_states(),
            meters: default_unit(),
            seconds: default_unit(),
            n: default_n(),
        }
    }
}

impl SimulatorConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> UnifiedResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> UnifiedResult<()> {
        let s = &self.scenario;
        if !s.meters.is_finite() || !s.seconds.is_finite() {
            return Err(UnifiedError::ConfigError(
                "scenario meters and seconds must be finite".to_string(),
            ));
        }
        // Surfaces bad state names / values at load time.
        self.build_store().map(|_| ())
    }

    /// Build the parameter store described by this config.
    pub fn build_store(&self) -> UnifiedResult<StateParameterStore> {
        StateParameterStore::with_overrides(&self.state_properties)
    }
}
