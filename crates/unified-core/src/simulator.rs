// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Simulator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scenario orchestration over an owned parameter store.

use serde::Serialize;
use tracing::{debug, info};
use unified_types::error::UnifiedResult;
use unified_types::state::StateParameterStore;

use crate::unified::{euler_relation, force_to_frequency, force_unified, frequency_unified};

/// All quantities of one scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    #[serde(rename = "Force")]
    pub force: f64,
    #[serde(rename = "Frequency")]
    pub frequency: f64,
    #[serde(rename = "Frequency from Force")]
    pub frequency_from_force: f64,
    #[serde(rename = "Euler Relation Valid")]
    pub euler_relation_valid: bool,
}

/// Owns the parameter store; the only place it is mutated.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    store: StateParameterStore,
}

impl Simulator {
    pub fn new(store: StateParameterStore) -> Self {
        Simulator { store }
    }

    pub fn store(&self) -> &StateParameterStore {
        &self.store
    }

    /// Force, frequency, frequency-from-force and the Euler check.
    /// Returns the first error raised by any step.
    pub fn simulate_scenario<S: AsRef<str>>(
        &self,
        states: &[S],
        meters: f64,
        seconds: f64,
        n: i64,
    ) -> UnifiedResult<ScenarioResult> {
        let force = force_unified(&self.store, states, meters, seconds, n)?;
        let frequency = frequency_unified(&self.store, states, meters, n)?;
        let frequency_from_force = force_to_frequency(force, meters, seconds)?;
        let euler_relation_valid = euler_relation();

        debug!(
            n_states = states.len(),
            meters, seconds, n, force, frequency, frequency_from_force, "scenario evaluated"
        );
        Ok(ScenarioResult {
            force,
            frequency,
            frequency_from_force,
            euler_relation_valid,
        })
    }

    /// Overwrite an existing property of an existing state.
    pub fn modify_state_property(
        &mut self,
        state: &str,
        property: &str,
        value: f64,
    ) -> UnifiedResult<()> {
        let previous = self.store.set_property(state, property, value)?;
        info!(state, property, previous, value, "state property updated");
        Ok(())
    }
}
