// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Substance states and the mutable per-state parameter store.
//!
//! The store is an owned value: callers pass it explicitly to the
//! evaluators, and `set_property` is the only way to change it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::{EPSILON_0, M_ELECTRON, N_E_DEFAULT, Q_ELECTRON};
use crate::error::{UnifiedError, UnifiedResult};

pub const PROP_RHO: &str = "rho";
pub const PROP_YOUNG: &str = "Y";
pub const PROP_KAPPA: &str = "kappa";
pub const PROP_SOUND_SPEED: &str = "c_s";
pub const PROP_ELECTRON_DENSITY: &str = "n_e";
pub const PROP_CHARGE: &str = "e";
pub const PROP_PERMITTIVITY: &str = "epsilon_0";
pub const PROP_ELECTRON_MASS: &str = "m_e";

/// Named numeric properties of one state, in insertion order.
pub type PropertyBag = IndexMap<String, f64>;

/// One of the four fixed substance phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Solid,
    Liquid,
    Gas,
    Plasma,
}

impl StateKind {
    pub const ALL: [StateKind; 4] = [
        StateKind::Solid,
        StateKind::Liquid,
        StateKind::Gas,
        StateKind::Plasma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::Solid => "solid",
            StateKind::Liquid => "liquid",
            StateKind::Gas => "gas",
            StateKind::Plasma => "plasma",
        }
    }

    /// Properties read by this state's resistance formula.
    pub fn required_properties(self) -> &'static [&'static str] {
        match self {
            StateKind::Solid => &[PROP_RHO, PROP_YOUNG],
            StateKind::Liquid => &[PROP_RHO, PROP_KAPPA],
            StateKind::Gas => &[PROP_RHO, PROP_SOUND_SPEED],
            StateKind::Plasma => &[
                PROP_ELECTRON_DENSITY,
                PROP_CHARGE,
                PROP_PERMITTIVITY,
                PROP_ELECTRON_MASS,
            ],
        }
    }

    fn default_properties(self) -> PropertyBag {
        let pairs: &[(&str, f64)] = match self {
            StateKind::Solid => &[(PROP_RHO, 1.0), (PROP_YOUNG, 100.0)],
            StateKind::Liquid => &[(PROP_RHO, 0.8), (PROP_KAPPA, 2.0)],
            // Speed of sound in air [m/s]
            StateKind::Gas => &[(PROP_RHO, 0.001), (PROP_SOUND_SPEED, 343.0)],
            StateKind::Plasma => &[
                (PROP_ELECTRON_DENSITY, N_E_DEFAULT),
                (PROP_CHARGE, Q_ELECTRON),
                (PROP_PERMITTIVITY, EPSILON_0),
                (PROP_ELECTRON_MASS, M_ELECTRON),
            ],
        };
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateKind {
    type Err = UnifiedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(StateKind::Solid),
            "liquid" => Ok(StateKind::Liquid),
            "gas" => Ok(StateKind::Gas),
            "plasma" => Ok(StateKind::Plasma),
            _ => Err(UnifiedError::InvalidArgument(format!(
                "Invalid state provided: '{s}'"
            ))),
        }
    }
}

/// Per-state property table. Lives for the whole process; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateParameterStore {
    states: BTreeMap<StateKind, PropertyBag>,
}

impl Default for StateParameterStore {
    fn default() -> Self {
        Self::defaults()
    }
}

impl StateParameterStore {
    /// Store populated with the built-in parameter table.
    pub fn defaults() -> Self {
        let states = StateKind::ALL
            .iter()
            .map(|&kind| (kind, kind.default_properties()))
            .collect();
        StateParameterStore { states }
    }

    /// Defaults with per-state overrides applied on top.
    ///
    /// Overrides may replace existing properties or add new ones. Unknown
    /// state names and non-finite values are configuration errors.
    pub fn with_overrides(overrides: &IndexMap<String, PropertyBag>) -> UnifiedResult<Self> {
        let mut store = Self::defaults();
        for (state_name, props) in overrides {
            let kind: StateKind = state_name.parse().map_err(|_| {
                UnifiedError::ConfigError(format!("unknown state '{state_name}' in state_properties"))
            })?;
            let bag = store
                .states
                .get_mut(&kind)
                .ok_or_else(|| UnifiedError::ConfigError(format!("state '{kind}' missing")))?;
            for (name, &value) in props {
                if !value.is_finite() {
                    return Err(UnifiedError::ConfigError(format!(
                        "property '{name}' of state '{kind}' must be finite, got {value}"
                    )));
                }
                bag.insert(name.clone(), value);
            }
        }
        Ok(store)
    }

    pub fn get(&self, state: StateKind) -> Option<&PropertyBag> {
        self.states.get(&state)
    }

    /// Strict lookup of one property.
    pub fn property(&self, state: StateKind, name: &str) -> UnifiedResult<f64> {
        self.states
            .get(&state)
            .and_then(|bag| bag.get(name))
            .copied()
            .ok_or_else(|| {
                UnifiedError::InvalidArgument(format!(
                    "Missing property '{name}' for state '{state}'"
                ))
            })
    }

    /// Overwrite an existing property. Returns the previous value.
    ///
    /// Both `state` and `property` must already exist; otherwise the store
    /// is left untouched and `InvalidArgument` names the pair.
    pub fn set_property(&mut self, state: &str, property: &str, value: f64) -> UnifiedResult<f64> {
        let invalid = || {
            UnifiedError::InvalidArgument(format!(
                "Invalid state or property: {state}, {property}"
            ))
        };
        let kind: StateKind = state.parse().map_err(|_| invalid())?;
        let slot = self
            .states
            .get_mut(&kind)
            .and_then(|bag| bag.get_mut(property))
            .ok_or_else(invalid)?;
        if !value.is_finite() {
            return Err(UnifiedError::InvalidArgument(format!(
                "Value for {state}, {property} must be finite, got {value}"
            )));
        }
        Ok(std::mem::replace(slot, value))
    }

    /// States in fixed order: solid, liquid, gas, plasma.
    pub fn iter(&self) -> impl Iterator<Item = (StateKind, &PropertyBag)> {
        self.states.iter().map(|(&kind, bag)| (kind, bag))
    }
}
