// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Golden ratio φ = (1 + √5) / 2.
pub const PHI_GOLDEN: f64 = 1.618033988749895;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Base resistance unit Ω₀ (dimensionless).
pub const OMEGA_0: f64 = 1.0;

/// Vacuum permittivity (F/m), default plasma parameter.
pub const EPSILON_0: f64 = 8.854187817e-12;

/// Electron mass (kg), default plasma parameter.
pub const M_ELECTRON: f64 = 9.10938356e-31;

/// Default plasma electron density (m⁻³).
pub const N_E_DEFAULT: f64 = 1e20;

/// Relative tolerance for closeness checks (matches `math.isclose`).
pub const REL_TOL: f64 = 1e-9;
