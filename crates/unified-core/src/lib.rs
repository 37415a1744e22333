//! Unified force and frequency evaluation.
//!
//! Resistance/scaling lookups, the unified-quantity formulas, and the
//! scenario orchestrator that owns the parameter store.

pub mod resistance;
pub mod simulator;
pub mod unified;
