//! Mathematical primitives for the unified force framework.

pub mod compare;
pub mod sequences;
