// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnifiedError {
    /// Unknown state or property, empty state list, index out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Square root of a negative quantity.
    #[error("Numeric domain error: {0}")]
    NumericDomain(String),

    /// Intermediate value not representable as a finite f64.
    #[error("Numeric overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type UnifiedResult<T> = Result<T, UnifiedError>;
