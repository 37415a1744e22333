// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Console front end: text rendering and the interactive menu.

pub mod render;
pub mod shell;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging on stderr.
///
/// `RUST_LOG` overrides the default filter (`warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
