// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Render
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::io::{self, Write};

use unified_core::simulator::ScenarioResult;
use unified_types::state::StateParameterStore;

/// Shortest round-trip text for a float; exponent form outside [1e-4, 1e16).
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && magnitude.is_finite() && !(1e-4..1e16).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value:?}")
    }
}

/// "Force: …" etc., one labelled line per field.
pub fn write_result<W: Write>(out: &mut W, result: &ScenarioResult) -> io::Result<()> {
    writeln!(out, "Force: {}", format_value(result.force))?;
    writeln!(out, "Frequency: {}", format_value(result.frequency))?;
    writeln!(
        out,
        "Frequency from Force: {}",
        format_value(result.frequency_from_force)
    )?;
    writeln!(out, "Euler Relation Valid: {}", result.euler_relation_valid)
}

/// Every state with its properties, in store order.
pub fn write_store<W: Write>(out: &mut W, store: &StateParameterStore) -> io::Result<()> {
    for (kind, bag) in store.iter() {
        writeln!(out, "{}:", capitalize(kind.as_str()))?;
        for (name, value) in bag {
            writeln!(out, "  {name}: {}", format_value(*value))?;
        }
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
