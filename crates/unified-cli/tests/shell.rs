// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Interactive Shell Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Drives the menu loop with scripted input.

use std::io::Cursor;

use unified_cli::shell::{Shell, ShellError, GOODBYE, INVALID_OPTION, MENU_TITLE};
use unified_core::simulator::Simulator;
use unified_types::error::UnifiedError;
use unified_types::state::StateKind;

fn run_script(script: &str) -> (Result<(), ShellError>, String, Simulator) {
    let mut output = Vec::new();
    let (result, simulator) = {
        let mut shell = Shell::new(Simulator::default(), Cursor::new(script), &mut output);
        let result = shell.run();
        (result, shell.simulator().clone())
    };
    (result, String::from_utf8(output).unwrap(), simulator)
}

/// Prompts are written without a newline, so the result follows the
/// last prompt on the same line.
fn first_force(out: &str) -> f64 {
    let start = out.find("Force: ").expect("force line") + "Force: ".len();
    let rest = &out[start..];
    let end = rest.find('\n').unwrap_or(rest.len());
    rest[..end].parse().unwrap()
}

#[test]
fn exit_option_prints_goodbye() {
    let (result, out, _) = run_script("4\n");
    assert!(result.is_ok());
    assert!(out.contains(MENU_TITLE));
    assert!(out.contains("1. Run Simulation"));
    assert!(out.contains("4. Exit"));
    assert!(out.trim_end().ends_with(GOODBYE));
}

#[test]
fn end_of_input_exits_cleanly() {
    let (result, out, _) = run_script("");
    assert!(result.is_ok());
    assert!(out.contains(GOODBYE));
}

#[test]
fn invalid_option_reprompts() {
    let (result, out, _) = run_script("9\nhello\n4\n");
    assert!(result.is_ok());
    assert_eq!(out.matches(INVALID_OPTION).count(), 2);
    assert_eq!(out.matches(MENU_TITLE).count(), 3);
}

#[test]
fn run_simulation_prints_labelled_results() {
    let (result, out, _) = run_script("1\nsolid\n1.0\n1.0\n5\n4\n");
    assert!(result.is_ok());
    assert!(out.contains("Force: 556199183.6327764\n"), "{out}");
    assert!(out.contains("Frequency: 23583.875500705486\n"));
    assert!(out.contains("Frequency from Force: 23583.875500705486\n"));
    assert!(out.contains("Euler Relation Valid: false\n"));
}

#[test]
fn state_list_entries_are_trimmed() {
    let (result, out, _) = run_script("1\n liquid , solid \n1\n1\n5\n4\n");
    assert!(result.is_ok());
    let force = first_force(&out);
    let expected = 556374970.0414307;
    assert!(((force - expected) / expected).abs() < 1e-12, "{force}");
}

#[test]
fn simulation_error_ends_the_loop() {
    let (result, out, _) = run_script("1\nsolid,aether\n1\n1\n5\n4\n");
    match result {
        Err(ShellError::Simulation(UnifiedError::InvalidArgument(_))) => {}
        other => panic!("expected simulation error, got {other:?}"),
    }
    assert!(!out.contains(GOODBYE));
}

#[test]
fn empty_state_list_is_a_simulation_error() {
    let (result, _, _) = run_script("1\n\n1\n1\n5\n");
    assert!(matches!(
        result,
        Err(ShellError::Simulation(UnifiedError::InvalidArgument(_)))
    ));
}

#[test]
fn malformed_number_returns_to_menu() {
    let (result, out, _) = run_script("1\nsolid\nabc\n4\n");
    assert!(result.is_ok());
    assert!(out.contains("Invalid number: 'abc'"));
    assert_eq!(out.matches(MENU_TITLE).count(), 2);
}

#[test]
fn modify_property_updates_store() {
    let (result, out, sim) = run_script("2\nSolid\nrho\n2.0\n4\n");
    assert!(result.is_ok());
    assert!(out.contains("Property 'rho' for state 'solid' updated to 2.0."), "{out}");
    assert_eq!(sim.store().property(StateKind::Solid, "rho").unwrap(), 2.0);
}

#[test]
fn modify_keeps_property_case() {
    let (result, _, sim) = run_script("2\nsolid\nY\n50\n4\n");
    assert!(result.is_ok());
    assert_eq!(sim.store().property(StateKind::Solid, "Y").unwrap(), 50.0);
}

#[test]
fn modify_invalid_property_prints_error_and_continues() {
    let (result, out, sim) = run_script("2\nsolid\nnonexistent_prop\n1.0\n4\n");
    assert!(result.is_ok());
    assert!(out.contains("Invalid state or property: solid, nonexistent_prop"));
    assert!(out.contains(GOODBYE));
    assert_eq!(sim.store().property(StateKind::Solid, "rho").unwrap(), 1.0);
}

#[test]
fn modification_visible_in_next_simulation() {
    let (result, out, _) = run_script("2\nsolid\nrho\n2\n1\nsolid\n1\n1\n5\n4\n");
    assert!(result.is_ok());
    // Ω doubles → force ×4.
    let expected = 556199183.6327764 * 4.0;
    let force = first_force(&out);
    assert!(((force - expected) / expected).abs() < 1e-12, "{force}");
}

#[test]
fn view_properties_lists_every_state() {
    let (result, out, _) = run_script("3\n4\n");
    assert!(result.is_ok());
    for header in ["Solid:", "Liquid:", "Gas:", "Plasma:"] {
        assert!(out.contains(header), "missing {header}");
    }
    assert!(out.contains("  c_s: 343.0\n"));
    assert!(out.contains("  epsilon_0: 8.854187817e-12\n"));
}

#[test]
fn end_of_input_inside_a_menu_action_exits_cleanly() {
    let (result, out, _) = run_script("1\nsolid\n");
    assert!(result.is_ok());
    assert!(out.contains(GOODBYE));
}

#[test]
fn huge_index_is_an_overflow_not_a_crash() {
    let (result, _, _) = run_script("1\nsolid\n1\n1\n1000000000000000000\n");
    assert!(matches!(
        result,
        Err(ShellError::Simulation(UnifiedError::Overflow(_)))
    ));
}
