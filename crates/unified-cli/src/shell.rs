// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Shell
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Interactive four-option menu over a [`Simulator`].
//!
//! Errors from the simulation path end the loop and are returned to the
//! caller. Mutator errors and malformed numbers are printed and the menu
//! is shown again. End of input exits cleanly.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;
use unified_core::simulator::Simulator;
use unified_types::error::UnifiedError;

use crate::render::{format_value, write_result, write_store};

pub const MENU_TITLE: &str = "Unified Force Framework Simulator";
pub const GOODBYE: &str = "Exiting the simulator. Goodbye!";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Simulation failed: {0}")]
    Simulation(#[source] UnifiedError),
}

enum Flow {
    Continue,
    Exit,
}

enum Input<T> {
    Value(T),
    Invalid(String),
    Eof,
}

/// Unwraps an [`Input`], printing the parse error or leaving the current
/// menu action on bad / missing input.
macro_rules! take_input {
    ($shell:expr, $input:expr) => {
        match $input {
            Input::Value(v) => v,
            Input::Invalid(msg) => {
                writeln!($shell.output, "{msg}")?;
                return Ok(Flow::Continue);
            }
            Input::Eof => return Ok(Flow::Exit),
        }
    };
}

pub struct Shell<R, W> {
    simulator: Simulator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(simulator: Simulator, input: R, output: W) -> Self {
        Shell {
            simulator,
            input,
            output,
        }
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Run until option 4, end of input, or a simulation error.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.run_simulation()?,
                "2" => self.modify_property()?,
                "3" => {
                    write_store(&mut self.output, self.simulator.store())?;
                    Flow::Continue
                }
                "4" => Flow::Exit,
                other => {
                    debug!(choice = other, "unrecognised menu option");
                    writeln!(self.output, "{INVALID_OPTION}")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU_TITLE}")?;
        writeln!(self.output, "1. Run Simulation")?;
        writeln!(self.output, "2. Modify State Property")?;
        writeln!(self.output, "3. View State Properties")?;
        writeln!(self.output, "4. Exit")
    }

    fn run_simulation(&mut self) -> Result<Flow, ShellError> {
        let Some(line) =
            self.prompt("Enter states (comma separated, e.g., solid,liquid,gas,plasma): ")?
        else {
            return Ok(Flow::Exit);
        };
        let states = parse_state_list(&line);
        let meters: f64 = take_input!(self, self.prompt_parsed("Enter distance in meters: ")?);
        let seconds: f64 = take_input!(self, self.prompt_parsed("Enter time in seconds: ")?);
        let n: i64 = take_input!(
            self,
            self.prompt_parsed("Enter the Fibonacci/Prime index n: ")?
        );

        let result = self
            .simulator
            .simulate_scenario(&states, meters, seconds, n)
            .map_err(ShellError::Simulation)?;
        write_result(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn modify_property(&mut self) -> Result<Flow, ShellError> {
        let Some(state) = self.prompt("Enter state to modify (solid, liquid, gas, or plasma): ")?
        else {
            return Ok(Flow::Exit);
        };
        let state = state.trim().to_lowercase();
        let Some(property) = self.prompt(
            "Enter property to modify (e.g., rho, Y, kappa, c_s, n_e, e, epsilon_0, m_e): ",
        )?
        else {
            return Ok(Flow::Exit);
        };
        let property = property.trim().to_string();
        let value: f64 = take_input!(self, self.prompt_parsed("Enter new value: ")?);

        match self.simulator.modify_state_property(&state, &property, value) {
            Ok(()) => writeln!(
                self.output,
                "Property '{property}' for state '{state}' updated to {}.",
                format_value(value)
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt and read one line without its terminator; `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_parsed<T: FromStr>(&mut self, message: &str) -> io::Result<Input<T>> {
        let Some(text) = self.prompt(message)? else {
            return Ok(Input::Eof);
        };
        let text = text.trim();
        Ok(match text.parse::<T>() {
            Ok(v) => Input::Value(v),
            Err(_) => Input::Invalid(format!("Invalid number: '{text}'")),
        })
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_state_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_list() {
        assert_eq!(parse_state_list("solid,liquid"), ["solid", "liquid"]);
        assert_eq!(parse_state_list(" gas , plasma ,"), ["gas", "plasma"]);
        assert!(parse_state_list("").is_empty());
    }
}
