//! The read-evaluate-print loop.
//!
//! Generic over reader and writer so tests can drive it with byte
//! buffers. A failed evaluation aborts only the current line; the
//! loop ends on the `exit` keyword (any case) or end of input.

use crate::eval_line;
use rill_eval::Registry;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the interactive session until `exit` or EOF.
///
/// Registries are built once here and shared by reference across all
/// evaluations; each line's tokens and tree are dropped afterwards.
pub fn run_session<R: BufRead, W: Write>(mut input: R, output: &mut W) -> std::io::Result<()> {
    let registry = Registry::new();

    writeln!(output, "Welcome to the rill calculator!")?;
    writeln!(
        output,
        "Enter an expression like '2 + 3 * 4', or 'exit' to quit."
    )?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF counts as a clean exit.
            break;
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        debug!(input = trimmed, "evaluate");
        match eval_line(trimmed, &registry) {
            Ok(value) => writeln!(output, "{trimmed} = {value}")?,
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}
