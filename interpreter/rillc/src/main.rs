//! The `rill` binary.
//!
//! No flags, no subcommands: expressions come from stdin and results
//! go to stdout until `exit` or EOF.

use std::io;

fn main() {
    rillc::init_tracing();

    if std::env::args().len() > 1 {
        eprintln!("Usage: rill");
        eprintln!();
        eprintln!("Reads expressions from standard input; 'exit' quits.");
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = rillc::run_session(stdin.lock(), &mut stdout) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
