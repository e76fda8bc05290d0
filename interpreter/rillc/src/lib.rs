//! The rill command-line expression evaluator.
//!
//! Glue over the stage crates: [`eval_line`] runs one input line
//! through tokenize → parse → evaluate, and [`run_session`] is the
//! interactive loop the `rill` binary wraps around stdin/stdout.

use rill_eval::{EvalError, EvalErrorKind, Registry};
use std::sync::Once;

mod error;
mod session;

pub use error::RillError;
pub use session::run_session;


/// Evaluate one line of input against the given registries.
///
/// Pure: the same input always produces the same output. A non-finite
/// final result (NaN or ±∞) is rejected as a domain error for
/// user-facing clarity; intermediate non-finite values are fine.
pub fn eval_line(input: &str, registry: &Registry) -> Result<f64, RillError> {
    let tokens = rill_lexer::tokenize(input)?;
    let expr = rill_parse::parse(&tokens)?;
    let value = rill_eval::evaluate(&expr, registry)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RillError::Eval(EvalError::new(
            expr.span,
            EvalErrorKind::Domain {
                what: "result is not a finite number".to_string(),
            },
        )))
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rill_parse=trace` and similar.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
