//! # scenario
//!
//! A lexer for the scenario script format: labels, `@name(params)` inline function calls,
//! `;` line comments and free text.
//!
//! File Layout
//!
//! src/scenario
//!   ├── lexing        The state machine lexer, character classes and errors
//!   ├── token         Token kinds and borrowed tokens
//!   ├── detokenizer   Tokens back to canonical source
//!   ├── formats       Token serializations for tooling
//!   ├── source        Byte to text decoding seam
//!   └── config        Layered configuration for the binary
//!
//! Consumers of the token stream (parsers, interpreters) live outside this crate.

pub mod scenario;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Only the first call has an effect, and a
/// subscriber installed earlier by the host application is left in place. The library itself
/// only emits events and never calls this.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
