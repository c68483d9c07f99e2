//! Customers CLI entry point
//!
//! Installs logging, delegates to the CLI module, prints errors to stderr,
//! and exits with non-zero on failure.

use customers::{cli, observability};

fn main() {
    observability::init_tracing();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
