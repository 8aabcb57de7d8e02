//! sceneconf CLI entry point
//!
//! Minimal by design: parse, dispatch, print the error, exit non-zero.
//! All logic lives in the CLI module.

use sceneconf::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
