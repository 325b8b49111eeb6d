//! `libris` - small-library inventory and circulation tracker.
//!
//! Single-operator CLI: one command runs to completion at a time, and the
//! catalog file is rewritten after every mutating command.

use libris::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
