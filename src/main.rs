//! witx binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    witx::cli::run()
}
