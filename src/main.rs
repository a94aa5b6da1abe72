//! pdx - Command-line tool for rendering creature sprites and radar charts

use std::process::ExitCode;

use patterndex::cli;

fn main() -> ExitCode {
    cli::run()
}
