//! favgen - Command-line tool for generating favicons from an SVG source

use std::process::ExitCode;

use favgen::cli;

fn main() -> ExitCode {
    cli::run()
}
