// Runs every demo, or only the ones named on the command line:
//
//   all_patterns                 # all nineteen
//   all_patterns state proxy     # just these, in this order

use std::process::ExitCode;

use colored::Colorize;
use design_patterns::runner;

fn main() -> ExitCode {
    let selection = match runner::parse_selection(std::env::args().skip(1)) {
        Ok(selection) => selection,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    runner::launch(&selection)
}
