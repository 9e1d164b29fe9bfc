use std::process::ExitCode;

use design_patterns::runner;
use design_patterns::Pattern;

fn main() -> ExitCode {
    runner::launch(&[Pattern::AbstractFactory])
}
