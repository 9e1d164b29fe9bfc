// Shared `main` for the demo binaries.

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use tracing::{debug, info};

use crate::catalogue::Pattern;
use crate::config::DemoConfig;
use crate::console::Transcript;
use crate::error::PatternError;
use crate::logging::init_logging;

/// Runs each demo under its own heading, separated by blank lines.
pub fn run_into(patterns: &[Pattern], config: &DemoConfig, out: &mut Transcript) {
    for (i, pattern) in patterns.iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        info!(pattern = pattern.slug(), category = %pattern.category(), "running demo");
        out.heading(pattern.name());
        pattern.run(config, out);
    }
}

/// Turns command-line slugs into patterns. No slugs means every pattern.
pub fn parse_selection<I, S>(args: I) -> Result<Vec<Pattern>, PatternError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected = args
        .into_iter()
        .map(|arg| arg.as_ref().parse::<Pattern>())
        .collect::<Result<Vec<_>, _>>()?;

    if selected.is_empty() {
        Ok(Pattern::ALL.to_vec())
    } else {
        Ok(selected)
    }
}

// Emitted once the subscriber exists, so the event is not lost.
fn log_config_source(source: Option<&Path>) {
    match source {
        Some(path) => info!(path = %path.display(), "loaded demo configuration"),
        None => debug!("using built-in demo configuration"),
    }
}

pub fn run(patterns: &[Pattern]) -> Result<(), PatternError> {
    let source = DemoConfig::env_path();
    let config = match &source {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    init_logging(&config.log_filter);
    log_config_source(source.as_deref());

    let mut out = Transcript::stdout(config.color);
    run_into(patterns, &config, &mut out);
    Ok(())
}

/// Entry point used by every binary.
pub fn launch(patterns: &[Pattern]) -> ExitCode {
    match run(patterns) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
