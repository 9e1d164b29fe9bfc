//! Console output for the demos.
//!
//! Every pattern operation that "prints" writes into a [`Transcript`]. The
//! binaries use an echoing transcript so lines reach stdout immediately and
//! are not kept; tests use a buffered one and assert on the recorded lines.

use colored::Colorize;

#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
    echo: bool,
    color: bool,
}

impl Transcript {
    /// Records lines without printing them.
    pub fn buffered() -> Self {
        Self::default()
    }

    /// Prints each line to stdout as it arrives. Nothing is recorded.
    pub fn stdout(color: bool) -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
            color,
        }
    }

    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{line}");
        } else {
            self.lines.push(line);
        }
    }

    pub fn heading(&mut self, title: &str) {
        let line = format!("=== {title} ===");
        if self.echo {
            if self.color {
                println!("{}", line.bold().cyan());
            } else {
                println!("{line}");
            }
        } else {
            self.lines.push(line);
        }
    }

    pub fn error(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            if self.color {
                println!("{}", line.red());
            } else {
                println!("{line}");
            }
        } else {
            self.lines.push(line);
        }
    }

    pub fn blank(&mut self) {
        self.say("");
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|s| s.as_str())
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Number of recorded lines exactly equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| l.as_str() == line).count()
    }

    /// Drains the recorded lines, leaving the transcript empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}
