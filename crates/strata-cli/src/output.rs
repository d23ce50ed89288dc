//! Terminal output for command results.
//!
//! Diagnostics go through `tracing` to stderr; everything here is the
//! command's answer and goes to stdout.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes result lines in the format picked from flags and config.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `--output-format` beats `output.format`; `auto` becomes `human` on a
    /// terminal and `plain` otherwise.  Colour needs `human` and no opt-out.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match (args.output_format, config.output.format) {
            (OutputFormat::Auto, OutputFormat::Auto) if io::stdout().is_terminal() => {
                OutputFormat::Human
            }
            (OutputFormat::Auto, OutputFormat::Auto) => OutputFormat::Plain,
            (OutputFormat::Auto, from_config) => from_config,
            (from_flag, _) => from_flag,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unadorned line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(None, msg, Style::new())
    }

    /// `✓ msg`, a file or directory that was created.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Some('\u{2713}'), msg, Style::new().green())
    }

    /// `⚠ msg`, e.g. a file that was overwritten.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Some('\u{26a0}'), msg, Style::new().yellow())
    }

    /// `ℹ msg`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Some('\u{2139}'), msg, Style::new().blue())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(None, text, Style::new().cyan().bold())
    }

    /// JSON goes out even with `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let doc = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&doc)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn emit(&self, marker: Option<char>, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate(marker, msg, style))
    }

    fn decorate(&self, marker: Option<char>, msg: &str, style: Style) -> String {
        match (marker, self.color) {
            (Some(m), true) => format!("{} {}", m.style(style.bold()), msg.style(style)),
            (Some(m), false) => format!("{m} {msg}"),
            (None, true) => msg.style(style).to_string(),
            (None, false) => msg.to_owned(),
        }
    }
}
