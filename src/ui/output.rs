//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! All user-facing output flows through a [`Logger`] value that is built
//! once from CLI flags and handed to every component that needs to talk to
//! the user. Nothing in this module reads process-wide state: verbosity,
//! output mode, and enabled trace areas are constructor parameters.
//!
//! Messages are a tagged [`LogMessage`] payload. Each variant has exactly
//! one formatting rule, applied by [`Logger::render`].

use std::collections::BTreeSet;

use chrono::{SecondsFormat, Utc};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// How command results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable output, informational messages shown.
    Friendly,
    /// Machine-readable JSON on stdout; informational chatter suppressed.
    Json,
}

/// Severity of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Success,
    Info,
    Debug,
}

/// A message payload.
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    /// A single (possibly multi-line) string.
    Text(String),
    /// Several lines, emitted in order.
    Lines(Vec<String>),
    /// A structured value, pretty-printed as JSON.
    Json(serde_json::Value),
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        LogMessage::Text(s.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        LogMessage::Text(s)
    }
}

impl From<Vec<String>> for LogMessage {
    fn from(lines: Vec<String>) -> Self {
        LogMessage::Lines(lines)
    }
}

impl From<serde_json::Value> for LogMessage {
    fn from(value: serde_json::Value) -> Self {
        LogMessage::Json(value)
    }
}

impl LogMessage {
    /// Flatten the payload into display lines.
    fn lines(&self) -> Vec<String> {
        match self {
            LogMessage::Text(text) => text.lines().map(str::to_string).collect(),
            LogMessage::Lines(lines) => lines
                .iter()
                .flat_map(|l| l.lines().map(str::to_string).collect::<Vec<_>>())
                .collect(),
            LogMessage::Json(value) => serde_json::to_string_pretty(value)
                .unwrap_or_else(|_| value.to_string())
                .lines()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Where a rendered message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// A message ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub stream: Stream,
    pub text: String,
}

/// Leveled logger injected into commands and the input layer.
#[derive(Debug, Clone)]
pub struct Logger {
    verbosity: Verbosity,
    mode: OutputMode,
    trace_areas: BTreeSet<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Verbosity::Normal, OutputMode::Friendly)
    }
}

impl Logger {
    /// Create a logger with no trace areas enabled.
    pub fn new(verbosity: Verbosity, mode: OutputMode) -> Self {
        Self {
            verbosity,
            mode,
            trace_areas: BTreeSet::new(),
        }
    }

    /// Enable the given trace areas (case-insensitive).
    pub fn with_trace_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trace_areas
            .extend(areas.into_iter().map(|a| a.as_ref().to_ascii_lowercase()));
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Whether debug output for `area` is enabled.
    pub fn area_enabled(&self, area: &str) -> bool {
        self.verbosity == Verbosity::Debug
            || self.trace_areas.contains(&area.to_ascii_lowercase())
    }

    /// Render a message for the given level, or `None` if it is filtered out.
    ///
    /// Debug lines are prefixed with `timestamp`; callers pass the current
    /// time through [`Logger::debug`] and a fixed one in tests.
    pub fn render(&self, level: Level, message: &LogMessage, timestamp: &str) -> Option<Rendered> {
        let quiet = self.verbosity == Verbosity::Quiet;
        let (stream, prefix) = match level {
            Level::Error => (Stream::Stderr, "error: ".to_string()),
            Level::Warn if !quiet => (Stream::Stderr, "warning: ".to_string()),
            Level::Success if !quiet => (Stream::Stdout, String::new()),
            Level::Info
                if !quiet
                    && (self.mode == OutputMode::Friendly
                        || self.verbosity == Verbosity::Debug) =>
            {
                (Stream::Stdout, String::new())
            }
            Level::Debug => (Stream::Stderr, format!("{} : ", timestamp)),
            _ => return None,
        };

        let lines = message.lines();
        let text = if lines.is_empty() {
            prefix
        } else {
            lines
                .iter()
                .map(|line| format!("{}{}", prefix, line))
                .collect::<Vec<_>>()
                .join("\n")
        };
        Some(Rendered { stream, text })
    }

    fn emit(&self, level: Level, message: LogMessage) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        if let Some(rendered) = self.render(level, &message, &timestamp) {
            match rendered.stream {
                Stream::Stdout => println!("{}", rendered.text),
                Stream::Stderr => eprintln!("{}", rendered.text),
            }
        }
    }

    /// Print an error message (always shown).
    pub fn error(&self, message: impl Into<LogMessage>) {
        self.emit(Level::Error, message.into());
    }

    /// Print a warning message (respects quiet mode).
    pub fn warn(&self, message: impl Into<LogMessage>) {
        self.emit(Level::Warn, message.into());
    }

    /// Print a success message (respects quiet mode).
    pub fn success(&self, message: impl Into<LogMessage>) {
        self.emit(Level::Success, message.into());
    }

    /// Print an informational message (friendly mode or debug only).
    pub fn info(&self, message: impl Into<LogMessage>) {
        self.emit(Level::Info, message.into());
    }

    /// Print a debug message (only in debug mode).
    pub fn debug(&self, message: impl Into<LogMessage>) {
        if self.verbosity == Verbosity::Debug {
            self.emit(Level::Debug, message.into());
        }
    }

    /// Print a debug message for a named area.
    pub fn debug_area(&self, area: &str, message: impl Into<LogMessage>) {
        if self.area_enabled(area) {
            self.emit(Level::Debug, message.into());
        }
    }

    /// Print a JSON document to stdout regardless of mode (quiet excepted).
    pub fn json(&self, value: &serde_json::Value) {
        if self.verbosity != Verbosity::Quiet {
            self.emit(Level::Success, LogMessage::Json(value.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TS: &str = "2026-01-01T00:00:00.000Z";

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn error_always_rendered() {
        let logger = Logger::new(Verbosity::Quiet, OutputMode::Json);
        let out = logger
            .render(Level::Error, &"boom".into(), TS)
            .expect("error shown");
        assert_eq!(out.stream, Stream::Stderr);
        assert_eq!(out.text, "error: boom");
    }

    #[test]
    fn quiet_suppresses_warn_and_success() {
        let logger = Logger::new(Verbosity::Quiet, OutputMode::Friendly);
        assert!(logger.render(Level::Warn, &"w".into(), TS).is_none());
        assert!(logger.render(Level::Success, &"s".into(), TS).is_none());
        assert!(logger.render(Level::Info, &"i".into(), TS).is_none());
    }

    #[test]
    fn info_hidden_in_json_mode_unless_debug() {
        let json = Logger::new(Verbosity::Normal, OutputMode::Json);
        assert!(json.render(Level::Info, &"hi".into(), TS).is_none());

        let json_debug = Logger::new(Verbosity::Debug, OutputMode::Json);
        assert!(json_debug.render(Level::Info, &"hi".into(), TS).is_some());
    }

    #[test]
    fn multiline_text_prefixes_every_line() {
        let logger = Logger::default();
        let out = logger
            .render(Level::Warn, &"one\ntwo".into(), TS)
            .expect("rendered");
        assert_eq!(out.text, "warning: one\nwarning: two");
    }

    #[test]
    fn lines_variant_joins_in_order() {
        let logger = Logger::default();
        let msg = LogMessage::Lines(vec!["a".into(), "b".into()]);
        let out = logger.render(Level::Success, &msg, TS).expect("rendered");
        assert_eq!(out.stream, Stream::Stdout);
        assert_eq!(out.text, "a\nb");
    }

    #[test]
    fn json_variant_is_pretty_printed() {
        let logger = Logger::default();
        let msg = LogMessage::Json(json!({ "id": 1 }));
        let out = logger.render(Level::Success, &msg, TS).expect("rendered");
        assert_eq!(out.text, "{\n  \"id\": 1\n}");
    }

    #[test]
    fn debug_lines_carry_timestamp() {
        let logger = Logger::new(Verbosity::Debug, OutputMode::Friendly);
        let out = logger
            .render(Level::Debug, &"x\ny".into(), TS)
            .expect("rendered");
        assert_eq!(out.text, format!("{TS} : x\n{TS} : y"));
    }

    #[test]
    fn trace_areas_are_case_insensitive() {
        let logger =
            Logger::new(Verbosity::Normal, OutputMode::Friendly).with_trace_areas(["Inputs"]);
        assert!(logger.area_enabled("inputs"));
        assert!(logger.area_enabled("INPUTS"));
        assert!(!logger.area_enabled("tracker"));
    }
}
