// src/utils/log.rs

//! Console progress reporting for scrape runs.
//!
//! Progress lines go to stdout, debug output, warnings and errors to stderr,
//! each prefixed with a timestamp and level. Diagnostic output belongs to the
//! `log` facade.

use std::fmt;
use std::sync::OnceLock;

use chrono::Local;

/// Console verbosity, ordered from most to least chatty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, falling back to `Info` for anything unknown.
    fn parse(s: &str) -> Self {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
            .into_iter()
            .find(|level| level.to_string().eq_ignore_ascii_case(s.trim()))
            .unwrap_or(Self::Info)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Set the console level. Only the first call takes effect.
pub fn init(level: &str) {
    let _ = LOG_LEVEL.set(LogLevel::parse(level));
}

fn line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{timestamp}] [{level}] {message}")
}

fn emit(level: LogLevel, message: &str) {
    if level < LOG_LEVEL.get().copied().unwrap_or(LogLevel::Info) {
        return;
    }
    match level {
        LogLevel::Info => println!("{}", line(level, message)),
        _ => eprintln!("{}", line(level, message)),
    }
}

pub fn debug(message: &str) {
    emit(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    emit(LogLevel::Info, message);
}

pub fn warn(message: &str) {
    emit(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    emit(LogLevel::Error, message);
}

/// Report a completed action, such as the saved course list.
pub fn success(message: &str) {
    emit(LogLevel::Info, &format!("✓ {message}"));
}

/// Announce one stage of a run, e.g. `Stage 2/3: Extracting courses`.
pub fn stage(current: usize, total: usize, message: &str) {
    emit(LogLevel::Info, &format!("Stage {current}/{total}: {message}"));
}

/// Print the run banner naming the catalog being scraped.
pub fn banner(title: &str, target: &str) {
    let rule = "─".repeat(title.len().max(target.len()) + 4);
    emit(LogLevel::Info, &rule);
    emit(LogLevel::Info, &format!("  {title}"));
    emit(LogLevel::Info, &format!("  {target}"));
    emit(LogLevel::Info, &rule);
}

/// Print end-of-run counters on a single line.
pub fn tally(counters: &[(&str, usize)]) {
    let body = counters
        .iter()
        .map(|(name, count)| format!("{name}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    emit(LogLevel::Info, &format!("Done. {body}"));
}
