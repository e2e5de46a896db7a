use crate::constants::LOG_LEVEL_ENV;
use chrono::Local;
use colored::*;
use std::str::FromStr;

/// Severity of a log line. Lines below the logger's minimum level are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl LogLevel {
    /// Reads the level from `VAMOS_LOG`, falling back to INFO.
    pub fn from_env() -> Self {
        std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(LogLevel::Info)
    }

    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
    pub min_level: LogLevel,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self::with_level(name, info_color, LogLevel::from_env())
    }

    pub fn with_level(name: impl Into<String>, info_color: Color, min_level: LogLevel) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
            min_level,
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn prefix(&self, level: LogLevel) -> String {
        format!("[{}][{}][{}]", Self::timestamp(), level.tag(), self.name)
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        if !self.enabled(LogLevel::Debug) {
            return;
        }
        println!(
            "{} {} {}",
            self.prefix(LogLevel::Debug).dimmed(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if !self.enabled(LogLevel::Info) {
            return;
        }
        println!(
            "{} {} {}",
            self.prefix(LogLevel::Info).bold().color(self.info_color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if !self.enabled(LogLevel::Warn) {
            return;
        }
        eprintln!(
            "{} {} {}",
            self.prefix(LogLevel::Warn).bold().yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            self.prefix(LogLevel::Error).bold().bright_red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }
}
