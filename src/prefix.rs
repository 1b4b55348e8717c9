//! Severity levels and the fixed label each one prints.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseLevelError;

/// Display metadata for one severity level.
///
/// The six instances live in statics and are built at compile time, so
/// selecting a prefix never allocates.
#[derive(Debug, PartialEq, Eq)]
pub struct Prefix {
    /// Label written when color is off
    pub plain: &'static [u8],
    /// Label written when color is on, escape sequences included
    pub color: &'static [u8],
    /// Whether lines at this level carry the caller's file, line and function
    pub file: bool,
}

macro_rules! prefix {
    ($label:literal, $color:ident, $file:literal) => {
        Prefix {
            plain: $label.as_bytes(),
            color: $crate::__colorlog_paint!($color, $label).as_bytes(),
            file: $file,
        }
    };
}

/// Fatal prefix
pub static FATAL: Prefix = prefix!("[FATAL] ", red, true);
/// Error prefix
pub static ERROR: Prefix = prefix!("[ERROR] ", red, true);
/// Warn prefix
pub static WARN: Prefix = prefix!("[WARN]  ", orange, false);
/// Info prefix
pub static INFO: Prefix = prefix!("[INFO]  ", green, false);
/// Debug prefix
pub static DEBUG: Prefix = prefix!("[DEBUG] ", purple, true);
/// Trace prefix
pub static TRACE: Prefix = prefix!("[TRACE] ", cyan, false);

// ===== Levels =====
/// Log levels
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Level {
    /// Fatal
    Fatal,
    /// Error
    Error,
    /// Warn
    Warn,
    /// Info
    Info,
    /// Debug
    Debug,
    /// Trace
    Trace,
}

impl Level {
    /// All levels, most severe first
    pub const ALL: [Self; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// The prefix printed for this level
    #[inline]
    #[must_use]
    pub fn prefix(self) -> &'static Prefix {
        match self {
            Self::Fatal => &FATAL,
            Self::Error => &ERROR,
            Self::Warn => &WARN,
            Self::Info => &INFO,
            Self::Debug => &DEBUG,
            Self::Trace => &TRACE,
        }
    }

    /// Upper-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}
