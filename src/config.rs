use core::fmt;
use core::str::FromStr;
use std::time::SystemTime;

use crate::caller::{default_resolver, CallerResolver};
use crate::error::ParseColorModeError;
use crate::sink::FdWriter;
use crate::stamp::Clock;

/// Color mode
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ColorMode {
    /// Color when the destination is a terminal
    #[default]
    Auto,
    /// Always
    Always,
    /// Never
    Never,
}

impl ColorMode {
    /// Whether output to `out` should be colored.
    #[must_use]
    pub fn resolve(self, out: &dyn FdWriter) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => out.is_terminal(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if s.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            Err(ParseColorModeError)
        }
    }
}

impl TryFrom<&str> for ColorMode {
    type Error = ParseColorModeError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Logger settings.
///
/// `out` is mandatory; everything else defaults to off, an empty prefix, the
/// system clock and the default caller resolver.
pub struct Config {
    /// Colorize level labels, timestamps and caller info
    pub color: bool,
    /// Destination of every line
    pub out: Option<Box<dyn FdWriter>>,
    /// Emit `Debug` and `Trace` lines
    pub debug: bool,
    /// Prefix lines with the date and time
    pub timestamp: bool,
    /// Drop every line
    pub quiet: bool,
    /// Label printed in brackets at the start of every line
    pub prefix: String,
    /// Time source for timestamps
    pub clock: Clock,
    /// Caller lookup for levels that print it
    pub resolver: Box<dyn CallerResolver>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: false,
            out: None,
            debug: false,
            timestamp: false,
            quiet: false,
            prefix: String::new(),
            clock: SystemTime::now,
            resolver: default_resolver(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("color", &self.color)
            .field("out", &self.out.as_ref().map(|o| o.fd()))
            .field("debug", &self.debug)
            .field("timestamp", &self.timestamp)
            .field("quiet", &self.quiet)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Defaults, without a destination
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination
    #[inline]
    #[must_use]
    pub fn out(mut self, w: impl FdWriter + 'static) -> Self {
        self.out = Some(Box::new(w));
        self
    }
    /// Turn color on or off
    #[inline]
    #[must_use]
    pub const fn color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }
    /// Decide color from a mode. `Auto` checks whether the destination set
    /// so far is a terminal, and turns color off when there is none.
    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color = match self.out.as_deref() {
            Some(o) => mode.resolve(o),
            None => mode == ColorMode::Always,
        };
        self
    }
    /// Turn `Debug`/`Trace` output on or off
    #[inline]
    #[must_use]
    pub const fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }
    /// Turn timestamps on or off
    #[inline]
    #[must_use]
    pub const fn timestamp(mut self, on: bool) -> Self {
        self.timestamp = on;
        self
    }
    /// Turn quiet mode on or off
    #[inline]
    #[must_use]
    pub const fn quiet(mut self, on: bool) -> Self {
        self.quiet = on;
        self
    }
    /// Set the bracketed line prefix
    #[inline]
    #[must_use]
    pub fn prefix(mut self, p: impl Into<String>) -> Self {
        self.prefix = p.into();
        self
    }
    /// Set the time source
    #[inline]
    #[must_use]
    pub const fn clock(mut self, c: Clock) -> Self {
        self.clock = c;
        self
    }
    /// Set the caller resolver
    #[inline]
    #[must_use]
    pub fn resolver(mut self, r: impl CallerResolver + 'static) -> Self {
        self.resolver = Box::new(r);
        self
    }

    /// Apply overrides from the environment:
    ///   `RUST_LOG_COLOR=always|never|auto`, `RUST_LOG_DEBUG`,
    ///   `RUST_LOG_SHOW_TIME`, `RUST_LOG_QUIET` (`1`/`true`), `RUST_LOG_PREFIX`.
    /// Unset variables leave the current value alone. Call after [`Config::out`]
    /// so `auto` can look at the destination.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_lookup(|k| std::env::var(k).ok())
    }

    pub(crate) fn with_lookup(mut self, get: impl Fn(&str) -> Option<String>) -> Self {
        fn flag(s: &str) -> bool {
            s == "1" || s.eq_ignore_ascii_case("true")
        }
        if let Some(s) = get("RUST_LOG_COLOR") {
            self = self.color_mode(s.parse().unwrap_or(ColorMode::Auto));
        }
        if let Some(s) = get("RUST_LOG_DEBUG") {
            self.debug = flag(&s);
        }
        if let Some(s) = get("RUST_LOG_SHOW_TIME") {
            self.timestamp = flag(&s);
        }
        if let Some(s) = get("RUST_LOG_QUIET") {
            self.quiet = flag(&s);
        }
        if let Some(s) = get("RUST_LOG_PREFIX") {
            self.prefix = s;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_are_off() {
        let c = Config::new();
        assert!(c.out.is_none());
        assert!(!c.color && !c.debug && !c.timestamp && !c.quiet);
        assert!(c.prefix.is_empty());
    }

    #[test]
    fn parse_color_mode() {
        assert_eq!("ALWAYS".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert_eq!("".parse::<ColorMode>(), Ok(ColorMode::Auto));
        assert_eq!(ColorMode::try_from("sometimes"), Err(ParseColorModeError));
    }

    #[test]
    fn color_mode_against_memory_sink() {
        let c = Config::new().out(Vec::<u8>::new()).color_mode(ColorMode::Auto);
        assert!(!c.color, "a Vec is not a terminal");
        let c = c.color_mode(ColorMode::Always);
        assert!(c.color);
        let c = c.color_mode(ColorMode::Never);
        assert!(!c.color);
        // no destination yet
        assert!(Config::new().color_mode(ColorMode::Always).color);
        assert!(!Config::new().color_mode(ColorMode::Auto).color);
    }

    #[test]
    fn env_overrides() {
        let c = Config::new().out(Vec::<u8>::new()).with_lookup(env(&[
            ("RUST_LOG_COLOR", "always"),
            ("RUST_LOG_DEBUG", "TRUE"),
            ("RUST_LOG_SHOW_TIME", "1"),
            ("RUST_LOG_QUIET", "no"),
            ("RUST_LOG_PREFIX", "svc"),
        ]));
        assert!(c.color && c.debug && c.timestamp);
        assert!(!c.quiet);
        assert_eq!(c.prefix, "svc");
    }

    #[test]
    fn env_leaves_unset_fields_alone() {
        let c = Config::new()
            .debug(true)
            .prefix("keep")
            .with_lookup(env(&[("RUST_LOG_COLOR", "bogus")]));
        assert!(c.debug);
        assert_eq!(c.prefix, "keep");
        assert!(!c.color, "invalid color mode falls back to auto");
    }
}
