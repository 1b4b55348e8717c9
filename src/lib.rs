#![warn(missing_docs, unsafe_code)]
//! A colorful leveled console logger.
//!
//! Lines look like `[app][ERROR] 2024/03/07 09:05:03 crate::func:main.rs:12 message`:
//! a bracketed label, the level, an optional timestamp, caller info for the
//! fatal, error and debug levels, then the message. Every line is formatted
//! into one shared buffer under a lock and written with a single call.
//!
//! ```no_run
//! use colorlog::{info, Config};
//!
//! let log = colorlog::init(Config::new().out(std::io::stderr()).prefix("app")).unwrap();
//! log.with_timestamp();
//! info!(log, "listening on {}", 8080);
//! log.warn(&[&"disk", &92, &"%"]);
//! ```

use std::sync::OnceLock;

pub mod caller;
pub mod color;
mod config;
mod error;
mod logger;
pub mod prefix;
mod sink;
mod stamp;

#[cfg(feature = "log")]
pub mod bridge;

pub use caller::{Caller, CallerResolver, NoCaller};
#[cfg(feature = "backtrace")]
pub use caller::StackWalker;
pub use color::{Color, ColorBuffer};
pub use config::{ColorMode, Config};
pub use error::{ConfigError, ParseColorModeError, ParseLevelError};
pub use logger::Logger;
pub use prefix::{Level, Prefix};
pub use sink::FdWriter;
pub use stamp::{Clock, Stamp};

#[doc(hidden)]
pub use logger::message as __message;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, creating it from `config` on the first
/// successful call. Later calls return that same logger and drop their
/// `config` unused.
/// # Errors
/// [`ConfigError::MissingDestination`] if `config.out` is not set, whether or
/// not a logger already exists.
pub fn init(mut config: Config) -> Result<&'static Logger, ConfigError> {
    let out = config.out.take().ok_or(ConfigError::MissingDestination)?;
    Ok(LOGGER.get_or_init(|| Logger::with_out(out, config)))
}

/// The process-wide logger, if [`init`] has succeeded
#[must_use]
pub fn global() -> Option<&'static Logger> {
    LOGGER.get()
}

/// Emit a line, capturing caller info at the call site when the prefix wants it
#[doc(hidden)]
#[macro_export]
macro_rules! __colorlog_log {
    ($lg:expr, $prefix:expr, $($t:tt)+) => {{
        let __lg = &$lg; // evaluate once
        let __prefix: &$crate::Prefix = $prefix;
        let __caller = if __prefix.file { ::core::option::Option::Some($crate::caller!()) } else { ::core::option::Option::None };
        let _ = __lg.output_at(__caller, __prefix, &$crate::__message(::core::format_args!($($t)+)));
    }};
}

/// Log at fatal level, then exit with status 1: `fatal!(logger, "fmt", args..)`
#[macro_export]
macro_rules! fatal { ($lg:expr, $($t:tt)+) => {{ $crate::__colorlog_log!($lg, &$crate::prefix::FATAL, $($t)+); ::std::process::exit(1) }} }
/// Log at error level: `error!(logger, "fmt", args..)`
#[macro_export]
macro_rules! error { ($lg:expr, $($t:tt)+) => { $crate::__colorlog_log!($lg, &$crate::prefix::ERROR, $($t)+) } }
/// Log at warn level: `warn!(logger, "fmt", args..)`
#[macro_export]
macro_rules! warn  { ($lg:expr, $($t:tt)+) => { $crate::__colorlog_log!($lg, &$crate::prefix::WARN,  $($t)+) } }
/// Log at info level: `info!(logger, "fmt", args..)`
#[macro_export]
macro_rules! info  { ($lg:expr, $($t:tt)+) => { $crate::__colorlog_log!($lg, &$crate::prefix::INFO,  $($t)+) } }
/// Log at debug level if debug output is on. Arguments are not evaluated otherwise.
#[macro_export]
macro_rules! debug { ($lg:expr, $($t:tt)+) => {{ let __lg = &$lg; if __lg.is_debug() { $crate::__colorlog_log!(__lg, &$crate::prefix::DEBUG, $($t)+) } }} }
/// Log at trace level if debug output is on. Arguments are not evaluated otherwise.
#[macro_export]
macro_rules! trace { ($lg:expr, $($t:tt)+) => {{ let __lg = &$lg; if __lg.is_debug() { $crate::__colorlog_log!(__lg, &$crate::prefix::TRACE, $($t)+) } }} }
