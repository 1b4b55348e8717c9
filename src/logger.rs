use core::fmt::{self, Arguments, Display, Write as _};
use std::borrow::Cow;
use std::io::{self, Write};
use std::time::SystemTime;

use parking_lot::RwLock;

use crate::caller::{Caller, CallerResolver};
use crate::color::ColorBuffer;
use crate::config::Config;
use crate::error::ConfigError;
use crate::prefix::{Prefix, DEBUG, ERROR, FATAL, INFO, TRACE, WARN};
use crate::sink::FdWriter;
use crate::stamp::{Clock, Stamp};

/// Room for a typical line, so the shared buffer rarely grows.
const INITIAL_CAPACITY: usize = 256;

/// Everything guarded by the logger's lock.
struct State {
    color: bool,
    debug: bool,
    timestamp: bool,
    quiet: bool,
    prefix: String,
    out: Box<dyn FdWriter>,
    buf: ColorBuffer,
}

/// A leveled logger writing to a single destination.
///
/// One reader/writer lock guards the settings and a line buffer shared by all
/// callers. Formatting and writing a line happen under the exclusive lock, so
/// lines from different threads never interleave, and the buffer is reused
/// from call to call.
pub struct Logger {
    state: RwLock<State>,
    clock: Clock,
    resolver: Box<dyn CallerResolver>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.state.read();
        f.debug_struct("Logger")
            .field("color", &st.color)
            .field("debug", &st.debug)
            .field("timestamp", &st.timestamp)
            .field("quiet", &st.quiet)
            .field("prefix", &st.prefix)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Build a logger owned by the caller.
    /// # Errors
    /// [`ConfigError::MissingDestination`] if `config.out` is not set.
    pub fn new(mut config: Config) -> Result<Self, ConfigError> {
        let out = config.out.take().ok_or(ConfigError::MissingDestination)?;
        Ok(Self::with_out(out, config))
    }

    /// Build a logger and leak it
    /// # Errors
    /// [`ConfigError::MissingDestination`] if `config.out` is not set.
    pub fn new_static(config: Config) -> Result<&'static Self, ConfigError> {
        Ok(Box::leak(Box::new(Self::new(config)?)))
    }

    /// `config.out` is ignored; `out` takes its place.
    pub(crate) fn with_out(out: Box<dyn FdWriter>, config: Config) -> Self {
        Self {
            state: RwLock::new(State {
                color: config.color,
                debug: config.debug,
                timestamp: config.timestamp,
                quiet: config.quiet,
                prefix: config.prefix,
                out,
                buf: ColorBuffer::with_capacity(INITIAL_CAPACITY),
            }),
            clock: config.clock,
            resolver: config.resolver,
        }
    }

    // configuration
    /// Turn color on
    pub fn with_color(&self) -> &Self {
        self.state.write().color = true;
        self
    }
    /// Turn color off
    pub fn without_color(&self) -> &Self {
        self.state.write().color = false;
        self
    }
    /// Emit `Debug` and `Trace` lines
    pub fn with_debug(&self) -> &Self {
        self.state.write().debug = true;
        self
    }
    /// Drop `Debug` and `Trace` lines
    pub fn without_debug(&self) -> &Self {
        self.state.write().debug = false;
        self
    }
    /// Print the date and time on every line
    pub fn with_timestamp(&self) -> &Self {
        self.state.write().timestamp = true;
        self
    }
    /// Stop printing the date and time
    pub fn without_timestamp(&self) -> &Self {
        self.state.write().timestamp = false;
        self
    }
    /// Drop every line, fatal ones included. Fatal calls still exit.
    pub fn quiet(&self) -> &Self {
        self.state.write().quiet = true;
        self
    }
    /// Undo [`Logger::quiet`]
    pub fn no_quiet(&self) -> &Self {
        self.state.write().quiet = false;
        self
    }
    /// Replace the bracketed line prefix
    pub fn set_prefix(&self, p: impl Into<String>) -> &Self {
        self.state.write().prefix = p.into();
        self
    }

    /// Whether `Debug` and `Trace` lines are emitted
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.state.read().debug
    }
    /// Whether all output is dropped
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.state.read().quiet
    }
    /// Whether output is colored
    #[must_use]
    pub fn is_color(&self) -> bool {
        self.state.read().color
    }
    /// Whether lines carry a timestamp
    #[must_use]
    pub fn is_timestamp(&self) -> bool {
        self.state.read().timestamp
    }

    /// Flush the destination
    /// # Errors
    /// Whatever the destination's `flush` returns.
    pub fn flush(&self) -> io::Result<()> {
        self.state.write().out.flush()
    }

    /// Format one line and write it to the destination in a single call.
    ///
    /// For prefixes that want caller info, the caller is looked up `depth + 1`
    /// frames above this function: depth 0 names the function that called
    /// `output`, depth 1 its caller, and so on. Lookup failures print
    /// placeholders and are not errors.
    /// # Errors
    /// The destination's write error, unchanged.
    #[inline(never)]
    pub fn output(&self, depth: usize, prefix: &Prefix, data: &str) -> io::Result<()> {
        if self.is_quiet() {
            return Ok(());
        }
        let now = (self.clock)();
        let caller = if prefix.file {
            Some(
                self.resolver
                    .resolve(depth + 1)
                    .unwrap_or_else(Caller::unknown),
            )
        } else {
            None
        };
        self.write_line(now, prefix, caller.as_ref(), data)
    }

    /// Like [`Logger::output`], with the caller already known. `caller` is
    /// only printed when the prefix asks for it; `None` prints placeholders.
    /// # Errors
    /// The destination's write error, unchanged.
    pub fn output_at(&self, caller: Option<Caller>, prefix: &Prefix, data: &str) -> io::Result<()> {
        if self.is_quiet() {
            return Ok(());
        }
        let now = (self.clock)();
        let caller = if prefix.file {
            Some(caller.unwrap_or_else(Caller::unknown))
        } else {
            None
        };
        self.write_line(now, prefix, caller.as_ref(), data)
    }

    fn write_line(
        &self,
        now: SystemTime,
        prefix: &Prefix,
        caller: Option<&Caller>,
        data: &str,
    ) -> io::Result<()> {
        let mut guard = self.state.write();
        let State {
            color,
            timestamp,
            prefix: label,
            out,
            buf,
            ..
        } = &mut *guard;
        let color = *color;

        buf.reset();
        if color {
            buf.off();
        }
        buf.append_byte(b'[');
        buf.append(label.as_bytes());
        buf.append_byte(b']');
        buf.append(if color { prefix.color } else { prefix.plain });

        if *timestamp {
            if color {
                buf.blue();
            }
            let t = Stamp::of(now);
            buf.append_int(i64::from(t.year), 4);
            buf.append_byte(b'/');
            buf.append_int(i64::from(t.month), 2);
            buf.append_byte(b'/');
            buf.append_int(i64::from(t.day), 2);
            buf.append_byte(b' ');
            buf.append_int(i64::from(t.hour), 2);
            buf.append_byte(b':');
            buf.append_int(i64::from(t.minute), 2);
            buf.append_byte(b':');
            buf.append_int(i64::from(t.second), 2);
            buf.append_byte(b' ');
            if color {
                buf.off();
            }
        }

        if let Some(c) = caller {
            if color {
                buf.orange();
            }
            buf.append(c.function.as_bytes());
            buf.append_byte(b':');
            buf.append(c.file.as_bytes());
            buf.append_byte(b':');
            buf.append_int(i64::from(c.line), 0);
            buf.append_byte(b' ');
            if color {
                buf.off();
            }
        }

        buf.append(data.as_bytes());
        if !data.ends_with('\n') {
            buf.append_byte(b'\n');
        }
        // One write per line; a short write is reported, never resumed.
        let line = buf.as_bytes();
        let n = out.write(line)?;
        if n < line.len() {
            return Err(io::Error::from(io::ErrorKind::WriteZero));
        }
        Ok(())
    }

    // ===== Leveled calls =====
    // Plain variants join their arguments with spaces and end the message with
    // a newline; `*f` variants use the formatted text as is.

    /// Log at fatal level, then exit with status 1
    #[inline(never)]
    pub fn fatal(&self, v: &[&dyn Display]) -> ! {
        let _ = self.output(1, &FATAL, &sprintln(v));
        std::process::exit(1)
    }
    /// Log formatted text at fatal level, then exit with status 1
    #[inline(never)]
    pub fn fatalf(&self, args: Arguments<'_>) -> ! {
        let _ = self.output(1, &FATAL, &message(args));
        std::process::exit(1)
    }
    /// Log at error level
    #[inline(never)]
    pub fn error(&self, v: &[&dyn Display]) {
        let _ = self.output(1, &ERROR, &sprintln(v));
    }
    /// Log formatted text at error level
    #[inline(never)]
    pub fn errorf(&self, args: Arguments<'_>) {
        let _ = self.output(1, &ERROR, &message(args));
    }
    /// Log at warn level
    pub fn warn(&self, v: &[&dyn Display]) {
        let _ = self.output(1, &WARN, &sprintln(v));
    }
    /// Log formatted text at warn level
    pub fn warnf(&self, args: Arguments<'_>) {
        let _ = self.output(1, &WARN, &message(args));
    }
    /// Log at info level
    pub fn info(&self, v: &[&dyn Display]) {
        let _ = self.output(1, &INFO, &sprintln(v));
    }
    /// Log formatted text at info level
    pub fn infof(&self, args: Arguments<'_>) {
        let _ = self.output(1, &INFO, &message(args));
    }
    /// Log at debug level, if debug output is on. Nothing is formatted
    /// otherwise.
    #[inline(never)]
    pub fn debug(&self, v: &[&dyn Display]) {
        if self.is_debug() {
            let _ = self.output(1, &DEBUG, &sprintln(v));
        }
    }
    /// Log formatted text at debug level, if debug output is on
    #[inline(never)]
    pub fn debugf(&self, args: Arguments<'_>) {
        if self.is_debug() {
            let _ = self.output(1, &DEBUG, &message(args));
        }
    }
    /// Log at trace level, if debug output is on
    pub fn trace(&self, v: &[&dyn Display]) {
        if self.is_debug() {
            let _ = self.output(1, &TRACE, &sprintln(v));
        }
    }
    /// Log formatted text at trace level, if debug output is on
    pub fn tracef(&self, args: Arguments<'_>) {
        if self.is_debug() {
            let _ = self.output(1, &TRACE, &message(args));
        }
    }
}

/// Values separated by single spaces, newline-terminated.
fn sprintln(v: &[&dyn Display]) -> String {
    let mut s = String::new();
    for (i, x) in v.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{x}");
    }
    s.push('\n');
    s
}

/// Formatted text, borrowed when there is nothing to substitute.
#[doc(hidden)]
#[must_use]
pub fn message(args: Arguments<'_>) -> Cow<'static, str> {
    args.as_str()
        .map_or_else(|| Cow::Owned(args.to_string()), Cow::Borrowed)
}
