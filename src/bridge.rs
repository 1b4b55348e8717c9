//! Routes records from the `log` facade through a [`Logger`].

use std::borrow::Cow;

use log::{Level as LogLevel, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::caller::{base_name, Caller, UNKNOWN_FILE, UNKNOWN_FUNCTION};
use crate::logger::message;
use crate::prefix::{Prefix, DEBUG, ERROR, INFO, TRACE, WARN};
use crate::Logger;

struct Bridge(&'static Logger);

fn prefix_for(l: LogLevel) -> &'static Prefix {
    match l {
        LogLevel::Error => &ERROR,
        LogLevel::Warn => &WARN,
        LogLevel::Info => &INFO,
        LogLevel::Debug => &DEBUG,
        LogLevel::Trace => &TRACE,
    }
}

fn caller_of(record: &Record<'_>) -> Caller {
    let file = match (record.file_static(), record.file()) {
        (Some(f), _) => Cow::Borrowed(base_name(f)),
        (None, Some(f)) => Cow::Owned(base_name(f).to_owned()),
        (None, None) => Cow::Borrowed(UNKNOWN_FILE),
    };
    let function = match (record.module_path_static(), record.module_path()) {
        (Some(m), _) => Cow::Borrowed(m),
        (None, Some(m)) => Cow::Owned(m.to_owned()),
        (None, None) => Cow::Borrowed(UNKNOWN_FUNCTION),
    };
    Caller {
        file,
        line: record.line().unwrap_or(0),
        function,
    }
}

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        match metadata.level() {
            LogLevel::Debug | LogLevel::Trace => self.0.is_debug(),
            _ => true,
        }
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let prefix = prefix_for(record.level());
        let caller = prefix.file.then(|| caller_of(record));
        let _ = self.0.output_at(caller, prefix, &message(*record.args()));
    }

    fn flush(&self) {
        let _ = self.0.flush();
    }
}

/// Install `logger` as the `log` facade's backend. Debug and trace records
/// follow the logger's debug switch at the time they are logged.
/// # Errors
/// If another `log` backend is already installed.
pub fn install(logger: &'static Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Bridge(logger)))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
