//! Output destinations.

use std::fs::File;
use std::io::{self, IsTerminal, Write};

/// A writer that can also report the OS handle behind it.
///
/// The handle and [`FdWriter::is_terminal`] are used when deciding whether
/// to enable color (see [`crate::ColorMode`]); the logger itself only writes.
pub trait FdWriter: Write + Send + Sync {
    /// Raw file descriptor (Unix) or handle (Windows), if there is one
    fn fd(&self) -> Option<usize> {
        None
    }
    /// Whether the sink is attached to a terminal
    fn is_terminal(&self) -> bool {
        false
    }
}

#[cfg(unix)]
fn raw<T: std::os::fd::AsRawFd>(t: &T) -> Option<usize> {
    usize::try_from(t.as_raw_fd()).ok()
}
#[cfg(windows)]
fn raw<T: std::os::windows::io::AsRawHandle>(t: &T) -> Option<usize> {
    Some(t.as_raw_handle() as usize)
}
#[cfg(not(any(unix, windows)))]
fn raw<T>(_: &T) -> Option<usize> {
    None
}

impl FdWriter for io::Stdout {
    fn fd(&self) -> Option<usize> {
        raw(self)
    }
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl FdWriter for io::Stderr {
    fn fd(&self) -> Option<usize> {
        raw(self)
    }
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl FdWriter for File {
    fn fd(&self) -> Option<usize> {
        raw(self)
    }
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl FdWriter for Vec<u8> {}

impl<W: FdWriter + ?Sized> FdWriter for Box<W> {
    fn fd(&self) -> Option<usize> {
        (**self).fd()
    }
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}
