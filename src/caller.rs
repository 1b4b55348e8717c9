//! Caller location lookup.
//!
//! Levels whose prefix asks for it print the function, file and line of the
//! code that logged. [`Logger::output`](crate::Logger::output) finds them
//! through a [`CallerResolver`]; the leveled macros capture them at the call
//! site instead and skip the lookup entirely.

use std::borrow::Cow;
#[cfg(feature = "backtrace")]
use std::path::Path;

/// Placeholder printed when the file cannot be determined
pub const UNKNOWN_FILE: &str = "<unknown file>";
/// Placeholder printed when the function cannot be determined
pub const UNKNOWN_FUNCTION: &str = "<unknown function>";

/// Where a log call came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Base name of the source file
    pub file: Cow<'static, str>,
    /// 1-based line number, 0 when unknown
    pub line: u32,
    /// Fully-qualified function path
    pub function: Cow<'static, str>,
}

impl Caller {
    /// Build a caller from static parts. Directories are stripped from `file`.
    #[must_use]
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file: Cow::Borrowed(base_name(file)),
            line,
            function: Cow::Borrowed(function),
        }
    }

    /// The placeholder used when lookup fails
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file: Cow::Borrowed(UNKNOWN_FILE),
            line: 0,
            function: Cow::Borrowed(UNKNOWN_FUNCTION),
        }
    }
}

/// Strips every directory component, accepting both separators.
#[must_use]
pub fn base_name(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}

/// Finds the caller of a logging routine.
pub trait CallerResolver: Send + Sync {
    /// Describe the function `depth` frames above the one calling `resolve`.
    /// Depth 0 is the calling function itself.
    fn resolve(&self, depth: usize) -> Option<Caller>;
}

/// Resolver for platforms without stack inspection. Always unresolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCaller;

impl CallerResolver for NoCaller {
    fn resolve(&self, _depth: usize) -> Option<Caller> {
        None
    }
}

/// Resolver that walks the native stack and reads debug info.
///
/// Inlined functions are counted as frames of their own, as long as the
/// binary carries line tables. A frame lacking file or line info comes back
/// unresolved rather than guessed, so builds without debug info print the
/// placeholders.
#[cfg(feature = "backtrace")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StackWalker;

#[cfg(feature = "backtrace")]
impl CallerResolver for StackWalker {
    #[inline(never)]
    fn resolve(&self, depth: usize) -> Option<Caller> {
        // Frames up to and including this method are skipped by locating it
        // by name; everything after it is counted.
        const SELF_SUFFIX: &str = "CallerResolver>::resolve";

        let mut anchor: Option<usize> = None;
        let mut index = 0usize;
        let mut found = None;
        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if found.is_some() {
                    return;
                }
                match anchor {
                    None => {
                        let is_self = symbol
                            .name()
                            .is_some_and(|n| format!("{n:#}").ends_with(SELF_SUFFIX));
                        if is_self {
                            anchor = Some(index);
                        }
                    }
                    Some(a) if index == a + 1 + depth => {
                        found = Some(describe(
                            symbol.name().map(|n| format!("{n:#}")),
                            symbol.filename(),
                            symbol.lineno(),
                        ));
                    }
                    Some(_) => {}
                }
                index += 1;
            });
            found.is_none()
        });
        found.flatten()
    }
}

/// A frame without a file and line is not trusted: without line tables the
/// frames inlined into it are invisible, so its position in the walk may not
/// match `depth`.
#[cfg(feature = "backtrace")]
fn describe(name: Option<String>, file: Option<&Path>, line: Option<u32>) -> Option<Caller> {
    let file = file?.file_name()?.to_string_lossy().into_owned();
    let line = line.filter(|&l| l > 0)?;
    Some(Caller {
        file: Cow::Owned(file),
        line,
        function: name.map_or(Cow::Borrowed(UNKNOWN_FUNCTION), Cow::Owned),
    })
}

/// The resolver a fresh [`Config`](crate::Config) starts with.
#[must_use]
pub fn default_resolver() -> Box<dyn CallerResolver> {
    #[cfg(feature = "backtrace")]
    {
        Box::new(StackWalker)
    }
    #[cfg(not(feature = "backtrace"))]
    {
        Box::new(NoCaller)
    }
}

#[doc(hidden)]
#[must_use]
pub fn __type_name_of<T>(_: T) -> &'static str {
    core::any::type_name::<T>()
}

#[doc(hidden)]
#[must_use]
pub fn __enclosing_function(marker: &'static str) -> &'static str {
    marker.strip_suffix("::__colorlog_here").unwrap_or(marker)
}

/// Capture the current file, line and enclosing function as a [`Caller`].
#[macro_export]
macro_rules! caller {
    () => {{
        fn __colorlog_here() {}
        $crate::Caller::new(
            file!(),
            line!(),
            $crate::caller::__enclosing_function($crate::caller::__type_name_of(__colorlog_here)),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("src/logger.rs"), "logger.rs");
        assert_eq!(base_name(r"C:\work\main.rs"), "main.rs");
        assert_eq!(base_name("main.rs"), "main.rs");
        assert_eq!(base_name(""), "");
    }

    #[test]
    fn caller_macro_names_the_enclosing_function() {
        let c = caller!();
        assert_eq!(c.file, "caller.rs");
        assert_eq!(c.line, line!() - 2);
        assert_eq!(
            c.function,
            "colorlog::caller::tests::caller_macro_names_the_enclosing_function"
        );
    }

    #[test]
    fn no_caller_never_resolves() {
        assert_eq!(NoCaller.resolve(0), None);
        assert_eq!(NoCaller.resolve(3), None);
    }

    #[cfg(feature = "backtrace")]
    #[test]
    fn stack_walker_finds_this_test() {
        #[inline(never)]
        fn probe() -> Option<Caller> {
            StackWalker.resolve(1)
        }
        // Depends on debug info being present; only check it when resolved.
        if let Some(c) = probe() {
            assert_eq!(c.file, "caller.rs");
            assert!(c.function.contains("stack_walker_finds_this_test"), "{c:?}");
            assert!(c.line > 0);
        }
    }

    #[cfg(feature = "backtrace")]
    #[test]
    fn frames_without_line_info_are_unresolved() {
        let name = || Some("core::ops::function::FnOnce::call_once".to_owned());
        assert_eq!(describe(name(), None, None), None);
        assert_eq!(describe(name(), None, Some(12)), None);
        assert_eq!(describe(name(), Some(Path::new("src/main.rs")), None), None);
        assert_eq!(describe(name(), Some(Path::new("src/main.rs")), Some(0)), None);
    }

    #[cfg(feature = "backtrace")]
    #[test]
    fn frames_with_line_info_are_described() {
        let c = describe(None, Some(Path::new("/work/src/main.rs")), Some(7)).unwrap();
        assert_eq!(c.file, "main.rs");
        assert_eq!(c.line, 7);
        assert_eq!(c.function, UNKNOWN_FUNCTION);

        let c = describe(Some("app::run".into()), Some(Path::new("lib.rs")), Some(3)).unwrap();
        assert_eq!(c.function, "app::run");
    }
}
