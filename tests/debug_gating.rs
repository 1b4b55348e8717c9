mod helpers;
use helpers::*;

use core::fmt;
use std::cell::Cell;

use colorlog::{debug, trace};

// Display impl that counts how often it is formatted
struct Counted<'a>(&'a Cell<usize>);
impl fmt::Display for Counted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.set(self.0.get() + 1);
        f.write_str("counted")
    }
}

#[test]
fn suppressed_debug_does_not_format() {
    let (lg, mem) = mem_logger();
    let hits = Cell::new(0);

    lg.debug(&[&Counted(&hits)]);
    lg.trace(&[&Counted(&hits)]);
    lg.debugf(format_args!("{}", Counted(&hits)));
    lg.tracef(format_args!("{}", Counted(&hits)));
    assert_eq!(hits.get(), 0);
    assert_eq!(mem.writes(), 0);

    lg.with_debug();
    lg.debug(&[&Counted(&hits)]);
    lg.tracef(format_args!("{}", Counted(&hits)));
    assert_eq!(hits.get(), 2);
    assert_eq!(mem.writes(), 2);
}

#[test]
fn suppressed_macros_do_not_evaluate_arguments() {
    let (lg, mem) = mem_logger();
    let evaluated = Cell::new(0);
    let bump = || {
        evaluated.set(evaluated.get() + 1);
        1
    };

    debug!(lg, "{}", bump());
    trace!(lg, "{}", bump());
    assert_eq!(evaluated.get(), 0);
    assert_eq!(mem.writes(), 0);

    lg.with_debug();
    trace!(lg, "{}", bump());
    assert_eq!(evaluated.get(), 1);
    assert_eq!(mem.lines(), ["[][TRACE] 1"]);

    lg.without_debug();
    debug!(lg, "{}", bump());
    assert_eq!(evaluated.get(), 1);
}
