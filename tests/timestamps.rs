#![cfg(not(feature = "localtime"))]
mod helpers;
use helpers::*;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use colorlog::prefix::INFO;
use colorlog::Logger;

// 2024-03-07 09:05:03 UTC
fn fixed() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_709_802_303)
}

#[test]
fn fixed_clock_formats_with_padding() {
    let mem = Mem::default();
    let lg = Logger::new(mem_config(&mem).clock(fixed).timestamp(true)).unwrap();
    lg.output(0, &INFO, "ts").unwrap();
    assert_eq!(mem.text(), "[][INFO]  2024/03/07 09:05:03 ts\n");
}

#[test]
fn timestamp_toggle() {
    let mem = Mem::default();
    let lg = Logger::new(mem_config(&mem).clock(fixed)).unwrap();
    lg.info(&[&"off"]);
    lg.with_timestamp();
    lg.info(&[&"on"]);
    lg.without_timestamp();
    lg.info(&[&"off again"]);
    assert_eq!(
        mem.lines(),
        ["[][INFO]  off", "[][INFO]  2024/03/07 09:05:03 on", "[][INFO]  off again"]
    );
}

#[test]
fn system_clock_shape() {
    let mem = Mem::default();
    let lg = Logger::new(mem_config(&mem).timestamp(true)).unwrap();
    lg.info(&[&"now"]);
    let line = mem.text();
    // "[][INFO]  YYYY/MM/DD hh:mm:ss now\n"
    let stamp = &line["[][INFO]  ".len().."[][INFO]  YYYY/MM/DD hh:mm:ss ".len()];
    let bytes = stamp.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match i {
            4 | 7 => assert_eq!(*b, b'/', "{stamp}"),
            10 | 19 => assert_eq!(*b, b' ', "{stamp}"),
            13 | 16 => assert_eq!(*b, b':', "{stamp}"),
            _ => assert!(b.is_ascii_digit(), "{stamp}"),
        }
    }
}
