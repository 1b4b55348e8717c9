#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use colorlog::{Config, FdWriter, Logger, NoCaller};

// In-memory sink that also counts write calls
#[derive(Clone, Default)]
pub struct Mem {
    buf: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

impl Write for Mem {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FdWriter for Mem {}

impl Mem {
    pub fn text(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text()
            .lines()
            .map(std::string::ToString::to_string)
            .collect()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.buf.lock().unwrap().clear();
        self.writes.store(0, Ordering::SeqCst);
    }
}

/// Config writing to `mem`, without stack walking (deterministic output)
pub fn mem_config(mem: &Mem) -> Config {
    Config::new().out(mem.clone()).resolver(NoCaller)
}

pub fn mem_logger() -> (Logger, Mem) {
    let mem = Mem::default();
    let lg = Logger::new(mem_config(&mem)).unwrap();
    (lg, mem)
}
