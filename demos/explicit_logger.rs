use std::sync::Arc;
use std::thread;

use colorlog::{info, Config, Logger};

fn main() {
    // A logger owned by the composition root and handed to workers,
    // instead of the process-wide one.
    let log = match Logger::new(Config::new().out(std::io::stdout()).prefix("worker")) {
        Ok(log) => Arc::new(log),
        Err(e) => {
            eprintln!("logger: {e}");
            return;
        }
    };
    log.with_timestamp();

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for step in 0..3 {
                    info!(log, "worker {id} step {step}");
                }
            })
        })
        .collect();
    for h in handles {
        if h.join().is_err() {
            log.error(&[&"worker panicked"]);
        }
    }
    log.error(&[&"all workers done"]);
}
