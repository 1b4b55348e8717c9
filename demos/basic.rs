use colorlog::{debug, error, info, warn, ColorMode, Config};

fn main() {
    // Environment overrides (optional):
    //   RUST_LOG_COLOR=always RUST_LOG_DEBUG=1 RUST_LOG_SHOW_TIME=1 RUST_LOG_PREFIX=demo
    let config = Config::new()
        .out(std::io::stderr())
        .prefix("basic")
        .color_mode(ColorMode::Auto)
        .timestamp(true)
        .with_env();
    let log = match colorlog::init(config) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("logger: {e}");
            std::process::exit(2);
        }
    };
    log.with_debug();

    log.trace(&[&"hello", &"world"]);
    log.debugf(format_args!("hello {}", "world"));
    log.info(&[&"hello", &"world"]);
    log.warnf(format_args!("disk almost full: {}%", 92));
    log.error(&[&"disk almost full:", &92]);

    info!(log, "listening on {}", 8080);
    warn!(log, "retry in {} ms", 200);
    error!(log, "connection reset");
    debug!(log, "only visible with debug on");

    log.fatalf(format_args!("giving up after {} attempts", 3));
}
