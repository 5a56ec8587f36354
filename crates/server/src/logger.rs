use log::{LevelFilter, SetLoggerError};
use std::io::Write;

use chrono::Local;

/// Line format: `[timestamp level file:line] message`.
///
/// Defaults to `info` for this crate and `warn` for the HTTP stack underneath;
/// `RUST_LOG` overrides both.
pub fn setup_logger() -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .format(|buf, record| {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                timestamp,
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .try_init()
}
