use std::env;

use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, SetLoggerError};

/// Level comes from `KOSMO_LOG`, falling back to `info`.
pub fn init() -> Result<(), SetLoggerError> {
    let level = env::var("KOSMO_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("hyper", LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()
}
