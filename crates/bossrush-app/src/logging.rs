//! Logger setup: timestamped lines on stderr so stdout stays a clean
//! snapshot stream.

use log::LevelFilter;

pub fn setup_logging(level: LevelFilter) -> Result<(), String> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| format!("Failed to initialise logging: {e}"))
}
