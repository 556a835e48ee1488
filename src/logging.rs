use std::fs::File;

use anyhow::Result;

use crate::config::AppConfig;

/// Logs go to a file because stderr is unusable once the alternate
/// screen is active. RUST_LOG still controls filtering.
pub fn setup_logging() -> Result<()> {
    let log_path = AppConfig::config_dir()?.join("marquee.log");
    let log_file = File::create(&log_path)?;

    let mut builder = env_logger::Builder::new();
    builder.filter(None, log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    builder.init();

    Ok(())
}
