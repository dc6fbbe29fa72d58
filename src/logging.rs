use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::path::PathBuf;

/// Start the file logger. The TUI owns the terminal, so nothing may be
/// written to stdout/stderr; everything goes to ~/.pinboard/logs/.
/// The returned handle must stay alive for the duration of the program.
pub fn init(level: &str) -> Result<LoggerHandle> {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let dir = PathBuf::from(home).join(".pinboard").join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_file(FileSpec::default().directory(&dir).basename("pinboard"))
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    Ok(handle)
}
