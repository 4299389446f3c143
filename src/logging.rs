//! Activity logging persistence layer
//!
//! Records one line per API interaction (likes, composes) without
//! blocking the UI thread. Logs are stored in
//! XDG_DATA_HOME/warbler-client/logs/YYYY-MM-DD.log

use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::thread;

/// A log entry to be written to disk
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub action: String,
    pub detail: String,
}

/// ActivityLogger manages file-based logging without blocking the UI thread
pub struct ActivityLogger {
    /// Channel to send log entries to the background thread
    tx: Sender<LogEntry>,
    log_dir: PathBuf,
}

impl ActivityLogger {
    /// Create a new logger and spawn a background thread for the I/O
    pub fn new() -> Result<Self, String> {
        let log_dir = get_log_directory()?;

        fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;

        let (tx, rx) = unbounded::<LogEntry>();

        let log_dir_clone = log_dir.clone();
        thread::spawn(move || {
            run_logger_thread(rx, log_dir_clone);
        });

        Ok(Self { tx, log_dir })
    }

    /// Log an interaction (non-blocking, queued for background writing)
    pub fn log(&self, entry: LogEntry) {
        // If send fails, the logger thread has stopped - silently ignore
        let _ = self.tx.send(entry);
    }

    pub fn log_directory(&self) -> &PathBuf {
        &self.log_dir
    }
}

/// Background thread that handles all file I/O
fn run_logger_thread(rx: Receiver<LogEntry>, log_dir: PathBuf) {
    let mut writer: Option<(String, BufWriter<File>)> = None;

    while let Ok(entry) = rx.recv() {
        if let Err(e) = write_log_entry(&mut writer, &log_dir, &entry) {
            eprintln!("Activity logger error: {}", e);
        }
    }

    if let Some((_, mut w)) = writer.take() {
        let _ = w.flush();
    }
}

/// Write a single log entry to today's file, rotating at midnight
fn write_log_entry(
    writer: &mut Option<(String, BufWriter<File>)>,
    log_dir: &std::path::Path,
    entry: &LogEntry,
) -> Result<(), String> {
    let date = Local::now().format("%Y-%m-%d").to_string();

    let needs_open = match writer {
        Some((open_date, _)) => *open_date != date,
        None => true,
    };

    if needs_open {
        let path = log_dir.join(format!("{}.log", date));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| format!("Failed to open log file: {}", e))?;
        *writer = Some((date, BufWriter::new(file)));
    }

    let (_, w) = writer.as_mut().expect("writer opened above");

    // Format: [HH:MM:SS] action detail
    writeln!(w, "[{}] {} {}", entry.timestamp, entry.action, entry.detail)
        .map_err(|e| format!("Failed to write log entry: {}", e))?;

    w.flush().map_err(|e| format!("Failed to flush log: {}", e))?;

    Ok(())
}

/// Get the platform-specific log directory using XDG conventions
fn get_log_directory() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new().ok_or("Failed to determine home directory")?;

    let data_dir = base.data_dir();
    Ok(data_dir.join("warbler-client").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_path() {
        let result = get_log_directory();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().contains("warbler-client"));
        assert!(path.to_string_lossy().contains("logs"));
    }

    #[test]
    fn test_logger_accepts_entries_after_init() {
        if let Ok(logger) = ActivityLogger::new() {
            logger.log(LogEntry {
                timestamp: "12:00:00".into(),
                action: "like".into(),
                detail: "warble 42".into(),
            });
            assert!(logger.log_directory().ends_with("logs"));
        }
    }
}
