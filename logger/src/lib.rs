use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Writes timestamped lines to `<log_dir>/<component>.log`, optionally
/// echoing them to the console in color.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates a new `Logger` for a component.
    ///
    /// # Parameters
    /// - `log_dir`: Directory for the log file. Created if missing.
    /// - `component`: Name of the log file, without extension.
    ///
    /// # Returns
    /// A new `Logger` whose file has been truncated.
    pub fn new(log_dir: &Path, component: &str) -> Result<Self, LoggerError> {
        if log_dir.exists() && !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory.",
                log_dir.display()
            )));
        }
        std::fs::create_dir_all(log_dir)?;

        let file_name = component.replace([':', '/', '\\'], "_");
        let log_file = log_dir.join(format!("{}.log", file_name));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger { log_file })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = match &level {
            LogLevel::Info(_) => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        if to_console {
            let colored_message = match &level {
                LogLevel::Info(color) => format!("{}{}\x1b[0m", color.to_ansi_code(), log_message),
                LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", log_message), // Bright Yellow
                LogLevel::Error => format!("\x1b[91m{}\x1b[0m", log_message), // Bright Red
            };
            print!("{}", colored_message);
            io::stdout().flush()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        file.write_all(log_message.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("logger_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_logger_creation_and_logging() {
        let log_dir = scratch_dir("levels");

        let logger = Logger::new(&log_dir, "region_search").expect("Failed to create logger");
        logger
            .info("search #1 dispatched", Color::Green, false)
            .expect("Failed to log message");
        logger.warn("slow answer", false).expect("Failed to log");
        logger.error("search #2 failed", false).expect("Failed to log");

        let log_contents =
            fs::read_to_string(log_dir.join("region_search.log")).expect("Failed to read log");

        assert!(log_contents.contains("[INFO]"));
        assert!(log_contents.contains("search #1 dispatched"));
        assert!(log_contents.contains("[WARN]"));
        assert!(log_contents.contains("[ERROR]"));

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_missing_directory_is_created() {
        let log_dir = scratch_dir("nested").join("inner");

        let logger = Logger::new(&log_dir, "map:ui").expect("Failed to create logger");

        assert!(logger.log_file().ends_with("map_ui.log"));
        assert!(logger.log_file().exists());

        fs::remove_dir_all(log_dir.parent().unwrap()).expect("Failed to remove test directory");
    }

    #[test]
    fn test_file_path_is_rejected() {
        let log_dir = scratch_dir("file");
        fs::create_dir_all(&log_dir).unwrap();
        let file_path = log_dir.join("not_a_dir");
        fs::write(&file_path, "x").unwrap();

        let result = Logger::new(&file_path, "map");
        assert!(matches!(result, Err(LoggerError::InvalidPath(_))));

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }
}
