use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

struct FileLogger {
    file_path: PathBuf,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Send `log` records from this crate and `ansi` to a file, appending.
///
/// Fails if a logger is already installed.
pub fn init_logger(path: impl Into<PathBuf>) -> Result<()> {
    let logger = FileLogger {
        file_path: path.into(),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termwrap.log");
        init_logger(&path).unwrap();

        assert!(ansi::apply("not_a_color", "x").is_err());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[DEBUG]"), "{}", contents);
        assert!(contents.contains("not_a_color"), "{}", contents);

        // a second logger cannot be installed
        assert!(init_logger(&path).is_err());
    }
}
