use crate::error::Result;
use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends every record at `Debug` or above to a file.
pub struct FileLogger {
    file_path: PathBuf,
}

impl FileLogger {
    /// Creates the logger, making sure the file can be opened for appending.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        OpenOptions::new().create(true).append(true).open(&file_path)?;
        Ok(Self { file_path })
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
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

/// Installs a [`FileLogger`] writing to `path` as the global logger.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    let logger = FileLogger::new(path)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_file_logger_appends_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nightfilter.log");
        let logger = FileLogger::new(&path).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("filter_css")
                .args(format_args!("css for url: {}", "example.com"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Trace)
                .target("filter_css")
                .args(format_args!("dropped"))
                .build(),
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "[DEBUG] filter_css: css for url: example.com\n");
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileLogger::new(dir.path().join("missing").join("out.log"));
        assert!(matches!(result, Err(crate::NightfilterError::IO(_))));
    }
}
