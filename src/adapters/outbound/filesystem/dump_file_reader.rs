use crate::ports::outbound::DatabaseReader;
use crate::shared::error::PrereqError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum dump size (256 MB); large projects produce databases of tens of MB
const MAX_DUMP_SIZE: u64 = 256 * 1024 * 1024;

/// Path that selects standard input instead of a file
const STDIN_PATH: &str = "-";

/// DumpFileReader adapter for reading a saved `make -pq` database
///
/// Lets the tool run where make is unavailable, or against a database
/// captured earlier with `make -pq > database.txt`.
pub struct DumpFileReader {
    path: PathBuf,
}

impl DumpFileReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn reads_stdin(&self) -> bool {
        self.path == Path::new(STDIN_PATH)
    }

    fn read_error(&self, details: impl Into<String>) -> anyhow::Error {
        PrereqError::DatabaseReadError {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Reads the dump file after checking it is a regular file of sane size
    fn safe_read_file(&self) -> Result<String> {
        let metadata = fs::metadata(&self.path)
            .map_err(|e| self.read_error(format!("Failed to read metadata: {}", e)))?;

        if !metadata.is_file() {
            return Err(self.read_error("Not a regular file"));
        }

        if metadata.len() > MAX_DUMP_SIZE {
            return Err(self.read_error(format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                MAX_DUMP_SIZE
            )));
        }

        let bytes = fs::read(&self.path).map_err(|e| self.read_error(e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl DatabaseReader for DumpFileReader {
    fn read_database(&self) -> Result<String> {
        if self.reads_stdin() {
            return io::read_to_string(io::stdin()).map_err(|e| self.read_error(e.to_string()));
        }
        self.safe_read_file()
    }

    fn describe(&self) -> String {
        if self.reads_stdin() {
            "standard input".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}
