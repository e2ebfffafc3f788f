use crate::ports::outbound::{ContentHasher, HashOutcome};
use crate::prerequisite_analysis::policies::MissingFilePolicy;
use crate::shared::error::PrereqError;
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Files are streamed through the hasher in chunks of this size
const CHUNK_SIZE: usize = 8192;

/// Sha256FileHasher adapter for digesting file contents from disk
///
/// All files feed one SHA-256 state, so the digest covers their logical
/// concatenation and depends on the order of `paths`. Relative paths are
/// resolved against the base directory, which is the one make ran in.
pub struct Sha256FileHasher {
    base_dir: Option<PathBuf>,
}

impl Sha256FileHasher {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.base_dir {
            Some(base_dir) => base_dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Streams one file into `hasher`
    fn update_from_file(hasher: &mut Sha256, path: &Path, mut file: File) -> Result<()> {
        let mut buffer = [0u8; CHUNK_SIZE];
        loop {
            let read = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(PrereqError::FileReadError {
                        path: path.to_path_buf(),
                        details: e.to_string(),
                    }
                    .into())
                }
            };
            hasher.update(&buffer[..read]);
        }
        Ok(())
    }
}

impl Default for Sha256FileHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHasher for Sha256FileHasher {
    fn hash_files(&self, paths: &[String], policy: MissingFilePolicy) -> Result<HashOutcome> {
        let mut hasher = Sha256::new();
        let mut missing = Vec::new();

        for name in paths {
            let path = self.resolve(name);
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::NotFound => match policy {
                    MissingFilePolicy::Skip => {
                        missing.push(name.clone());
                        continue;
                    }
                    MissingFilePolicy::Fail => {
                        return Err(PrereqError::MissingFile { path }.into());
                    }
                },
                Err(e) => {
                    return Err(PrereqError::FileReadError {
                        path,
                        details: e.to_string(),
                    }
                    .into());
                }
            };

            Self::update_from_file(&mut hasher, &path, file)?;
        }

        Ok(HashOutcome {
            digest: hex::encode(hasher.finalize()),
            missing,
        })
    }
}
