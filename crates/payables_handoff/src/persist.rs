use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("hand-off path {dir:?} exists but is not a directory")]
    NotADirectory { dir: PathBuf },
    #[error("cannot prepare hand-off directory {dir:?}: {source}")]
    Prepare {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write manifest {target:?}: {source}")]
    Write {
        target: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The directory a backend polls for manifests.
///
/// Every manifest lands through a temp file in the same directory followed by
/// a rename, so a poller sees either the previous file or the complete new one.
#[derive(Debug, Clone)]
pub struct ManifestDir {
    dir: PathBuf,
}

impl ManifestDir {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Creates the directory when missing and checks that new files can be
    /// placed in it.
    pub fn prepare(&self) -> Result<(), PersistError> {
        let prepare_err = |source| PersistError::Prepare {
            dir: self.dir.clone(),
            source,
        };
        match fs::metadata(&self.dir) {
            Ok(meta) if !meta.is_dir() => {
                return Err(PersistError::NotADirectory {
                    dir: self.dir.clone(),
                })
            }
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&self.dir).map_err(prepare_err)?;
            }
            Err(err) => return Err(prepare_err(err)),
        }
        // Dropping the temp file removes it again.
        NamedTempFile::new_in(&self.dir).map_err(prepare_err)?;
        Ok(())
    }

    /// Stores `body` as `{dir}/{filename}`, replacing an older manifest of the
    /// same name.
    pub fn store(&self, filename: &str, body: &[u8]) -> Result<PathBuf, PersistError> {
        self.prepare()?;

        let target = self.dir.join(filename);
        let write_err = |source| PersistError::Write {
            target: target.clone(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(body).map_err(write_err)?;
        tmp.as_file_mut().sync_all().map_err(write_err)?;
        tmp.persist(&target).map_err(|e| write_err(e.error))?;
        Ok(target)
    }
}
