use crate::credential::{CredentialError, CredentialResult, CredentialStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Credential persisted as a single file named after the storage key.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
    key: String,
}

impl FileCredentialStore {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.key)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> CredentialResult<Option<String>> {
        let path = self.path();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No credential at {path:?}");
                return Ok(None);
            }
            Err(e) => return Err(CredentialError::file_read(path, e)),
        };

        let token = contents.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    /// Saves the token using the write-sync-rename pattern so a crash never
    /// leaves a half-written credential behind.
    fn save(&self, token: &str) -> CredentialResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| CredentialError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{}.tmp.{}", self.key, std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| CredentialError::file_write(temp_path.clone(), e))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.set_permissions(fs::Permissions::from_mode(0o600))
                    .map_err(|e| CredentialError::file_write(temp_path.clone(), e))?;
            }

            file.write_all(token.as_bytes())
                .map_err(|e| CredentialError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| CredentialError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CredentialError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!("Saved credential to {final_path:?}");
        Ok(())
    }

    fn clear(&self) -> CredentialResult<()> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Cleared credential at {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialError::remove(path, e)),
        }
    }
}
