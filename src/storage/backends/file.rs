use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::errors::{Result, UtmError};
use crate::storage::KeyValueStore;

/// 文件存储：每个键保存为 `<data_dir>/<key>.json`
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(UtmError::file_operation(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn save(&self, key: &str, json: &str) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| {
                error!("Failed to create data directory: {}", e);
                UtmError::file_operation(format!(
                    "Failed to create data directory {}: {}",
                    self.data_dir.display(),
                    e
                ))
            })?;
            debug!("Created data directory: {}", self.data_dir.display());
        }

        let path = self.path_for(key);
        fs::write(&path, json).map_err(|e| {
            error!("Failed to write record file: {}", e);
            UtmError::file_operation(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
