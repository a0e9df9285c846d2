//! File storage for uploaded template blobs.
//!
//! Uploaded `.docx` files live under `<data dir>/doc_templates/`. Writes go
//! through a temp file in the same directory and are moved into place, so a
//! half-written upload never replaces a good template. Reads are scoped to a
//! single call; no handle outlives the operation that opened it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const TEMPLATE_SUBDIR: &str = "doc_templates";

pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Creates the storage layout. Safe to call on every start.
    pub fn ensure_layout(&self) -> std::io::Result<()> {
        fs::create_dir_all(self.root.join(TEMPLATE_SUBDIR))
    }

    pub fn template_path(&self, file_name: &str) -> PathBuf {
        self.root.join(TEMPLATE_SUBDIR).join(file_name)
    }

    /// Stores uploaded bytes under `file_name` and returns their md5 hash.
    pub fn save_template_file(&self, file_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        let dir = self.root.join(TEMPLATE_SUBDIR);
        fs::create_dir_all(&dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(dir.join(file_name)).map_err(|e| e.error)?;
        Ok(format!("{:x}", md5::compute(bytes)))
    }

    pub fn read_template_file(&self, file_name: &str) -> std::io::Result<Vec<u8>> {
        fs::read(self.template_path(file_name))
    }

    /// Removes a stored blob, tolerating one that is already gone.
    pub fn remove_template_file(&self, file_name: &str) -> std::io::Result<()> {
        match fs::remove_file(self.template_path(file_name)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
