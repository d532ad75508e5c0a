use crate::error::{CommonError, CommonResult};
use pagecraft_document::{parse_document, ComponentCatalog, ComponentNode};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File system abstraction for document loading and testing
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

/// In-memory file system for testing
#[derive(Default)]
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        })
    }
}

/// Read and parse an editor document from disk
pub fn load_document(
    fs: &dyn FileSystem,
    path: &Path,
    catalog: &ComponentCatalog,
) -> CommonResult<Option<ComponentNode>> {
    if !fs.exists(path) {
        return Err(CommonError::NotFound(path.to_path_buf()));
    }

    let source = fs.read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "Read document");

    Ok(parse_document(&source, catalog)?)
}
