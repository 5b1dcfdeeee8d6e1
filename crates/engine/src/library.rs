//! Library scripts on disk
//!
//! A library script named `helpers` lives at `<dir>/helpers.<extension>`.
//! The directory is taken from configuration when set; otherwise it is the
//! `scripts` directory of the installation the running executable belongs
//! to (`<root>/bin/<exe>` → `<root>/scripts`), or `./scripts` when the
//! executable's location is unknown.

use std::path::{Path, PathBuf};

use graphscript_core::{Error, Result};

/// Name of the library directory under the installation root
pub const SCRIPT_DIR_NAME: &str = "scripts";

/// Default library file extension, without the dot
pub const DEFAULT_SCRIPT_EXTENSION: &str = "gremlin";

/// Resolves and reads library scripts
#[derive(Debug, Clone)]
pub struct ScriptLibrary {
    dir: PathBuf,
    extension: String,
}

impl ScriptLibrary {
    /// Library rooted at `dir` with files ending in `.<extension>`
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// `<install root>/scripts`, falling back to `./scripts`
    pub fn default_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
            .map(|root| root.join(SCRIPT_DIR_NAME))
            .unwrap_or_else(|| Path::new(".").join(SCRIPT_DIR_NAME))
    }

    /// Library directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Library file extension
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path of the library script `name`.
    ///
    /// The name is used verbatim; no file is touched.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    /// Read a library file as UTF-8 text
    pub fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::ScriptLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
