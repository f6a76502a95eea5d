//! Scoped temporary workspace.

use crate::HalResult;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WORKSPACE_PREFIX: &str = "teensy-flash-";

/// RAII guard over a temporary directory; the directory and everything in it
/// is removed when the guard is dropped.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace under `parent`, or under the system temp dir.
    pub fn create(parent: Option<&Path>) -> HalResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);
        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        log::debug!("created workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Remove the workspace now, reporting any removal error instead of
    /// swallowing it like drop does.
    pub fn close(self) -> HalResult<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        log::debug!("removed workspace {}", path.display());
        Ok(())
    }
}
