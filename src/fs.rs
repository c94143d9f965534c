//! Filesystem capability used by the scaffolder.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::io;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// The three operations project generation needs from a filesystem.
pub trait FileSystem {
    /// Directory the project is created in.
    fn current_directory(&self) -> Result<Utf8PathBuf>;

    /// Create a single directory. Fails if it already exists.
    fn make_directory(&self, path: &Utf8Path) -> Result<()>;

    /// Create or overwrite `path` with `content`.
    fn write_to_file(&self, content: &str, path: &Utf8Path) -> Result<()>;
}

/// Reads and writes the real disk.
#[derive(Debug, Default)]
pub struct LocalFs {
    chdir: Option<Utf8PathBuf>,
}

impl LocalFs {
    pub fn new(chdir: Option<Utf8PathBuf>) -> Self {
        Self { chdir }
    }
}

impl FileSystem for LocalFs {
    fn current_directory(&self) -> Result<Utf8PathBuf> {
        resolve_working_dir(self.chdir.as_deref())
    }

    fn make_directory(&self, path: &Utf8Path) -> Result<()> {
        debug!(%path, "creating directory");
        fs::create_dir(path).with_context(|| format!("creating directory {}", path))
    }

    fn write_to_file(&self, content: &str, path: &Utf8Path) -> Result<()> {
        debug!(%path, bytes = content.len(), "writing file");
        fs::write(path, content).with_context(|| format!("writing {}", path))
    }
}

/// Walks the same steps as [`LocalFs`] but only reports them.
///
/// Directories it would have created are remembered, so later steps see them
/// as existing and the first failure matches what a real run would hit.
#[derive(Debug, Default)]
pub struct DryRunFs {
    chdir: Option<Utf8PathBuf>,
    planned: RefCell<BTreeSet<Utf8PathBuf>>,
}

impl DryRunFs {
    pub fn new(chdir: Option<Utf8PathBuf>) -> Self {
        Self {
            chdir,
            planned: RefCell::new(BTreeSet::new()),
        }
    }

    fn is_directory(&self, path: &Utf8Path) -> bool {
        path.is_dir() || self.planned.borrow().contains(path)
    }

    fn require_parent(&self, path: &Utf8Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_str().is_empty() && !self.is_directory(parent) => {
                Err(io::Error::from(io::ErrorKind::NotFound))
            }
            _ => Ok(()),
        }
    }
}

impl FileSystem for DryRunFs {
    fn current_directory(&self) -> Result<Utf8PathBuf> {
        resolve_working_dir(self.chdir.as_deref())
    }

    fn make_directory(&self, path: &Utf8Path) -> Result<()> {
        if path.exists() || self.planned.borrow().contains(path) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists))
                .with_context(|| format!("creating directory {}", path));
        }
        self.require_parent(path)
            .with_context(|| format!("creating directory {}", path))?;
        info!("[dry-run] would create {}/", path);
        self.planned.borrow_mut().insert(path.to_owned());
        Ok(())
    }

    fn write_to_file(&self, content: &str, path: &Utf8Path) -> Result<()> {
        self.require_parent(path)
            .with_context(|| format!("writing {}", path))?;
        info!("[dry-run] would create {} ({} bytes)", path, content.len());
        Ok(())
    }
}

fn resolve_working_dir(chdir: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|_| anyhow!("current directory is not valid UTF-8"))?;
    match chdir {
        Some(dir) if dir.is_absolute() => Ok(dir.to_owned()),
        Some(dir) => Ok(cwd.join(dir)),
        None => Ok(cwd),
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryFs;
