use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

/// Removal the user can revert later through the OS's own restore mechanism.
pub trait ReversibleDelete {
    fn delete(&self, path: &Path) -> io::Result<()>;
}

/// Backend that moves entries into the user's trash directory using the
/// freedesktop layout (`files/` plus `info/*.trashinfo`), which desktop
/// environments list and restore from.
pub struct NativeTrash {
    files_dir: PathBuf,
    info_dir: PathBuf,
}

impl NativeTrash {
    pub fn new() -> io::Result<Self> {
        let root = trash_root()
            .ok_or_else(|| io::Error::other("no home directory to derive a trash location"))?;
        Self::at(root)
    }

    /// Trash rooted at `root`; creates the layout if absent.
    pub fn at(root: PathBuf) -> io::Result<Self> {
        let files_dir = root.join("files");
        let info_dir = root.join("info");
        fs::create_dir_all(&files_dir)?;
        fs::create_dir_all(&info_dir)?;
        Ok(Self {
            files_dir,
            info_dir,
        })
    }

    fn is_taken(&self, name: &str) -> bool {
        self.files_dir.join(name).exists() || self.info_dir.join(info_name(name)).exists()
    }

    fn unique_name(&self, name: &str) -> String {
        if !self.is_taken(name) {
            return name.to_owned();
        }
        let mut n = 1u32;
        loop {
            let candidate = format!("{name}.{n}");
            if !self.is_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl ReversibleDelete for NativeTrash {
    fn delete(&self, path: &Path) -> io::Result<()> {
        let base = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed");
        let name = self.unique_name(base);

        let info = format!(
            "[Trash Info]\nPath={}\nDeletionDate={}\n",
            path.display(),
            Local::now().format("%Y-%m-%dT%H:%M:%S"),
        );
        let info_path = self.info_dir.join(info_name(&name));
        fs::write(&info_path, info)?;

        match fs::rename(path, self.files_dir.join(&name)) {
            Ok(()) => {
                debug!("trashed {} as {name}", path.display());
                Ok(())
            }
            Err(err) => {
                // Roll back the info record; the move never happened.
                let _ = fs::remove_file(&info_path);
                Err(err)
            }
        }
    }
}

fn info_name(name: &str) -> String {
    format!("{name}.trashinfo")
}

fn trash_root() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        return Some(PathBuf::from(xdg).join("Trash"));
    }
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .map(|d| d.join("Trash"))
}

#[cfg(test)]
#[path = "trash_tests.rs"]
mod tests;
