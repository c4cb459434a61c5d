// File: ./src/context.rs
//! Where coursedeck keeps its files.
//!
//! Everything that touches disk asks an `AppContext` for its directories, so
//! the binary can honor `--root` and tests can run in a throwaway tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub trait AppContext: Send + Sync + std::fmt::Debug {
    /// Holds `courses.json` and the log file.
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    fn get_courses_path(&self) -> Option<PathBuf> {
        self.get_data_dir()
            .ok()
            .map(|p| p.join(crate::storage::COURSES_FILENAME))
    }

    fn get_log_path(&self) -> Option<PathBuf> {
        self.get_data_dir().ok().map(|p| p.join("coursedeck.log"))
    }
}

fn created(path: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory: {:?}", path))?;
    Ok(path)
}

/// Platform directories, or `<root>/data` and `<root>/config` under `--root`.
#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn resolve(&self, sub: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
        let dir = match &self.override_root {
            Some(root) => root.join(sub),
            None => {
                let proj = ProjectDirs::from("ch", "coursedeck", "coursedeck")
                    .ok_or_else(|| anyhow::anyhow!("No home directory"))?;
                platform(&proj).to_path_buf()
            }
        };
        created(dir)
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        self.resolve("data", ProjectDirs::data_dir)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.resolve("config", ProjectDirs::config_dir)
    }
}

/// A fresh directory under the system temp dir, deleted on drop.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("coursedeck_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        created(self.root.join("data"))
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        created(self.root.join("config"))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
