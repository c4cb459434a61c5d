// Manages the on-disk course collection.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to CourseRecord or its nested types (LectureItem, SeriesItem, SeriesMode)
// require incrementing LOCAL_STORAGE_VERSION below.
use crate::context::AppContext;
use crate::model::CourseRecord;
use crate::store::Persistence;
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const COURSES_FILENAME: &str = "courses.json";

// Version history:
// - v1: Initial format
const LOCAL_STORAGE_VERSION: u32 = 1;

/// Wrapper struct for versioned local storage
#[derive(Serialize, Deserialize)]
struct LocalStorageData {
    #[serde(default)]
    version: u32,
    courses: Vec<CourseRecord>,
}

/// JSON file persistence for the course store.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the default location of the given context.
    pub fn from_context(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx
            .get_courses_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {:?}", lock_path))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Moves an unreadable file out of the way so the next save does not clobber it.
    fn quarantine(path: &Path) {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S");
        let target = path.with_extension(format!("json.corrupt-{}", stamp));
        match fs::rename(path, &target) {
            Ok(()) => log::warn!("Moved unreadable course data to {:?}", target),
            Err(e) => log::error!("Could not move unreadable course data aside: {}", e),
        }
    }
}

impl Persistence for LocalStorage {
    fn load(&self) -> Result<Vec<CourseRecord>> {
        let path = &self.path;
        if !path.exists() {
            return Ok(vec![]);
        }
        let parsed = Self::with_lock(path, || {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            if json.trim().is_empty() {
                return Ok(LocalStorageData {
                    version: LOCAL_STORAGE_VERSION,
                    courses: vec![],
                });
            }
            let data: LocalStorageData = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse {:?}", path))?;
            Ok(data)
        });

        match parsed {
            Ok(data) => {
                if data.version != LOCAL_STORAGE_VERSION {
                    log::info!(
                        "Course data has version {}, current is {}",
                        data.version,
                        LOCAL_STORAGE_VERSION
                    );
                }
                Ok(data.courses)
            }
            Err(e) => {
                Self::quarantine(path);
                Err(e)
            }
        }
    }

    fn save(&self, courses: &[CourseRecord]) -> Result<()> {
        let path = &self.path;
        Self::with_lock(path, || {
            let data = LocalStorageData {
                version: LOCAL_STORAGE_VERSION,
                courses: courses.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(path, json)?;
            Ok(())
        })
        .with_context(|| format!("Failed to save courses to {:?}", path))
    }
}

/// In-memory persistence, shared between clones. Counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    courses: Vec<CourseRecord>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<CourseRecord>) -> Self {
        let storage = Self::default();
        if let Ok(mut state) = storage.inner.lock() {
            state.courses = courses;
        }
        storage
    }

    pub fn save_count(&self) -> usize {
        self.inner.lock().map(|s| s.saves).unwrap_or(0)
    }

    pub fn snapshot(&self) -> Vec<CourseRecord> {
        self.inner
            .lock()
            .map(|s| s.courses.clone())
            .unwrap_or_default()
    }
}

impl Persistence for MemoryStorage {
    fn load(&self) -> Result<Vec<CourseRecord>> {
        let state = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage poisoned"))?;
        Ok(state.courses.clone())
    }

    fn save(&self, courses: &[CourseRecord]) -> Result<()> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage poisoned"))?;
        state.courses = courses.to_vec();
        state.saves += 1;
        Ok(())
    }
}
