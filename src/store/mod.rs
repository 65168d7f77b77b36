//! Tabular document store.
//!
//! The per-month sheets of the master document are the only persistent store
//! for roster data. Access goes through a small backend trait so the storage
//! technology (local JSON file today, object store or database tomorrow) is
//! swappable without touching the roster logic.

pub mod layout;
pub mod locator;
pub mod workbook;

pub use workbook::{Cell, Sheet, Workbook};

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// Load/save of a whole workbook. Writes are all-or-nothing: the engine
/// computes every cell change in memory and persists once.
pub trait DocumentBackend {
    fn load(&self, path: &Path) -> AppResult<Workbook>;
    fn save(&self, workbook: &Workbook, path: &Path) -> AppResult<()>;
}

/// JSON file backend.
pub struct JsonBackend;

impl DocumentBackend for JsonBackend {
    fn load(&self, path: &Path) -> AppResult<Workbook> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, workbook: &Workbook, path: &Path) -> AppResult<()> {
        // Write to a sibling temp file first so a failed write never leaves
        // a truncated document behind.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(workbook)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Remote synchronization seam: pull before open, push after persist.
/// A failed round-trip must never corrupt the local document, so both
/// directions degrade to a warning and the operation continues on the local
/// copy.
pub trait RemoteSync {
    fn pull(&self, path: &Path) -> AppResult<()>;
    fn push(&self, path: &Path) -> AppResult<()>;
}

/// Default: no remote configured.
pub struct NoopSync;

impl RemoteSync for NoopSync {
    fn pull(&self, _path: &Path) -> AppResult<()> {
        Ok(())
    }
    fn push(&self, _path: &Path) -> AppResult<()> {
        Ok(())
    }
}

/// Handle on the master document: path + backend + sync hook.
pub struct Document {
    path: PathBuf,
    backend: Box<dyn DocumentBackend>,
    sync: Box<dyn RemoteSync>,
}

impl Document {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            backend: Box::new(JsonBackend),
            sync: Box::new(NoopSync),
        }
    }

    pub fn with_sync(mut self, sync: Box<dyn RemoteSync>) -> Self {
        self.sync = sync;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pull the remote copy (best effort), then load.
    pub fn open(&self) -> AppResult<Workbook> {
        if let Err(e) = self.sync.pull(&self.path) {
            warning(format!("Remote pull failed, using local copy: {}", e));
        }
        self.backend.load(&self.path)
    }

    /// Save locally, then push (best effort).
    pub fn persist(&self, workbook: &Workbook) -> AppResult<()> {
        self.backend.save(workbook, &self.path)?;
        if let Err(e) = self.sync.push(&self.path) {
            warning(format!("Remote push failed, local copy is saved: {}", e));
        }
        Ok(())
    }
}
