//! Event storage.
//!
//! The storage layer owns ids: it assigns one on create and looks events up
//! by it on update and delete. Callers re-list after every mutation rather
//! than patching their own copy.

mod file;
mod memory;
mod notified;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use notified::NotifiedFile;

use std::path::Path;

use crate::error::{DaybookError, DaybookResult};
use crate::event::{Event, EventForm};

pub trait EventStore {
    /// All stored events, in storage order.
    fn list(&self) -> DaybookResult<Vec<Event>>;

    /// Save a new event and return it with its assigned id.
    fn create(&mut self, form: EventForm) -> DaybookResult<Event>;

    /// Replace the event stored under `id`.
    fn update(&mut self, id: &str, form: EventForm) -> DaybookResult<Event>;

    fn delete(&mut self, id: &str) -> DaybookResult<()>;
}

/// Replace `path` with `contents` through a sibling `.tmp` file, so a crash
/// mid-write never leaves a truncated file behind.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> DaybookResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");

    std::fs::write(&temp, contents)
        .and_then(|_| std::fs::rename(&temp, path))
        .map_err(|e| DaybookError::Storage(format!("{} 파일을 쓸 수 없습니다: {}", path.display(), e)))
}
