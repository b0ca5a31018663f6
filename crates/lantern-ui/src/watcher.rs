use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::element::ElementRef;
use crate::loader::Loader;
use crate::system::System;

/// Hot-reloads a document-built tree when the file on disk changes.
///
/// The watcher polls modification timestamps — it never blocks beyond one
/// `stat` in the common unchanged case. Polling cadence is the caller's
/// choice; nothing here is timer-driven.
///
/// On a successful reload the old tree is swapped for the new one in a
/// single call: the [`System`] always holds either the old or the new
/// version of a watched tree, never zero and never both. The active flag
/// carries over from the replaced tree. A failed load leaves everything —
/// tree, registration, recorded timestamp — untouched, so the next poll
/// retries.
#[derive(Default)]
pub struct Watcher {
    timestamps: HashMap<PathBuf, SystemTime>,
}

impl Watcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds `target` from `path` if the file changed since the last
    /// successful reload.
    ///
    /// Returns `true` only when a new tree was swapped in. `default_active`
    /// seeds the active flag the first time, when there is no current target
    /// to inherit it from.
    pub fn reload_if_changed(
        &mut self,
        path: impl AsRef<Path>,
        system: &mut System,
        loader: &Loader,
        target: &mut Option<ElementRef>,
        default_active: bool,
    ) -> bool {
        let path = path.as_ref();

        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("ui watcher: cannot stat {}: {e}", path.display());
                return false;
            }
        };

        if self.timestamps.get(path) == Some(&modified) {
            return false;
        }

        let was_active = target.as_ref().map(|t| t.is_active()).unwrap_or(default_active);

        let Some(new_root) = loader.load_from_file(path) else {
            // Load failed: keep the previous tree registered and the stale
            // timestamp, so the next poll tries again.
            return false;
        };

        if let Some(old) = target.take() {
            system.remove(&old);
        }

        new_root.set_active(was_active);
        system.add(new_root.clone());
        *target = Some(new_root);
        self.timestamps.insert(path.to_path_buf(), modified);

        log::info!("ui watcher: reloaded {}", path.display());
        true
    }

    /// Forgets all recorded timestamps; the next poll of any path reloads.
    pub fn clear(&mut self) {
        self.timestamps.clear();
    }
}
