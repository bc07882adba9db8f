//! Utilities for loading RON files and watching directories for changes.
//!
//! This module provides a small helper for reading RON files from disk and a
//! filesystem watcher resource that raises a shared flag when files change.
//! The watcher drives hot-reloading of the settings directory.

use bevy::log::warn;
use bevy::prelude::Resource;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// File-watcher resource for RON hot-reload.
#[derive(Resource)]
pub struct RonWatcher {
    changed: Arc<AtomicBool>, // Set by the notify callback when a watched file is modified
    _watcher: Option<RecommendedWatcher>, // Kept alive so the OS watch is not dropped
}

impl RonWatcher {
    /// Create a `RonWatcher` with no OS watcher behind it.
    ///
    /// Used as a fallback when watcher creation fails; `take_changed` then
    /// always returns `false`.
    #[must_use]
    pub fn stub() -> Self {
        RonWatcher {
            changed: Arc::new(AtomicBool::new(false)),
            _watcher: None,
        }
    }

    /// Return whether files changed since the last call, clearing the flag.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::AcqRel)
    }

    /// Raise the change flag by hand.
    pub fn mark_changed(&self) {
        self.changed.store(true, Ordering::Release);
    }
}

/// Load all `.ron` files from a directory and deserialize them into `T`.
///
/// Files are visited in name order so the result does not depend on the
/// directory listing order. Files that fail to parse are skipped with a
/// warning; a missing directory yields an empty list.
#[must_use]
pub fn load_ron_files<T: DeserializeOwned>(path: &str) -> Vec<T> {
    let Ok(entries) = std::fs::read_dir(path) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "ron"))
        .collect();
    files.sort();

    let mut items = Vec::new();
    for file in files {
        let content = match std::fs::read_to_string(&file) {
            Ok(c) => c,
            Err(e) => {
                warn!("failed to read {}: {e}", file.display());
                continue;
            }
        };
        match ron::from_str::<T>(&content) {
            Ok(item) => items.push(item),
            Err(e) => warn!("failed to parse {}: {e}", file.display()),
        }
    }
    items
}

/// Create a `RonWatcher` that watches a directory for modifications.
///
/// # Errors
/// Returns a `notify::Error` if the underlying file-watcher cannot be
/// created or the watcher cannot be registered for the provided path.
pub fn setup_ron_watcher(path: &str) -> Result<RonWatcher, notify::Error> {
    let changed = Arc::new(AtomicBool::new(false));
    let changed_clone = changed.clone();
    let watched_path: PathBuf = std::fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path));

    let mut watcher: RecommendedWatcher = Watcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, notify::EventKind::Modify(_) | notify::EventKind::Create(_)) {
                    return;
                }
                let relevant = event.paths.iter().any(|p| {
                    std::fs::canonicalize(p)
                        .unwrap_or_else(|_| p.clone())
                        .starts_with(&watched_path)
                });
                if relevant {
                    changed_clone.store(true, Ordering::Release);
                }
            }
            Err(e) => warn!("watch error: {e:?}"),
        },
        Config::default(),
    )?;

    watcher.watch(Path::new(path), RecursiveMode::NonRecursive)?;
    Ok(RonWatcher { changed, _watcher: Some(watcher) })
}
