// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-file-per-key store under a data directory.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{Store, StoreError, StoreResult, UpdateFn};

const LOCK_FILE_NAME: &str = ".lock";

/// Stores each key as `<dir>/<key>.json`.
///
/// Every access holds an exclusive advisory lock on `<dir>/.lock`, so several
/// `parley` processes sharing a data directory see whole values only, and a
/// [`Store::update`] cycle runs with no other access in between. Values
/// are written to a temp file, fsynced, then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `dir`.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(FileStore {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Held until the returned file is dropped.
    fn lock(&self) -> StoreResult<File> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(LOCK_FILE_NAME))?;
        file.lock_exclusive()?;
        Ok(file)
    }
}

impl FileStore {
    fn read_unlocked(&self, path: &Path) -> StoreResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_unlocked(&self, key: &str, path: &Path, value: &str) -> StoreResult<()> {
        let tmp = self.dir.join(format!(".{key}.tmp"));
        let mut file = File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn remove_unlocked(&self, path: &Path) -> StoreResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path(key)?;
        let _lock = self.lock()?;
        self.read_unlocked(&path)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path(key)?;
        let _lock = self.lock()?;
        self.write_unlocked(key, &path, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path(key)?;
        let _lock = self.lock()?;
        self.remove_unlocked(&path)
    }

    fn update(&self, key: &str, f: &mut UpdateFn<'_>) -> StoreResult<()> {
        let path = self.path(key)?;
        let _lock = self.lock()?;
        match f(self.read_unlocked(&path)?)? {
            Some(value) => self.write_unlocked(key, &path, &value),
            None => self.remove_unlocked(&path),
        }
    }
}
