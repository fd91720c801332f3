use crate::db::Recorder;
use crate::errors::{AppError, AppResult};
use crate::models::NotebookRecord;
use crate::utils::time::now_secs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// A collection of notes or errata keyed by creation time.
pub struct Notebook<T> {
    store: Recorder<T>,
}

impl<T> Notebook<T>
where
    T: NotebookRecord + Serialize + DeserializeOwned,
{
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        Ok(Self {
            store: Recorder::open(path)?,
        })
    }

    pub fn close(&mut self) -> AppResult<()> {
        self.store.close()
    }

    /// Add a record created now.
    pub fn add(&mut self, record: &T) -> AppResult<String> {
        self.add_at(now_secs(), record)
    }

    /// Add a record created at `created` (unix seconds). When that second is
    /// already taken the next free second is used, so quick successive adds
    /// never overwrite each other.
    pub fn add_at(&mut self, created: i64, record: &T) -> AppResult<String> {
        let mut stamp = created;
        while self.store.contains(&stamp.to_string())? {
            stamp += 1;
        }

        let key = stamp.to_string();
        self.store.set(&key, record)?;
        self.store.audit("add", &key, T::KIND);
        self.store.commit()?;
        Ok(key)
    }

    /// All records ordered by creation time.
    pub fn list(&self) -> AppResult<Vec<(String, T)>> {
        let mut all = self.store.list_all(|_, _| true)?;
        all.sort_by(|(a, _), (b, _)| {
            match (a.parse::<i64>(), b.parse::<i64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => a.cmp(b),
            }
        });
        Ok(all)
    }

    pub fn get(&self, key: &str) -> AppResult<T> {
        self.store
            .get(key)?
            .ok_or_else(|| AppError::NotFound(format!("no {} with key {}", T::KIND, key)))
    }

    /// Replace the record at `key` as a whole.
    pub fn update(&mut self, key: &str, record: &T) -> AppResult<()> {
        if !self.store.contains(key)? {
            return Err(AppError::NotFound(format!("no {} with key {}", T::KIND, key)));
        }

        self.store.set(key, record)?;
        self.store.audit("edit", key, T::KIND);
        self.store.commit()?;
        Ok(())
    }

    pub fn delete(&mut self, key: &str) -> AppResult<()> {
        if !self.store.contains(key)? {
            return Err(AppError::NotFound(format!("no {} with key {}", T::KIND, key)));
        }

        self.store.delete(key)?;
        self.store.audit("del", key, T::KIND);
        self.store.commit()?;
        Ok(())
    }
}
