//! One-way copy of new records from the base directory to another one.

use crate::config::Config;
use crate::db::Recorder;
use crate::errors::{AppError, AppResult};
use crate::models::{ErrataEntry, LogEntry, NoteEntry};
use crate::ui::messages::{info, warning};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome for one collection file.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub file: String,
    pub destination: PathBuf,
    pub transferred: Vec<String>,
}

/// Copy every record whose key exists in `src` but not in `dst`, then
/// commit `dst` once. Records are copied as stored, never decoded.
/// Returns the transferred keys.
pub fn sync_store<T>(src: &Recorder<T>, dst: &mut Recorder<T>) -> AppResult<Vec<String>> {
    let mut transferred = Vec::new();

    for key in src.keys()? {
        if dst.contains(&key)? {
            continue;
        }
        if let Some(json) = src.get_raw(&key)? {
            println!("transferring {}", key);
            dst.set_raw(&key, &json)?;
            transferred.push(key);
        }
    }

    if !transferred.is_empty() {
        dst.audit(
            "sync",
            &src.path().display().to_string(),
            &format!("{} records received", transferred.len()),
        );
    }
    dst.commit()?;
    Ok(transferred)
}

pub struct Synchronizer<'a> {
    cfg: &'a Config,
    dst_dir: PathBuf,
}

impl<'a> Synchronizer<'a> {
    /// Fails when `dst_dir` is not an existing directory, or when it is the
    /// base directory itself.
    pub fn new(cfg: &'a Config, dst_dir: &Path) -> AppResult<Self> {
        if !dst_dir.is_dir() {
            return Err(AppError::NotADirectory(dst_dir.to_path_buf()));
        }

        let same = match (fs::canonicalize(&cfg.base_dir), fs::canonicalize(dst_dir)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
        if same {
            return Err(AppError::InvalidInput(format!(
                "{} is the data directory itself",
                dst_dir.display()
            )));
        }

        Ok(Self {
            cfg,
            dst_dir: dst_dir.to_path_buf(),
        })
    }

    /// Destination files that do not exist yet and would be created.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        self.cfg
            .collection_files()
            .iter()
            .map(|f| self.dst_dir.join(f))
            .filter(|p| !p.exists())
            .collect()
    }

    /// Run the sync. `confirm_create` is asked once per missing destination
    /// file before anything is transferred; a single refusal aborts it all.
    pub fn run<F>(&self, mut confirm_create: F) -> AppResult<Vec<SyncReport>>
    where
        F: FnMut(&Path) -> bool,
    {
        for missing in self.missing_files() {
            if !confirm_create(&missing) {
                return Err(AppError::Aborted(format!(
                    "{} would have to be created",
                    missing.display()
                )));
            }
        }

        Ok(vec![
            self.sync_file::<LogEntry>(&self.cfg.log_file)?,
            self.sync_file::<NoteEntry>(&self.cfg.note_file)?,
            self.sync_file::<ErrataEntry>(&self.cfg.errata_file)?,
        ])
    }

    fn sync_file<T>(&self, file: &str) -> AppResult<SyncReport>
    where
        T: Serialize + DeserializeOwned,
    {
        let src_path = self.cfg.base_dir.join(file);
        let dst_path = self.dst_dir.join(file);

        let transferred = if src_path.exists() {
            let mut src: Recorder<T> = Recorder::open(&src_path)?;
            let mut dst: Recorder<T> = Recorder::open(&dst_path)?;
            let keys = sync_store(&src, &mut dst)?;
            dst.close()?;
            src.close()?;
            keys
        } else {
            warning(format!("{} does not exist, skipped", src_path.display()));
            Vec::new()
        };

        info(format!(
            "done, {} records transferred to {}",
            transferred.len(),
            dst_path.display()
        ));

        Ok(SyncReport {
            file: file.to_string(),
            destination: dst_path,
            transferred,
        })
    }
}
