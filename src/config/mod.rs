use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, resolve_in};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "reading.conf";

/// Settings of one reading project. Stored as YAML in the base directory;
/// file names are kept relative to it, `book_file` may also be absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub base_dir: PathBuf,

    pub book_name: String,
    pub book_file: String,
    /// Last page number of the book
    pub end_page: i64,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_note_file")]
    pub note_file: String,
    #[serde(default = "default_errata_file")]
    pub errata_file: String,
    /// Log kept by the external viewer, one `<path> <page>` line per document
    #[serde(default = "default_viewer_log")]
    pub viewer_log: String,
    /// Difference between the physical page number and the printed label
    #[serde(default)]
    pub page_num_diff: i64,
    #[serde(default = "default_page_per_day")]
    pub page_per_day: i64,
}

pub fn default_log_file() -> String {
    ".log".to_string()
}
pub fn default_note_file() -> String {
    ".note".to_string()
}
pub fn default_errata_file() -> String {
    ".errata".to_string()
}
pub fn default_viewer_log() -> String {
    "~/.pv".to_string()
}
pub fn default_page_per_day() -> i64 {
    18
}

impl Config {
    /// New settings with every optional field at its default.
    pub fn new(base_dir: &Path, book_name: &str, book_file: &str, end_page: i64) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            book_name: book_name.to_string(),
            book_file: book_file.to_string(),
            end_page,
            log_file: default_log_file(),
            note_file: default_note_file(),
            errata_file: default_errata_file(),
            viewer_log: default_viewer_log(),
            page_num_diff: 0,
            page_per_day: default_page_per_day(),
        }
    }

    /// Default base directory: `~/.rreading`
    pub fn default_base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rreading")
    }

    /// Base directory from `--dir`, or the default one.
    pub fn resolve_base_dir(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::default_base_dir)
    }

    pub fn config_file(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_NAME)
    }

    pub fn exists(base_dir: &Path) -> bool {
        Self::config_file(base_dir).exists()
    }

    /// Load the configuration stored in `base_dir`.
    pub fn load(base_dir: &Path) -> AppResult<Self> {
        let path = Self::config_file(base_dir);
        if !path.exists() {
            return Err(AppError::ConfigMissing(path));
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.base_dir = base_dir.to_path_buf();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration into its base directory, creating it if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        self.validate()?;
        fs::create_dir_all(&self.base_dir)?;

        let path = Self::config_file(&self.base_dir);
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.book_name.trim().is_empty() {
            return Err(AppError::Config("book_name must not be empty".into()));
        }
        if self.end_page < 1 {
            return Err(AppError::Config(format!(
                "end_page must be positive, got {}",
                self.end_page
            )));
        }
        if self.page_per_day < 1 {
            return Err(AppError::Config(format!(
                "page_per_day must be positive, got {}",
                self.page_per_day
            )));
        }
        for (field, name) in [
            ("log_file", &self.log_file),
            ("note_file", &self.note_file),
            ("errata_file", &self.errata_file),
        ] {
            if name.trim().is_empty() || name.contains(['/', '\\']) {
                return Err(AppError::Config(format!(
                    "{} must be a plain file name, got '{}'",
                    field, name
                )));
            }
        }
        Ok(())
    }

    pub fn book_path(&self) -> PathBuf {
        resolve_in(&self.base_dir, &self.book_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.base_dir.join(&self.log_file)
    }

    pub fn note_path(&self) -> PathBuf {
        self.base_dir.join(&self.note_file)
    }

    pub fn errata_path(&self) -> PathBuf {
        self.base_dir.join(&self.errata_file)
    }

    pub fn viewer_log_path(&self) -> PathBuf {
        expand_tilde(&self.viewer_log)
    }

    /// Base names of the collection files, in sync order.
    pub fn collection_files(&self) -> [&str; 3] {
        [
            self.log_file.as_str(),
            self.note_file.as_str(),
            self.errata_file.as_str(),
        ]
    }

    /// The first printed page label maps to physical page `first_label`.
    pub fn set_first_page_label(&mut self, first_label: i64) {
        self.page_num_diff = first_label - 1;
    }

    pub fn first_page_label(&self) -> i64 {
        self.page_num_diff + 1
    }
}
