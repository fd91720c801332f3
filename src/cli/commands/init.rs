use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Notebook;
use crate::db::Recorder;
use crate::errors::{AppError, AppResult};
use crate::models::{ErrataEntry, LogEntry, NoteEntry};
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the data directory (if missing)
///  - the configuration file
///  - the log, note and errata collection files with their schema
pub fn handle(cmd: &Commands, base_dir: &Path) -> AppResult<()> {
    if let Commands::Init {
        book_name,
        book_file,
        last_page,
        first_page_label,
        pages_per_day,
        viewer_log,
        log_file,
        note_file,
        errata_file,
        force,
    } = cmd
    {
        if Config::exists(base_dir) && !*force {
            return Err(AppError::Config(format!(
                "{} already exists, use `config` to change it or `init --force` to start over",
                Config::config_file(base_dir).display()
            )));
        }

        let mut cfg = Config::new(base_dir, book_name, book_file, *last_page);
        cfg.set_first_page_label(*first_page_label);
        cfg.page_per_day = *pages_per_day;
        if let Some(v) = viewer_log {
            cfg.viewer_log = v.clone();
        }
        if let Some(f) = log_file {
            cfg.log_file = f.clone();
        }
        if let Some(f) = note_file {
            cfg.note_file = f.clone();
        }
        if let Some(f) = errata_file {
            cfg.errata_file = f.clone();
        }

        if !cfg.book_path().exists() {
            warning(format!("{} does not exist yet", cfg.book_path().display()));
        }

        println!("⚙️  Initializing rreading…");
        let path = cfg.save()?;
        println!("📄 Config file : {}", path.display());

        let mut logs: Recorder<LogEntry> = Recorder::open(cfg.log_path())?;
        logs.audit(
            "init",
            &cfg.book_name,
            &format!("Data directory initialized at {}", base_dir.display()),
        );
        logs.commit()?;
        logs.close()?;
        println!("🗄️  Reading log : {}", cfg.log_path().display());

        Notebook::<NoteEntry>::open(cfg.note_path())?.close()?;
        println!("🗒️  Notes       : {}", cfg.note_path().display());

        Notebook::<ErrataEntry>::open(cfg.errata_path())?.close()?;
        println!("🐞 Errata      : {}", cfg.errata_path().display());

        success("rreading initialization completed!");
    }

    Ok(())
}
