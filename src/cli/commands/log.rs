use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logger;
use crate::core::viewer::end_page_from_log;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::ui::messages::{success, warning};
use crate::utils::time::{now_secs, parse_local_datetime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        key,
        start,
        end,
        start_page,
        end_page,
        end_time,
    } = cmd
    {
        let mut logger = Logger::open(cfg.log_path())?;

        //
        // Manual entry: every bound given on the command line
        //
        if let Some(start) = start {
            let start_time = parse_local_datetime(start)?;
            let end_time = parse_local_datetime(end.as_deref().ok_or_else(|| {
                AppError::InvalidInput("--end is required with --start".into())
            })?)?;
            let start_page = start_page.ok_or_else(|| {
                AppError::InvalidInput("--start-page is required with --start".into())
            })?;
            let end_page = end_page.ok_or_else(|| {
                AppError::InvalidInput("--end-page is required with --start".into())
            })?;

            let key = logger.add_complete(
                &cfg.book_name,
                start_time,
                end_time,
                start_page,
                end_page,
            )?;
            success(format!("Session {} added", key));
            if let Some(entry) = logger.get(&key)? {
                println!("{}", entry.detail());
            }

            logger.close()?;
            return Ok(());
        }

        //
        // Completion of a temporary entry
        //
        let entry = match key {
            Some(k) => logger
                .get(k)?
                .filter(LogEntry::is_temporary)
                .ok_or_else(|| AppError::NotFound(format!("no temporary log entry with key {}", k)))?,
            None => logger.latest_temporary()?.ok_or_else(|| {
                AppError::NotFound(
                    "no temporary session to complete, add one with --start/--end/--start-page/--end-page"
                        .into(),
                )
            })?,
        };

        let end_time = match end_time {
            Some(t) => parse_local_datetime(t)?,
            None => entry.end_time.unwrap_or_else(now_secs),
        };

        let end_page = match end_page {
            Some(p) => Some(*p),
            None => end_page_from_log(&cfg.viewer_log_path(), &cfg.book_path(), cfg.page_num_diff),
        };

        match end_page {
            Some(page) => {
                let done = logger.complete_session(&entry.key(), end_time, page)?;
                success(format!("Session {} completed", entry.key()));
                println!("{}", done.detail());
            }
            None => {
                warning(format!(
                    "Could not determine the end page, session {} stays temporary; pass --end-page to complete it",
                    entry.key()
                ));
            }
        }

        logger.close()?;
    }

    Ok(())
}
