use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logger;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::time::now_secs;

/// Split `read` arguments into an optional start page and the log flag.
/// Accepts `[page] [nolog]` in any order.
pub fn parse_read_args(args: &[String]) -> AppResult<(Option<i64>, bool)> {
    let mut page = None;
    let mut take_log = true;

    for arg in args {
        if arg.eq_ignore_ascii_case("nolog") {
            take_log = false;
            continue;
        }
        match arg.parse::<i64>() {
            Ok(p) if page.is_none() && p > 0 => page = Some(p),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "unexpected argument '{}', usage: read [page] [nolog]",
                    arg
                )));
            }
        }
    }

    Ok((page, take_log))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Read { args, nolog } = cmd {
        let (page, take_log) = parse_read_args(args)?;
        let take_log = take_log && !*nolog;

        let mut logger = Logger::open(cfg.log_path())?;
        let start_page = match page {
            Some(p) => p,
            None => logger.next_start_page()?,
        };

        info(format!(
            "Open {} at page {} (viewer page {})",
            cfg.book_path().display(),
            start_page,
            start_page + cfg.page_num_diff
        ));

        if take_log {
            let key = logger.start_session(&cfg.book_name, now_secs(), start_page)?;
            success(format!(
                "Session {} started at page {}, finish it with `rreading log`",
                key, start_page
            ));
        } else {
            info("Session not recorded (nolog).");
        }

        logger.close()?;
    }

    Ok(())
}
