use crate::config::Config;
use crate::core::Logger;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::mins2readable;

/// `ll`: complete sessions, then the ones still open.
pub fn list_sessions(cfg: &Config) -> AppResult<()> {
    let mut logger = Logger::open(cfg.log_path())?;
    let complete = logger.list_complete()?;
    let temporary = logger.list_temporary()?;
    logger.close()?;

    if complete.is_empty() && temporary.is_empty() {
        info("No reading sessions recorded.");
        return Ok(());
    }

    for entry in &complete {
        println!("{}", entry.detail());
    }

    if !temporary.is_empty() {
        println!();
        header("Temporary");
        for entry in &temporary {
            println!("{}[{}]{} {}", GREY, entry.key(), RESET, entry);
        }
    }

    Ok(())
}

/// `days`: minutes and pages per calendar day.
pub fn list_days(cfg: &Config) -> AppResult<()> {
    let mut logger = Logger::open(cfg.log_path())?;
    let days = logger.summarize_by_day()?;
    logger.close()?;

    if days.is_empty() {
        info("No complete reading sessions.");
        return Ok(());
    }

    let total: i64 = days.iter().map(|d| d.minutes).sum();
    for d in days {
        println!(
            "{}: {:>3} mins, {:>2} pages",
            d.day.format("%Y-%m-%d"),
            d.minutes,
            d.pages
        );
    }
    println!("Total: {}", mins2readable(total));
    Ok(())
}
