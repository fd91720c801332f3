use crate::config::Config;
use crate::core::Logger;
use crate::core::today::day_progress;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::time::{hms, today};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut logger = Logger::open(cfg.log_path())?;
    let progress = day_progress(&logger, today(), cfg.page_per_day)?;
    logger.close()?;

    let status = if progress.is_done() { "done" } else { "not done" };
    let color = color_for_progress(progress.pages_done, progress.page_per_day);

    println!(
        "Task: {}-{} ({} pages)",
        progress.task_start, progress.task_end, progress.page_per_day
    );
    println!(
        "Page: {}{}/{}{} ({})",
        color, progress.pages_done, progress.page_per_day, RESET, status
    );
    println!("Time: {} spent", hms(progress.spent_secs));
    Ok(())
}
