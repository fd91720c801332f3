use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logger;
use crate::core::plan::build_plan;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::{parse_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        date,
        start,
        end,
        perday,
    } = cmd
    {
        let first_day = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };

        let start_page = match start {
            Some(p) => *p,
            None => {
                let mut logger = Logger::open(cfg.log_path())?;
                let p = logger.next_start_page()?;
                logger.close()?;
                p
            }
        };
        let end_page = end.unwrap_or(cfg.end_page);
        let per_day = perday.unwrap_or(cfg.page_per_day);

        let plan = build_plan(first_day, start_page, end_page, per_day)?;
        if plan.is_empty() {
            info(format!(
                "Nothing left to plan: page {} is past page {}.",
                start_page, end_page
            ));
        }
        for day in plan {
            println!("{}", day);
        }
    }

    Ok(())
}
