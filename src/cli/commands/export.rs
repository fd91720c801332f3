use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Logger;
use crate::core::export::export_entries;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, assume_yes: bool) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut logger = Logger::open(cfg.log_path())?;
        let entries = logger.list_complete()?;
        logger.close()?;

        export_entries(&entries, *format, &expand_tilde(file), *force, assume_yes)?;
    }

    Ok(())
}
