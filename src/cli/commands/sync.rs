use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::Synchronizer;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, assume_yes: bool) -> AppResult<()> {
    if let Commands::Sync { dstdir } = cmd {
        let dst = expand_tilde(dstdir);
        let sync = Synchronizer::new(cfg, &dst)?;

        let reports = sync.run(|missing| {
            ask_confirmation(
                &format!(
                    "no \"{}\" in the destination directory, a new file will be created. Continue?",
                    missing.display()
                ),
                assume_yes,
            )
        })?;

        let total: usize = reports.iter().map(|r| r.transferred.len()).sum();
        success(format!("Sync completed, {} records transferred.", total));
    }

    Ok(())
}
