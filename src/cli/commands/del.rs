use crate::config::Config;
use crate::core::Logger;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

/// `dellast`: remove the latest complete session after confirmation.
pub fn delete_last(cfg: &Config, assume_yes: bool) -> AppResult<()> {
    let mut logger = Logger::open(cfg.log_path())?;

    let last = logger
        .last_complete()?
        .ok_or_else(|| AppError::NotFound("no complete session to delete".into()))?;

    println!("{}", last.detail());
    if !ask_confirmation("Delete this session? This action is irreversible.", assume_yes) {
        info("Operation cancelled.");
        return Ok(());
    }

    if let Some(removed) = logger.delete_last_complete()? {
        success(format!("Session {} has been deleted.", removed.key()));
    }
    logger.close()?;
    Ok(())
}

/// `cl`: drop every temporary session.
pub fn clear_temporary(cfg: &Config) -> AppResult<()> {
    let mut logger = Logger::open(cfg.log_path())?;
    let removed = logger.clear_temporary()?;
    logger.close()?;

    success(format!("{} temporary sessions cleared.", removed));
    Ok(())
}
