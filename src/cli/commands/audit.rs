use crate::config::Config;
use crate::core::Logger;
use crate::core::audit::render_audit;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut logger = Logger::open(cfg.log_path())?;
    let rows = logger.store().audit_trail()?;
    logger.close()?;

    println!("📜 Internal log:\n");
    for line in render_audit(&rows) {
        println!("{}", line);
    }
    Ok(())
}
