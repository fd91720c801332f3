use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `config` subcommand: apply the given settings, then print.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        book_name,
        book_file,
        last_page,
        first_page_label,
        pages_per_day,
        viewer_log,
    } = cmd
    {
        let mut updated = cfg.clone();
        let mut changed = false;

        if let Some(v) = book_name {
            updated.book_name = v.clone();
            changed = true;
        }
        if let Some(v) = book_file {
            updated.book_file = v.clone();
            changed = true;
        }
        if let Some(v) = last_page {
            updated.end_page = *v;
            changed = true;
        }
        if let Some(v) = first_page_label {
            updated.set_first_page_label(*v);
            changed = true;
        }
        if let Some(v) = pages_per_day {
            updated.page_per_day = *v;
            changed = true;
        }
        if let Some(v) = viewer_log {
            updated.viewer_log = v.clone();
            changed = true;
        }

        if changed {
            let path = updated.save()?;
            success(format!("Configuration updated: {}", path.display()));
        }

        if *print_config || !changed {
            println!(
                "📄 Current configuration ({}):\n",
                Config::config_file(&updated.base_dir).display()
            );
            println!("{}", serde_yaml::to_string(&updated)?);
        }
    }

    Ok(())
}
