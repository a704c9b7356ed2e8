use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` command
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT ----
        if *print_config || !*init {
            let source = if path.exists() {
                path.display().to_string()
            } else {
                "built-in defaults".to_string()
            };
            info(format!("Current configuration ({source}):"));
            println!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
