use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "configuration file not found: {} (run `init`)",
                    path.display()
                )));
            }
            let missing = missing_keys(path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "configuration file not found: {} (run `init`)",
                    path.display()
                )));
            }
            let added = migrate_missing_keys(path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        )),
                        Ok(_) | Err(_) => error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
