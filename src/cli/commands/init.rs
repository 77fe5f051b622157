use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the configuration file with default values unless it already
/// exists. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_path();

    println!("⚙️  Initializing leadgrid…");
    println!("📄 Config file : {}", path.display());

    if cli.test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    if path.exists() {
        info("Configuration file already present, left untouched (see `config --migrate`).");
        return Ok(());
    }

    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "config created");

    success("leadgrid initialization completed!");
    Ok(())
}
