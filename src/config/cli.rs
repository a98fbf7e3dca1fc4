use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "small-calc")]
#[command(about = "A small keypad calculator for the terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Key script to run once, e.g. "12{Backspace}3+4="
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Fractional digits shown for results (overrides the config file)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Print the screen after every key instead of after every line
    #[arg(long)]
    pub trace: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, applies overrides and validates the result.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                tracing::info!("Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Settings::from_toml(file)
            }
            None => Settings::default(),
        };

        if let Some(precision) = self.precision {
            tracing::debug!("Precision overridden to: {}", precision);
            settings.precision = precision;
        }

        settings.validate()?;
        Ok(settings)
    }
}
