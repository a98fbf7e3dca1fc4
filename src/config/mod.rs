#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::format::DEFAULT_PRECISION;
use crate::core::ConfigProvider;
use crate::domain::model::Glyphs;
use crate::utils::error::Result;
use crate::utils::validation::{validate_key_binding, validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use toml_config::TomlConfig;

pub const MAX_PRECISION: usize = 10;

/// Fully resolved calculator settings: defaults, then the TOML file, then CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub precision: usize,
    pub glyphs: Glyphs,
    pub key_bindings: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            glyphs: Glyphs::default(),
            key_bindings: HashMap::new(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: TomlConfig) -> Self {
        let mut settings = Self::default();

        if let Some(precision) = config.precision() {
            settings.precision = precision;
        }

        if let Some(glyphs) = config.glyphs {
            let target = &mut settings.glyphs;
            for (slot, value) in [
                (&mut target.division, glyphs.division),
                (&mut target.multiplication, glyphs.multiplication),
                (&mut target.subtraction, glyphs.subtraction),
                (&mut target.addition, glyphs.addition),
            ] {
                if let Some(value) = value {
                    *slot = value;
                }
            }
        }

        if let Some(keys) = config.keys {
            settings.key_bindings = keys;
        }

        settings
    }
}

impl ConfigProvider for Settings {
    fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    fn precision(&self) -> usize {
        self.precision
    }

    fn key_bindings(&self) -> &HashMap<String, String> {
        &self.key_bindings
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("display.precision", self.precision, 0, MAX_PRECISION)?;
        validate_non_empty_string("glyphs.division", &self.glyphs.division)?;
        validate_non_empty_string("glyphs.multiplication", &self.glyphs.multiplication)?;
        validate_non_empty_string("glyphs.subtraction", &self.glyphs.subtraction)?;
        validate_non_empty_string("glyphs.addition", &self.glyphs.addition)?;
        for (key, input_name) in &self.key_bindings {
            validate_key_binding("keys", key, input_name)?;
        }
        Ok(())
    }
}
