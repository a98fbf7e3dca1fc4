use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub display: Option<DisplayConfig>,
    pub glyphs: Option<GlyphConfig>,
    pub keys: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub precision: Option<usize>,
}

/// Any glyph left out keeps its default symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphConfig {
    pub division: Option<String>,
    pub multiplication: Option<String>,
    pub subtraction: Option<String>,
    pub addition: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CALC_PRECISION})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn precision(&self) -> Option<usize> {
        self.display.as_ref().and_then(|d| d.precision)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(precision) = self.precision() {
            crate::utils::validation::validate_range(
                "display.precision",
                precision,
                0,
                crate::config::MAX_PRECISION,
            )?;
        }

        if let Some(glyphs) = &self.glyphs {
            let entries = [
                ("glyphs.division", &glyphs.division),
                ("glyphs.multiplication", &glyphs.multiplication),
                ("glyphs.subtraction", &glyphs.subtraction),
                ("glyphs.addition", &glyphs.addition),
            ];
            for (field, glyph) in entries {
                if let Some(glyph) = glyph {
                    crate::utils::validation::validate_non_empty_string(field, glyph)?;
                }
            }
        }

        if let Some(keys) = &self.keys {
            for (key, input_name) in keys {
                crate::utils::validation::validate_key_binding("keys", key, input_name)?;
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
