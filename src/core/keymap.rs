use crate::domain::model::{Action, Digit, Input, Operator};
use crate::utils::error::Result;
use crate::utils::validation::validate_key_binding;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const BACKSPACE: &str = "Backspace";

/// Key name to input lookup, seeded with the classic keypad bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<String, Input>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default bindings with `overrides` (key name -> input name) layered on top.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self> {
        let mut keymap = Self::default();
        for (key, input_name) in overrides {
            let input = validate_key_binding("keys", key, input_name)?;
            keymap.bind(key.clone(), input);
        }
        Ok(keymap)
    }

    pub fn bind(&mut self, key: impl Into<String>, input: Input) {
        self.bindings.insert(key.into(), input);
    }

    pub fn resolve(&self, key: &str) -> Option<Input> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        for value in 0..=9 {
            if let Some(digit) = Digit::new(value) {
                bindings.insert(digit.as_char().to_string(), Input::Digit(digit));
            }
        }

        let named = [
            ("/", Input::Operator(Operator::Division)),
            ("*", Input::Operator(Operator::Multiplication)),
            ("-", Input::Operator(Operator::Subtraction)),
            ("+", Input::Operator(Operator::Addition)),
            ("c", Input::Action(Action::Clear)),
            (BACKSPACE, Input::Action(Action::RemoveCharacter)),
            ("%", Input::Action(Action::CalculatePercentage)),
            ("=", Input::Action(Action::Calculate)),
            ("s", Input::Action(Action::ChangeSign)),
            (".", Input::Action(Action::AddDecimalPoint)),
        ];
        for (key, input) in named {
            bindings.insert(key.to_string(), input);
        }

        Self { bindings }
    }
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^{}]+)\}|(?s:.)").expect("key pattern is valid"))
}

/// Splits a key script into key names: one per character, `{Name}` for named keys.
pub fn tokenize(script: &str) -> Vec<String> {
    key_pattern()
        .captures_iter(script)
        .map(|caps| match caps.get(1) {
            Some(name) => name.as_str().to_string(),
            None => caps[0].to_string(),
        })
        .collect()
}
