use crate::core::calculator::Calculator;
use crate::core::keymap::{tokenize, KeyMap};
use crate::core::{ConfigProvider, DisplaySink, Input, Result};
use serde::{Deserialize, Serialize};

/// One key press and the screen it left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub key: String,
    pub input: Option<Input>,
    pub buffer: String,
    pub expression: String,
}

/// Feeds key names through the key map into a calculator.
pub struct Session<D: DisplaySink> {
    calculator: Calculator<D>,
    keymap: KeyMap,
}

impl<D: DisplaySink> Session<D> {
    pub fn new(calculator: Calculator<D>, keymap: KeyMap) -> Self {
        Self { calculator, keymap }
    }

    pub fn from_config<C: ConfigProvider>(display: D, config: &C) -> Result<Self> {
        let keymap = KeyMap::with_overrides(config.key_bindings())?;
        let mut calculator = Calculator::from_config(display, config);
        calculator.refresh();
        Ok(Self::new(calculator, keymap))
    }

    pub fn calculator(&self) -> &Calculator<D> {
        &self.calculator
    }

    pub fn calculator_mut(&mut self) -> &mut Calculator<D> {
        &mut self.calculator
    }

    /// Returns the input the key resolved to; unbound keys do nothing.
    pub fn press(&mut self, key: &str) -> Option<Input> {
        let input = self.keymap.resolve(key);
        match input {
            Some(input) => self.calculator.handle(input),
            None => tracing::debug!("Ignoring unbound key: {:?}", key),
        }
        input
    }

    /// Runs every key of the script, returning how many were recognized.
    pub fn run_script(&mut self, script: &str) -> usize {
        tokenize(script)
            .iter()
            .filter_map(|key| self.press(key))
            .count()
    }

    /// Like [`Session::run_script`], recording the screen after each key.
    pub fn run_script_traced(&mut self, script: &str) -> Vec<Frame> {
        tokenize(script)
            .into_iter()
            .map(|key| {
                let input = self.press(&key);
                let screen = self.calculator.screen();
                Frame {
                    buffer: screen.buffer.clone(),
                    expression: screen.expression.clone(),
                    key,
                    input,
                }
            })
            .collect()
    }
}
