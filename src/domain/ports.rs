use crate::domain::model::Glyphs;
use std::collections::HashMap;

/// Where the calculator writes its two display lines.
pub trait DisplaySink {
    fn show_buffer(&mut self, text: &str);
    fn show_expression(&mut self, text: &str);
}

pub trait ConfigProvider {
    fn glyphs(&self) -> &Glyphs;
    fn precision(&self) -> usize;
    /// Extra key name to input name bindings layered over the defaults.
    fn key_bindings(&self) -> &HashMap<String, String>;
}
