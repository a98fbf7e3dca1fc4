pub mod buffer;
pub mod calculator;
pub mod expression;
pub mod format;
pub mod keymap;

pub use crate::domain::model::{Action, Digit, Evaluation, Glyphs, Input, Operator, Screen};
pub use crate::domain::ports::{ConfigProvider, DisplaySink};
pub use crate::utils::error::Result;
