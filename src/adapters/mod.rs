// Adapters layer: concrete display sinks for the calculator.

pub mod memory;
pub mod terminal;

pub use memory::{DisplayUpdate, RecordingDisplay};
pub use terminal::TerminalDisplay;
