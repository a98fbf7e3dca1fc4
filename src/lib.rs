pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{RecordingDisplay, TerminalDisplay};
pub use app::{Frame, Session};
pub use config::Settings;
pub use core::{calculator::Calculator, keymap::KeyMap};
pub use utils::error::{CalcError, Result};
