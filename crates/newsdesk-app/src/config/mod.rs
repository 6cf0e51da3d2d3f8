//! Configuration file parsing for newsdesk
//!
//! Settings live in `<config_dir>/newsdesk/config.toml` unless a path is
//! given on the command line. Command-line overrides beat the file, which
//! beats the built-in defaults.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, CONFIG_FILENAME};
pub use types::*;
