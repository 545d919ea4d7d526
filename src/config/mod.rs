//! Configuration module for Newsbrief
//!
//! Settings come from built-in defaults, an optional TOML file, and the
//! command line / environment, in increasing order of precedence.
//!
//! # Example
//!
//! ```no_run
//! use newsbrief::config::{build_config, PartialConfig};
//! use std::path::Path;
//!
//! let config = build_config(Some(Path::new("newsbrief.toml")), PartialConfig::default()).unwrap();
//! println!("Language data lives in {}", config.nlp.data_dir.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, NlpConfig, PartialConfig, PartialFetchConfig, PartialNlpConfig,
    PartialServerConfig, ServerConfig, DEFAULT_LEXICON_URL, DEFAULT_SECRET_KEY,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{build_config, load_config_file};
