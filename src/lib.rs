//! YAML configuration with environment placeholders
//!
//! Loads a YAML file into any `serde` deserializable type after replacing
//! `[[ getenv "NAME" ]]` tokens with environment variable values. A `.env`
//! file in the working directory is merged into the process environment
//! first, when present.
//!
//! ## Placeholder rules
//!
//! - `[[ getenv "NAME" ]]` is replaced by the value of `NAME`, inserted as-is
//! - Whitespace inside the brackets is optional, but `getenv` and the quoted
//!   name must be separated by at least one space
//! - Unset *and* empty variables leave the token untouched
//! - Substitution is textual and happens before parsing, so tokens work
//!   anywhere in the file
//!
//! ## Example
//!
//! ```yaml
//! database:
//!   host: localhost
//!   user: [[ getenv "DB_USER" ]]
//!   password: [[ getenv "DB_PASSWORD" ]]
//! ```
//!
//! ```ignore
//! #[derive(serde::Deserialize)]
//! struct Config {
//!     database: Database,
//! }
//!
//! let config: Config = getenv_config::load_config("config.yaml")?;
//! ```

pub mod config;
pub mod error;

// Re-export main types
pub use config::{
    ConfigLoader, EnvSource, ProcessEnv, load_config, load_config_from_str, load_config_into,
    load_dotenv, placeholder_names, substitute_placeholders,
};
pub use error::{ConfigError, Result};
