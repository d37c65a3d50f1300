//! Configuration module
//!
//! Loads YAML configuration files, resolving `[[ getenv "NAME" ]]`
//! placeholders from the environment before deserializing.

pub mod dotenv;
pub mod loader;
pub mod substitute;

pub use dotenv::load_dotenv;
pub use loader::{ConfigLoader, load_config, load_config_from_str, load_config_into};
pub use substitute::{EnvSource, ProcessEnv, placeholder_names, substitute_placeholders};
