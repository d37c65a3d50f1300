//! Configuration loader
//!
//! Loading runs in a fixed order:
//! 1. Best-effort `.env` load into the process environment
//! 2. Read the YAML file
//! 3. Substitute `[[ getenv "NAME" ]]` placeholders
//! 4. Deserialize into the caller's type

use crate::config::dotenv::load_dotenv;
use crate::config::substitute::{EnvSource, ProcessEnv, substitute_placeholders};
use crate::error::{ConfigError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the loader looks for an env file before reading the config
#[derive(Debug, Clone, Default)]
enum DotenvSource {
    /// `.env` in the working directory only
    #[default]
    WorkingDir,
    Path(PathBuf),
    Disabled,
}

/// Loader for YAML configuration files with environment placeholders.
///
/// The default loader reads `.env` from the working directory and resolves
/// placeholders against the process environment.
///
/// # Example
/// ```ignore
/// let config: AppConfig = ConfigLoader::new()
///     .dotenv_path("deploy/.env")
///     .load("config.yaml")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<E = ProcessEnv> {
    dotenv: DotenvSource,
    env: E,
}

impl ConfigLoader {
    /// Create a loader with the default env file and process environment
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Resolve placeholders from `env` instead of the process environment.
    ///
    /// The env file step still writes to the process environment, so pair
    /// this with [`skip_dotenv`](Self::skip_dotenv) for fully isolated loads.
    pub fn with_env<F: EnvSource>(self, env: F) -> ConfigLoader<F> {
        ConfigLoader {
            dotenv: self.dotenv,
            env,
        }
    }

    /// Load this env file instead of `./.env`
    pub fn dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv = DotenvSource::Path(path.into());
        self
    }

    /// Do not touch any env file
    pub fn skip_dotenv(mut self) -> Self {
        self.dotenv = DotenvSource::Disabled;
        self
    }

    /// Load and deserialize the configuration file at `path`
    pub fn load<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();

        match &self.dotenv {
            DotenvSource::WorkingDir => {
                load_dotenv(None);
            }
            DotenvSource::Path(env_path) => {
                load_dotenv(Some(env_path.as_path()));
            }
            DotenvSource::Disabled => {}
        }

        let bytes = fs::read(path).map_err(|e| ConfigError::read(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read configuration file");

        match String::from_utf8(bytes) {
            Ok(raw) => load_config_from_str(&raw, &self.env),
            // Bad encoding is invalid YAML, so let the parser report it
            Err(e) => serde_yaml::from_slice(e.as_bytes()).map_err(ConfigError::from),
        }
    }

    /// Load the configuration file at `path` into `target`.
    ///
    /// `target` is only overwritten when loading succeeds.
    pub fn load_into<T: DeserializeOwned>(
        &self,
        target: &mut T,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        *target = self.load(path)?;
        Ok(())
    }
}

/// Load configuration from a YAML file using the default loader
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    ConfigLoader::new().load(path)
}

/// Load configuration from a YAML file into an existing value
pub fn load_config_into<T: DeserializeOwned>(
    target: &mut T,
    path: impl AsRef<Path>,
) -> Result<()> {
    ConfigLoader::new().load_into(target, path)
}

/// Substitute placeholders in `text` from `env` and deserialize the result.
///
/// Performs no file or env file I/O (useful for testing).
pub fn load_config_from_str<T, E>(text: &str, env: &E) -> Result<T>
where
    T: DeserializeOwned,
    E: EnvSource + ?Sized,
{
    let substituted = substitute_placeholders(text, env);
    serde_yaml::from_str(&substituted).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Sample {
        name: String,
        #[serde(default)]
        port: u16,
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_config_from_str_substitutes() {
        let vars = env(&[("SAMPLE_NAME", "api"), ("SAMPLE_PORT", "9000")]);
        let config: Sample = load_config_from_str(
            "name: [[ getenv \"SAMPLE_NAME\" ]]\nport: [[ getenv \"SAMPLE_PORT\" ]]\n",
            &vars,
        )
        .unwrap();

        assert_eq!(
            config,
            Sample {
                name: "api".to_string(),
                port: 9000,
            }
        );
    }

    #[test]
    fn test_unresolved_placeholder_is_parse_error_for_numbers() {
        let vars = env(&[]);
        let result: Result<Sample> =
            load_config_from_str("name: x\nport: [[ getenv \"SAMPLE_PORT\" ]]\n", &vars);
        assert!(result.unwrap_err().is_parse());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let vars = env(&[]);
        let result: Result<Sample> = load_config_from_str("name: [unclosed", &vars);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let result: Result<Sample> = ConfigLoader::new().skip_dotenv().load(&path);
        match result {
            Err(ConfigError::Read { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_with_explicit_env() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "name: [[ getenv \"SAMPLE_NAME\" ]]\n").unwrap();

        let config: Sample = ConfigLoader::new()
            .skip_dotenv()
            .with_env(env(&[("SAMPLE_NAME", "isolated")]))
            .load(&path)
            .unwrap();

        assert_eq!(config.name, "isolated");
        assert_eq!(config.port, 0);
    }

    #[test]
    fn test_load_into_leaves_target_on_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "name: [unclosed").unwrap();

        let mut target = Sample {
            name: "before".to_string(),
            port: 1,
        };
        let result = ConfigLoader::new().skip_dotenv().load_into(&mut target, &path);

        assert!(result.unwrap_err().is_parse());
        assert_eq!(target.name, "before");
        assert_eq!(target.port, 1);
    }

    #[test]
    fn test_non_utf8_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.yaml");
        fs::write(&path, b"name: \xff\xfe\n").unwrap();

        let result: Result<Sample> = ConfigLoader::new().skip_dotenv().load(&path);
        let err = result.unwrap_err();
        assert!(err.is_parse());
        assert!(!err.is_read());
    }
}
