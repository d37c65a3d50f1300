//! Best-effort `.env` loading
//!
//! Parsing is delegated to `dotenvy`. Variables already present in the
//! process environment are never overridden.

use std::path::Path;
use tracing::debug;

const DEFAULT_DOTENV: &str = ".env";

/// Load an env file into the process environment.
///
/// With `None`, loads `.env` from the working directory. Parent directories
/// are not searched.
///
/// Any failure is swallowed; the return value says whether a file was loaded.
pub fn load_dotenv(path: Option<&Path>) -> bool {
    let path = path.unwrap_or(Path::new(DEFAULT_DOTENV));

    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded env file");
            true
        }
        Err(e) if e.not_found() => {
            debug!("No env file found, skipping");
            false
        }
        Err(e) => {
            debug!(error = %e, "Ignoring unreadable env file");
            false
        }
    }
}
