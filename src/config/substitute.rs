//! Placeholder substitution
//!
//! Replaces `[[ getenv "NAME" ]]` tokens in raw configuration text with
//! values from an [`EnvSource`]. Substitution is purely textual and runs
//! before YAML parsing.

use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::LazyLock;
use tracing::{debug, trace};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII whitespace only; `\s` would also accept Unicode spaces
    Regex::new(r#"\[\[[\t\n\f\r ]*getenv[\t\n\f\r ]+"([^"]+)"[\t\n\f\r ]*\]\]"#)
        .expect("placeholder pattern is valid")
});

/// A name to value lookup used to resolve placeholders.
///
/// Implemented for the process environment ([`ProcessEnv`]) and for plain
/// string maps, so tests and embedders can pass an explicit snapshot
/// instead of mutating process-wide state.
pub trait EnvSource {
    /// Look up a variable. `None` means unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads variables from the current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Replace every placeholder token in `text` with its value from `env`.
///
/// A token whose variable is unset or set to the empty string is left in
/// place verbatim. Values are inserted literally and are not rescanned.
pub fn substitute_placeholders<E: EnvSource + ?Sized>(text: &str, env: &E) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            let name = &caps[1];
            match env.var(name) {
                Some(value) if !value.is_empty() => {
                    trace!(name, "Resolved placeholder");
                    value
                }
                _ => {
                    debug!(name, "Environment variable not set, leaving placeholder");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Names referenced by placeholder tokens in `text`, in order of appearance
pub fn placeholder_names(text: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
