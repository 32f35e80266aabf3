//! Environment variable source
//!
//! Selects variables named `<NAMESPACE>_*`, strips the prefix, and merges
//! the normalized keys into the output mapping. The process environment is
//! reached through the [`EnvSource`] trait so tests can substitute a fake
//! instead of touching real process state.

use std::collections::BTreeMap;

use crate::domain::ResolvedConfig;
use crate::normalize::lower_camel;

/// Read-only view of the environment.
pub trait EnvSource {
    /// Get the value of a variable by name.
    fn get(&self, name: &str) -> Option<String>;

    /// Iterate over all variables.
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_>;
}

/// Environment source backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(std::env::vars())
    }
}

/// Map-backed environment source for tests.
#[derive(Debug, Clone, Default)]
pub struct FakeEnv {
    vars: BTreeMap<String, String>,
}

impl FakeEnv {
    /// Create a new empty fake environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fake environment from an iterator of name-value pairs.
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for FakeEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(self.vars.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

/// Merge all `<namespace>_`-prefixed variables into `out`, overwriting
/// entries from lower-priority stages.
pub(crate) fn merge_env(env: &dyn EnvSource, namespace: &str, out: &mut ResolvedConfig) {
    let prefix = format!("{namespace}_");
    for (name, value) in env.vars() {
        if !name.starts_with(&prefix) {
            continue;
        }
        let key = lower_camel(&name, &prefix);
        tracing::debug!(%name, %key, "environment entry");
        out.insert(key, value);
    }
}
