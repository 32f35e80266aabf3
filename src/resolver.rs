//! Three-stage resolution: store, then environment, then command line
//!
//! Each stage writes into the same mapping; later stages overwrite earlier
//! ones on key collision. Whether a stage runs depends only on the request,
//! never on what an earlier stage found.

use crate::domain::{ResolveRequest, ResolvedConfig};
use crate::error::ResolveError;
use crate::source::env::{EnvSource, ProcessEnv};
use crate::source::store::{HttpTransport, RangeTransport};
use crate::source::{args, env, store};

/// Resolves configuration by merging the three sources.
///
/// Holds the external collaborators (store transport, environment view, and
/// argument list). `Resolver::new()` wires up real process state and a live
/// HTTP transport; the builder setters substitute fakes in tests.
pub struct Resolver {
    transport: Box<dyn RangeTransport>,
    env: Box<dyn EnvSource>,
    args: Vec<String>,
}

impl Resolver {
    /// Resolver over the real process environment, the process argument
    /// list, and a live HTTP transport.
    pub fn new() -> Self {
        Self {
            transport: Box::new(HttpTransport),
            env: Box::new(ProcessEnv),
            args: std::env::args().collect(),
        }
    }

    /// Substitute the store transport.
    pub fn transport(mut self, transport: impl RangeTransport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Substitute the environment view.
    pub fn env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Substitute the argument list scanned for `--key=value` tokens.
    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Run one resolution call and return the merged mapping.
    ///
    /// Stage order is fixed: key-value store (if `etcd_namespace` is set),
    /// environment (if `env_namespace` is set), then command line (always).
    /// A store failure aborts the whole call; no partial mapping is
    /// returned.
    pub fn resolve(&self, request: &ResolveRequest) -> Result<ResolvedConfig, ResolveError> {
        let mut found = ResolvedConfig::new();

        if let Some(namespace) = &request.etcd_namespace {
            store::merge_store(
                self.transport.as_ref(),
                self.env.as_ref(),
                request,
                namespace,
                &mut found,
            )?;
        } else {
            tracing::debug!("no store namespace requested, skipping store stage");
        }

        if let Some(namespace) = &request.env_namespace {
            env::merge_env(self.env.as_ref(), namespace, &mut found);
        } else {
            tracing::debug!("no environment namespace requested, skipping environment stage");
        }

        args::merge_args(&self.args, &mut found);

        Ok(found)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
