//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;

use crate::domain::ResolveRequest;
use crate::resolver::Resolver;

#[derive(Args)]
pub struct ResolveArgs {
    /// Key-value store namespace prefix (enables the store stage)
    #[arg(long, value_name = "PREFIX")]
    pub etcd_namespace: Option<String>,

    /// Store API path segment (default: v3alpha)
    #[arg(long, value_name = "PATH")]
    pub etcd_api_path: Option<String>,

    /// Environment variable namespace (enables the environment stage)
    #[arg(long, value_name = "PREFIX")]
    pub env_namespace: Option<String>,

    /// Override tokens after `--`, e.g. `-- --port=8080`; highest priority
    #[arg(last = true, value_name = "OVERRIDES")]
    pub overrides: Vec<String>,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let mut request = ResolveRequest::new();
    if let Some(namespace) = args.etcd_namespace {
        request = request.etcd_namespace(namespace);
    }
    if let Some(path) = args.etcd_api_path {
        request = request.etcd_api_path(path);
    }
    if let Some(namespace) = args.env_namespace {
        request = request.env_namespace(namespace);
    }

    // Only the trailing tokens are scanned for overrides; the binary's own
    // flags must not leak into the merge.
    let resolved = Resolver::new()
        .args(args.overrides)
        .resolve(&request)
        .context("Failed resolving configuration")?;

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
