//! runtime-config: resolve service configuration from a key-value store,
//! environment variables, and command-line overrides.

use anyhow::Result;

fn main() -> Result<()> {
    runtime_config::cli::run()
}
