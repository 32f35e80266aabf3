//! Resolve runtime configuration for a service by merging three flat
//! string key/value sources, in ascending priority:
//!
//! 1. An etcd-style key-value store, queried over HTTP with a prefix
//!    range scan (only when a store namespace is requested)
//! 2. Process environment variables under a `NAMESPACE_` prefix (only
//!    when an environment namespace is requested)
//! 3. Command-line `--key=value` tokens (always)
//!
//! Every discovered key is normalized into lowerCamelCase so that
//! `cfg/svc/max-connects`, `SVC_MAX_CONNECTS`, and `--maxConnects` all
//! land on the same entry, with the later source winning.
//!
//! ```no_run
//! use runtime_config::{ResolveRequest, Resolver};
//!
//! # fn main() -> Result<(), runtime_config::ResolveError> {
//! let request = ResolveRequest::new()
//!     .etcd_namespace("cfg/flash-service/")
//!     .env_namespace("FLASH");
//! let config = Resolver::new().resolve(&request)?;
//! if let Some(port) = config.get("port") {
//!     println!("listening on {port}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod source;

pub use domain::{ResolveRequest, ResolvedConfig};
pub use error::ResolveError;
pub use resolver::Resolver;
