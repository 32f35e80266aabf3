//! Key-value store source (etcd-style HTTP range query)
//!
//! Fetches every store entry whose key starts with the requested namespace
//! by issuing a single range query over HTTP, then decodes the base64
//! key/value pairs and merges them into the output mapping. The HTTP call
//! itself sits behind the [`RangeTransport`] trait so tests can substitute
//! a canned reply for a live store.
//!
//! Any failure in this stage aborts the whole resolution; the caller never
//! sees a partial mapping.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{
    ResolveRequest, ResolvedConfig, DEFAULT_API_PATH, DEFAULT_STORE_ADDRESS, RANGE_END_SUFFIX,
    STORE_ADDRESS_VAR,
};
use crate::error::ResolveError;
use crate::normalize::lower_camel;
use crate::source::env::EnvSource;

/// Raw reply from the range-query collaborator: HTTP status plus body text.
#[derive(Debug, Clone)]
pub struct RangeReply {
    /// HTTP status code of the reply.
    pub status: u16,
    /// Response body, expected to be JSON on success.
    pub body: String,
}

/// External collaborator able to perform one range query.
pub trait RangeTransport {
    /// POST `body` to `url` and return the status and body text.
    fn post_range(&self, url: &str, body: &str) -> Result<RangeReply, ResolveError>;
}

/// Transport that performs a real blocking HTTP request.
///
/// One request per resolution call, no retry. No total-request timeout is
/// configured; the store is expected to be on a local or same-rack address.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl RangeTransport for HttpTransport {
    fn post_range(&self, url: &str, body: &str) -> Result<RangeReply, ResolveError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        let response = client
            .post(url)
            // The store accepts JSON bodies under this content type.
            .header("Content-type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| ResolveError::Transport(e.to_string()))?;
        Ok(RangeReply { status, body })
    }
}

/// Transport returning a fixed reply, for tests and offline callers.
#[derive(Debug, Clone)]
pub struct FakeTransport {
    reply: RangeReply,
}

impl FakeTransport {
    /// Reply with the given status and body on every query.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { reply: RangeReply { status, body: body.into() } }
    }
}

impl RangeTransport for FakeTransport {
    fn post_range(&self, _url: &str, _body: &str) -> Result<RangeReply, ResolveError> {
        Ok(self.reply.clone())
    }
}

#[derive(Debug, Deserialize, Default)]
struct RangeResponse {
    #[serde(default)]
    kvs: Vec<StoreEntry>,
}

#[derive(Debug, Deserialize)]
struct StoreEntry {
    key: String,
    value: String,
}

/// Query the store for all keys under `namespace` and merge the decoded,
/// normalized entries into `out`.
///
/// The base address comes from the `ETCD_CONN` variable of the injected
/// environment, falling back to [`DEFAULT_STORE_ADDRESS`]. The prefix scan
/// is emulated with a lexical range bound: `namespace` up to (exclusive)
/// `namespace` plus [`RANGE_END_SUFFIX`].
pub(crate) fn merge_store(
    transport: &dyn RangeTransport,
    env: &dyn EnvSource,
    request: &ResolveRequest,
    namespace: &str,
    out: &mut ResolvedConfig,
) -> Result<(), ResolveError> {
    let base = env.get(STORE_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_STORE_ADDRESS.to_string());
    let api_path = request.etcd_api_path.as_deref().unwrap_or(DEFAULT_API_PATH);
    let url = format!("{base}/{api_path}/kv/range");

    let body = serde_json::json!({
        "key": BASE64.encode(namespace),
        "range_end": BASE64.encode(format!("{namespace}{RANGE_END_SUFFIX}")),
    })
    .to_string();

    tracing::debug!(%url, %namespace, "store range query");
    let reply = transport.post_range(&url, &body)?;
    if reply.status != 200 {
        return Err(ResolveError::Status { status: reply.status });
    }

    let parsed: RangeResponse = serde_json::from_str(&reply.body)
        .map_err(|e| ResolveError::Decode(format!("invalid JSON in range reply: {e}")))?;

    // Missing or empty "kvs" just means the namespace holds nothing.
    for entry in parsed.kvs {
        let raw_key = decode_field(&entry.key, "key")?;
        let value = decode_field(&entry.value, "value")?;
        let key = lower_camel(&raw_key, namespace);
        tracing::debug!(%raw_key, %key, "store entry");
        out.insert(key, value);
    }
    Ok(())
}

fn decode_field(encoded: &str, what: &str) -> Result<String, ResolveError> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| ResolveError::Decode(format!("invalid base64 in entry {what}: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| ResolveError::Decode(format!("entry {what} is not valid UTF-8")))
}
