//! Command-line argument source
//!
//! Scans an ordered argument list for `--key=value` tokens. Always runs and
//! carries the highest priority. The list is injected rather than read from
//! `std::env::args` directly so tests can pass their own tokens.

use crate::domain::ResolvedConfig;
use crate::normalize::lower_camel;

/// Merge all `--key=value` tokens from `args` into `out`, overwriting
/// entries from the store and environment stages.
///
/// Tokens without a leading `--` are skipped. A token with no `=`, or with
/// more than one, is dropped entirely (the value is never joined back
/// together).
pub(crate) fn merge_args(args: &[String], out: &mut ResolvedConfig) {
    for arg in args {
        let Some(rest) = arg.strip_prefix("--") else {
            continue;
        };
        let parts: Vec<&str> = rest.split('=').collect();
        if parts.len() != 2 {
            tracing::debug!(%arg, "ignoring malformed override token");
            continue;
        }
        let key = lower_camel(parts[0], "");
        out.insert(key, parts[1].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_key_value_token_accepted() {
        let mut out = ResolvedConfig::new();
        merge_args(&args(&["--serverName=svc1"]), &mut out);

        assert_eq!(out.get("serverName").map(String::as_str), Some("svc1"));
    }

    #[test]
    fn test_token_without_equals_dropped() {
        let mut out = ResolvedConfig::new();
        merge_args(&args(&["--bad"]), &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn test_token_with_two_equals_dropped() {
        let mut out = ResolvedConfig::new();
        merge_args(&args(&["--a=b=c"]), &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn test_tokens_without_dashes_skipped() {
        let mut out = ResolvedConfig::new();
        merge_args(&args(&["target/debug/app", "port=1", "-p=2"]), &mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_value_kept() {
        let mut out = ResolvedConfig::new();
        merge_args(&args(&["--serverName="]), &mut out);

        assert_eq!(out.get("serverName").map(String::as_str), Some(""));
    }

    #[test]
    fn test_later_token_wins() {
        let mut out = ResolvedConfig::new();
        merge_args(&args(&["--port=1", "--port=2"]), &mut out);

        assert_eq!(out.get("port").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_key_normalized() {
        let mut out = ResolvedConfig::new();
        merge_args(&args(&["--max-connects=50"]), &mut out);

        assert_eq!(out.get("maxConnects").map(String::as_str), Some("50"));
    }
}
