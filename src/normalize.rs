//! Key normalization into lowerCamelCase

/// Convert a raw source key into canonical lowerCamelCase form.
///
/// When `strip_prefix` is non-empty, every literal occurrence of it is
/// removed from `raw` first — not just a leading match, so a namespace
/// string that recurs inside the key body is stripped there too. Existing
/// key layouts depend on this, so it is kept as-is.
///
/// The remainder is lowercased, every character outside `[0-9a-z]` becomes
/// a word boundary (consecutive separators collapse), and the words are
/// joined with each word after the first capitalized.
///
/// Returns an empty string for empty or all-separator input.
///
/// # Examples
/// - `lower_camel("FOO_BAR-baz", "")` → `"fooBarBaz"`
/// - `lower_camel("cfg/flash-service/port", "cfg/flash-service/")` → `"port"`
pub fn lower_camel(raw: &str, strip_prefix: &str) -> String {
    let stripped =
        if strip_prefix.is_empty() { raw.to_string() } else { raw.replace(strip_prefix, "") };

    let spaced: String = stripped
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { ' ' })
        .collect();

    let mut out = String::with_capacity(spaced.len());
    for word in spaced.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            // First word stays lowercase, later words get a capital.
            if out.is_empty() {
                out.push(first);
            } else {
                out.push(first.to_ascii_uppercase());
            }
            out.extend(chars);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_become_camel_humps() {
        assert_eq!(lower_camel("FOO_BAR-baz", ""), "fooBarBaz");
    }

    #[test]
    fn test_prefix_stripped_before_conversion() {
        assert_eq!(lower_camel("cfg/flash-service/port", "cfg/flash-service/"), "port");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lower_camel("", "x"), "");
    }

    #[test]
    fn test_all_separators_normalize_to_empty() {
        assert_eq!(lower_camel("--//__", ""), "");
    }

    #[test]
    fn test_consecutive_separators_collapse() {
        assert_eq!(lower_camel("max__connects", ""), "maxConnects");
        assert_eq!(lower_camel("max-_/connects", ""), "maxConnects");
    }

    #[test]
    fn test_digits_do_not_break_words() {
        assert_eq!(lower_camel("max2connects", ""), "max2connects");
        assert_eq!(lower_camel("ipv4_address", ""), "ipv4Address");
    }

    #[test]
    fn test_prefix_removed_everywhere_not_just_leading() {
        // The strip is a plain substring removal, so a prefix recurring in
        // the key body disappears as well.
        assert_eq!(lower_camel("ns/inner-ns/port", "ns/"), "innerPort");
    }

    #[test]
    fn test_prefix_strip_is_case_sensitive() {
        assert_eq!(lower_camel("FLASH_MAX_CONNECTS", "FLASH_"), "maxConnects");
        assert_eq!(lower_camel("FLASH_MAX_CONNECTS", "flash_"), "flashMaxConnects");
    }

    #[test]
    fn test_leading_digit_kept() {
        assert_eq!(lower_camel("2fast_mode", ""), "2fastMode");
    }
}
