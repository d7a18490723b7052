//! RFC 3986 percent-encoding as required by OAuth Core 1.0a §5.1.
//!
//! Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) pass through; every other byte
//! of the UTF-8 representation becomes an uppercase `%XX` triplet. Spaces encode as `%20`.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

const OAUTH: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `input` with the OAuth unreserved set.
pub fn percent_encode(input: &str) -> String {
	percent_encoding::utf8_percent_encode(input, OAUTH).to_string()
}
