//! URL encoding utilities for API paths and frontend links.
//!
//! Provides percent-encoding for URL path segments so that dashboard uids
//! and slugs cannot escape their path position, and form encoding for the
//! `var-{name}` query pairs of frontend dashboard links.
//!
//! # Example
//!
//! ```
//! use grafana_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("team/overview");
//! assert_eq!(encoded, "team%2Foverview");
//! ```

use std::collections::HashMap;

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};
use url::form_urlencoded;

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3. Slash, question mark and hash are included
/// so an identifier cannot add path levels, a query, or a fragment. Percent
/// is included to prevent double-decoding.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// # Examples
///
/// ```
/// use grafana_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("cpu-usage"), "cpu-usage");
/// assert_eq!(encode_path_segment("my dashboard"), "my%20dashboard");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Encode dashboard variables as `var-{name}={value}` query pairs.
///
/// Every value of a variable yields its own pair. Variable names are sorted
/// so the output is stable; values keep their given order. An empty map
/// yields an empty string.
pub fn dashboard_vars_query(dashboard_vars: &HashMap<String, Vec<String>>) -> String {
    let mut names: Vec<&String> = dashboard_vars.keys().collect();
    names.sort();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for name in names {
        let key = format!("var-{name}");
        for value in &dashboard_vars[name] {
            serializer.append_pair(&key, value);
        }
    }
    serializer.finish()
}
