//! Accepted webmention link relation values.
//!
//! The wire contract recognizes exactly three spellings: the modern
//! `webmention` token and two legacy absolute-URI forms that older sites
//! still advertise. `https://webmention.org` was never a valid relation and
//! must not match.

/// The modern relation token.
pub const REL_WEBMENTION: &str = "webmention";

/// Legacy absolute-URI relation, without trailing slash.
pub const REL_LEGACY: &str = "http://webmention.org";

/// Legacy absolute-URI relation, with trailing slash.
pub const REL_LEGACY_SLASH: &str = "http://webmention.org/";

/// Whether a single relation token identifies a webmention endpoint.
#[must_use]
pub fn is_webmention(token: &str) -> bool {
    matches!(token, REL_WEBMENTION | REL_LEGACY | REL_LEGACY_SLASH)
}

/// Whether a space-separated `rel` attribute value contains a webmention
/// relation.
#[must_use]
pub fn attribute_matches(value: &str) -> bool {
    value.split(' ').any(is_webmention)
}
