//! Aggregation key extraction.

use reqwest::Url;

/// Return the hostname of `url`, or `None` when the URL does not parse or has
/// no host.
///
/// The hostname is returned as the parser produced it. IPv6 literals lose
/// their brackets.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
