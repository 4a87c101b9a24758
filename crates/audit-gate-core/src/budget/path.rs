//! robots.txt-style path patterns.
//!
//! A pattern is matched against a URL's path plus query string. `*` matches
//! any run of characters and a trailing `$` anchors the end of the URL.

use regex::escape;
use url::Url;

use crate::utils::config::DEFAULT_BUDGET_PATH;
use crate::utils::error::ConfigError;

/// Reject malformed path patterns
///
/// # Errors
/// * `ConfigError::InvalidPath` - Path does not start with `/`, has more than
///   one `*` or `$`, or has a `$` that is not the final character
pub fn validate_path(path: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| {
        Err(ConfigError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        })
    };

    if !path.starts_with('/') {
        return invalid("'Path' should start with '/'.");
    }
    if path.matches('*').count() > 1 {
        return invalid("'Path' should only contain one '*'.");
    }
    if path.matches('$').count() > 1 {
        return invalid("'Path' should only contain one '$' character.");
    }
    if path.contains('$') && !path.ends_with('$') {
        return invalid("'Path' should only contain '$' at the end.");
    }

    Ok(())
}

/// Whether a URL's path and query match a pattern; no pattern matches everything
///
/// URLs that cannot be parsed never match.
pub fn matches_path(url: &str, path: Option<&str>) -> bool {
    let pattern = path.unwrap_or(DEFAULT_BUDGET_PATH);

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let url_path = match parsed.query() {
        Some(query) => format!("{}?{}", parsed.path(), query),
        None => parsed.path().to_string(),
    };

    let has_wildcard = pattern.contains('*');
    let has_dollar = pattern.contains('$');

    match (has_wildcard, has_dollar) {
        (false, false) => url_path.starts_with(pattern),
        (false, true) => url_path == pattern.trim_end_matches('$'),
        (true, anchored) => {
            let (before, after) = pattern.split_once('*').unwrap_or((pattern, ""));
            let Some(rest) = url_path.strip_prefix(before) else {
                return false;
            };
            if anchored {
                rest.ends_with(after.trim_end_matches('$'))
            } else {
                rest.contains(after)
            }
        }
    }
}

/// Convert a path pattern into a regex source matching whole URLs
///
/// This is what budget conversion stores as an assertion matrix entry's URL
/// pattern. The regex runs on the raw URL string, while [`matches_path`]
/// compares against the path and query after `Url::parse` normalizes them,
/// so the two disagree for URLs that parsing rewrites (spaces, `..`
/// segments, unescaped non-ASCII).
pub fn path_to_pattern(path: Option<&str>) -> String {
    let path = path.unwrap_or(DEFAULT_BUDGET_PATH);
    let (body, anchored) = match path.strip_suffix('$') {
        Some(body) => (body, true),
        None => (path, false),
    };

    let mut pattern = String::from("^https?://[^/?#]+");
    match body.split_once('*') {
        Some((before, after)) => {
            pattern.push_str(&escape(before));
            pattern.push_str(".*");
            pattern.push_str(&escape(after));
        }
        None => pattern.push_str(&escape(body)),
    }
    if anchored {
        pattern.push('$');
    }

    pattern
}
