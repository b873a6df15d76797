// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Normalising and checking the URLs users type into the link editor.

use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;
use strum_macros::{AsRefStr, Display};
use url::Url;

static USABLE_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:[a-z]+:|#|\?|\.|/)").unwrap());

static HAS_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+:").unwrap());

static PROTOCOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-z\-.+]+[0-9]*:)").unwrap());

static HTTP_WITH_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://[^/\s]").unwrap());

static FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[^\s#?/]*$").unwrap());

/// How a URL typed straight into the search box should be linked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum DirectEntryKind {
    #[strum(serialize = "URL")]
    Url,
    #[strum(serialize = "mailto")]
    Mailto,
    #[strum(serialize = "tel")]
    Tel,
    #[strum(serialize = "internal")]
    Internal,
}

/// Prefix `http://` to a URL that has no scheme.
///
/// Input is trimmed. URLs starting with a scheme, `#`, `?`, `.` or `/` and
/// e-mail addresses are left alone; empty input stays empty.
pub fn prepend_http(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() || USABLE_HREF.is_match(url) || is_email(url) {
        url.to_owned()
    } else {
        format!("http://{url}")
    }
}

/// Whether `s` is an e-mail address, optionally prefixed with `mailto:`.
pub fn is_email(s: &str) -> bool {
    let address = match s.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("mailto:") => &s[7..],
        _ => s,
    };
    EmailAddress::is_valid(address)
        && address
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}

/// The scheme of `url` including the trailing colon, e.g. `"https:"`.
pub fn protocol(url: &str) -> Option<&str> {
    PROTOCOL
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Whether `fragment` is a usable `#anchor`.
pub fn is_valid_fragment(fragment: &str) -> bool {
    FRAGMENT.is_match(fragment)
}

/// Whether `href` is likely to work as a link target.
///
/// Hrefs without a scheme (relative paths, `?query`) pass. Hrefs with one
/// need a valid protocol, `http(s)` needs `://` and a host, and the whole
/// href must parse as a URL. Anchors must be a single valid fragment.
pub fn is_valid_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() {
        return false;
    }

    if HAS_SCHEME.is_match(href) {
        let Some(protocol) = protocol(href) else {
            return false;
        };
        if protocol.to_ascii_lowercase().starts_with("http")
            && !HTTP_WITH_HOST.is_match(href)
        {
            return false;
        }
        if Url::parse(href).is_err() {
            return false;
        }
    }

    if href.starts_with('#') && !is_valid_fragment(href) {
        return false;
    }

    true
}

/// Whether a search query looks like a URL rather than a page title.
pub fn is_url_like(s: &str) -> bool {
    let s = s.trim();
    Url::parse(s).is_ok()
        || s.contains("www.")
        || (s.starts_with('#') && is_valid_fragment(s))
}

pub fn direct_entry_kind(s: &str) -> DirectEntryKind {
    if s.starts_with('#') {
        return DirectEntryKind::Internal;
    }
    match protocol(s).map(str::to_ascii_lowercase) {
        Some(p) if p.contains("mailto") => DirectEntryKind::Mailto,
        Some(p) if p.contains("tel") => DirectEntryKind::Tel,
        _ => DirectEntryKind::Url,
    }
}
