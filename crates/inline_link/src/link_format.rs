// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use rich_text::{Format, FormatRef, LINK};

use crate::LinkValue;

const NEW_TAB_REL: &str = "noreferrer noopener";
const NOFOLLOW_REL: &str = "nofollow";

/// Build a new `core/link` format instance for `link`.
///
/// `url` is used as given; normalise it with
/// [`crate::url::prepend_http`] first.
pub fn create_link_format(link: &LinkValue) -> FormatRef {
    let url = link.url.clone().unwrap_or_default();
    let mut format = Format::new(LINK).with_attribute("url", url);
    if let Some(kind) = link.kind.as_deref().filter(|k| !k.is_empty()) {
        format = format.with_attribute("type", kind);
    }
    if let Some(id) = link.id.as_deref().filter(|id| !id.is_empty()) {
        format = format.with_attribute("id", id);
    }

    let mut rel = Vec::new();
    if link.opens_in_new_tab {
        format = format.with_attribute("target", "_blank");
        rel.push(NEW_TAB_REL);
    }
    if link.nofollow {
        rel.push(NOFOLLOW_REL);
    }
    if !rel.is_empty() {
        format = format.with_attribute("rel", rel.join(" "));
    }

    format.into_ref()
}

/// Read a [`LinkValue`] back from a link format's attributes.
pub fn link_value_from_format(
    format: &Format,
    text: Option<String>,
) -> LinkValue {
    LinkValue {
        url: format.attribute("url").map(str::to_owned),
        kind: format.attribute("type").map(str::to_owned),
        id: format.attribute("id").map(str::to_owned),
        opens_in_new_tab: format.attribute("target") == Some("_blank"),
        nofollow: format.attribute("rel").is_some_and(|rel| {
            rel.split_whitespace().any(|r| r == NOFOLLOW_REL)
        }),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_link_only_has_a_url() {
        let format = create_link_format(&LinkValue {
            url: Some("https://matrix.org".into()),
            ..LinkValue::default()
        });
        assert_eq!(format.format_type, LINK);
        assert_eq!(format.attributes.len(), 1);
        assert_eq!(format.attribute("url"), Some("https://matrix.org"));
    }

    #[test]
    fn new_tab_and_nofollow_set_target_and_rel() {
        let format = create_link_format(&LinkValue {
            url: Some("https://matrix.org".into()),
            kind: Some("page".into()),
            id: Some("42".into()),
            opens_in_new_tab: true,
            nofollow: true,
            text: None,
        });
        assert_eq!(format.attribute("target"), Some("_blank"));
        assert_eq!(format.attribute("rel"), Some("noreferrer noopener nofollow"));
        assert_eq!(format.attribute("type"), Some("page"));
        assert_eq!(format.attribute("id"), Some("42"));
    }

    #[test]
    fn link_value_round_trips_through_the_format() {
        let link = LinkValue {
            url: Some("https://matrix.org".into()),
            kind: Some("URL".into()),
            id: None,
            opens_in_new_tab: true,
            nofollow: true,
            text: Some("Matrix".into()),
        };
        let format = create_link_format(&link);
        assert_eq!(
            link_value_from_format(&format, Some("Matrix".into())),
            link
        );
    }

    #[test]
    fn each_call_builds_a_new_instance() {
        let link = LinkValue {
            url: Some("u".into()),
            ..LinkValue::default()
        };
        let a = create_link_format(&link);
        let b = create_link_format(&link);
        assert_eq!(a, b);
        assert!(!rich_text::same_instance(&a, &b));
    }
}
