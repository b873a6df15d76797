// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use once_cell::sync::Lazy;
use regex::Regex;
use rich_text::{get_format_boundary, RichTextValue, LINK};

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove HTML tags and decode entities, for showing markup as plain text.
pub fn strip_html(html: &str) -> String {
    let without_tags = TAG.replace_all(html, "");
    html_escape::decode_html_entities(&without_tags).into_owned()
}

/// The text a link editor should show for the current selection.
///
/// A range selection is used as is. For a caret, the text of the link the
/// caret is in is used, or nothing if it is not in a link. Markup is
/// stripped from the result; the value itself is untouched.
pub fn compute_selection_text(value: &RichTextValue) -> String {
    let text = if value.is_collapsed() {
        match get_format_boundary(value, LINK) {
            Some(boundary) => value.text_in(boundary.start, boundary.end),
            None => String::new(),
        }
    } else {
        value.selected_text()
    };
    strip_html(&text)
}
