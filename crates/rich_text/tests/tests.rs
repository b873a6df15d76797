// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use rich_text::{
    get_format_boundary, get_format_boundary_in, same_instance, Format,
    FormatBoundary, FormatRef, RichTextValue, BOLD, LINK,
};
use speculoos::prelude::*;

fn link(url: &str) -> FormatRef {
    Format::new(LINK).with_attribute("url", url).into_ref()
}

#[test]
fn can_build_a_value_and_render_it() {
    let value = RichTextValue::from_text("Hello Matrix world")
        .apply_format(&Format::new(BOLD).into_ref(), 0, 5)
        .apply_format(&link("https://matrix.org"), 6, 12);

    assert_eq!(
        value.to_html(),
        "<strong>Hello</strong> <a href=\"https://matrix.org\">Matrix</a> world"
    );
}

#[test]
fn boundary_of_every_caret_in_a_link_is_the_whole_link() {
    let value = RichTextValue::from_text("before link after")
        .apply_format(&link("https://matrix.org"), 7, 11);

    for caret in 7..11 {
        let boundary =
            get_format_boundary(&value.with_selection(caret, caret), LINK);
        assert_that(&boundary)
            .is_equal_to(Some(FormatBoundary { start: 7, end: 11 }));
    }
}

#[test]
fn boundary_always_contains_the_selection() {
    let value = RichTextValue::from_text("abcdefgh")
        .apply_format(&link("https://matrix.org"), 1, 7);

    for start in 1..7 {
        for end in start..7 {
            let boundary =
                get_format_boundary_in(&value, LINK, start, end).unwrap();
            assert!(boundary.start <= start);
            assert!(end <= boundary.end);
            assert_eq!(boundary, FormatBoundary { start: 1, end: 7 });
        }
    }
}

#[test]
fn separately_built_links_stay_separate_after_editing() {
    let value = RichTextValue::from_text("ab")
        .apply_format(&link("https://matrix.org"), 0, 1)
        .apply_format(&link("https://matrix.org"), 1, 2);
    let value = value.with_selection(1, 1).insert_text("");

    assert_eq!(
        get_format_boundary_in(&value, LINK, 0, 0),
        Some(FormatBoundary { start: 0, end: 1 })
    );
    assert_eq!(
        get_format_boundary_in(&value, LINK, 1, 1),
        Some(FormatBoundary { start: 1, end: 2 })
    );
    assert!(!same_instance(&value.formats_at(0)[0], &value.formats_at(1)[0]));
    assert_eq!(
        value.to_html(),
        r#"<a href="https://matrix.org">a</a><a href="https://matrix.org">b</a>"#
    );
}

#[test]
fn operations_leave_their_input_untouched() {
    let original = RichTextValue::from_text("keep me").with_selection(0, 4);
    let before = original.clone();

    let _ = original.apply_format(&link("u"), 0, 4);
    let _ = original.remove_format(LINK, 0, 7);
    let _ = original.insert_text("x");
    let _ = original.replace_range(0, 4, &RichTextValue::from_text("drop"));

    assert_eq!(original, before);
}

#[test]
fn splitting_and_joining_around_a_link_keeps_the_instance() {
    let l = link("https://matrix.org");
    let value = RichTextValue::from_text("one two three").apply_format(&l, 4, 7);
    let (before, after) = value.split_at(4);
    let joined = RichTextValue::concat(&[before, after]);

    assert_that(&joined.text()).is_equal_to("one two three".to_owned());
    assert_eq!(
        get_format_boundary_in(&joined, LINK, 5, 5),
        Some(FormatBoundary { start: 4, end: 7 })
    );
    assert!(same_instance(joined.format_of_type_at(4, LINK).unwrap(), &l));
}
