// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! HTML rendering of a [`RichTextValue`].
//!
//! Links are always the outermost element of a run; other known formats
//! nest inside in a fixed order. Each distinct link instance gets its own
//! `<a>`, so two adjacent equal links render as two anchors.

use strum::IntoEnumIterator;

use crate::format::{same_instance, FormatRef, KnownFormat};
use crate::RichTextValue;

#[derive(Clone)]
enum Open {
    Link(FormatRef),
    Tag(KnownFormat),
}

impl Open {
    fn matches(&self, other: &Open) -> bool {
        match (self, other) {
            (Open::Link(a), Open::Link(b)) => same_instance(a, b),
            (Open::Tag(a), Open::Tag(b)) => a == b,
            _ => false,
        }
    }

    fn open_tag(&self) -> String {
        match self {
            Open::Tag(known) => format!("<{}>", known.tag()),
            Open::Link(link) => {
                let mut tag = String::from("<a");
                let attributes = [
                    ("url", "href"),
                    ("target", "target"),
                    ("rel", "rel"),
                    ("type", "data-type"),
                    ("id", "data-id"),
                ];
                for (key, name) in attributes {
                    if let Some(value) = link.attribute(key) {
                        tag.push_str(&format!(
                            " {name}=\"{}\"",
                            html_escape::encode_double_quoted_attribute(value)
                        ));
                    }
                }
                tag.push('>');
                tag
            }
        }
    }

    fn close_tag(&self) -> String {
        match self {
            Open::Tag(known) => format!("</{}>", known.tag()),
            Open::Link(_) => String::from("</a>"),
        }
    }
}

impl RichTextValue {
    /// Render the text and its known formats as HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let mut open: Vec<Open> = Vec::new();
        let mut run_start = 0;

        while run_start < self.len() {
            let formats = &self.formats[run_start];
            let mut run_end = run_start + 1;
            while run_end < self.len()
                && same_instances(&self.formats[run_end], formats)
            {
                run_end += 1;
            }

            let desired = desired_elements(formats);
            let common = open
                .iter()
                .zip(desired.iter())
                .take_while(|(a, b)| a.matches(b))
                .count();
            while open.len() > common {
                if let Some(element) = open.pop() {
                    html.push_str(&element.close_tag());
                }
            }
            for element in &desired[common..] {
                html.push_str(&element.open_tag());
                open.push(element.clone());
            }

            html.push_str(&html_escape::encode_text(
                &self.text_in(run_start, run_end),
            ));
            run_start = run_end;
        }

        while let Some(element) = open.pop() {
            html.push_str(&element.close_tag());
        }
        html
    }
}

fn same_instances(a: &[FormatRef], b: &[FormatRef]) -> bool {
    a.len() == b.len()
        && a.iter().all(|f| b.iter().any(|g| same_instance(f, g)))
}

fn desired_elements(formats: &[FormatRef]) -> Vec<Open> {
    let mut desired = Vec::new();
    if let Some(link) = formats
        .iter()
        .find(|f| f.known() == Some(KnownFormat::Link))
    {
        desired.push(Open::Link(link.clone()));
    }
    for known in KnownFormat::iter().filter(|k| *k != KnownFormat::Link) {
        if formats.iter().any(|f| f.known() == Some(known)) {
            desired.push(Open::Tag(known));
        }
    }
    desired
}
