// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::format::FormatRef;

/// A rich text value.
///
/// `text` and `formats` always have the same length: one list of format
/// instances per UTF-16 code unit. `start` and `end` are UTF-16 offsets with
/// `start <= end <= len`.
///
/// `PartialEq` is structural: formats are compared by content. Use
/// [`crate::same_instance`] when identity matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichTextValue {
    pub(crate) text: Vec<u16>,
    pub(crate) formats: Vec<Vec<FormatRef>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) active_formats: Vec<FormatRef>,
}

impl RichTextValue {
    /// An empty value with a caret at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unformatted value with the caret after the last character.
    pub fn from_text(text: &str) -> Self {
        let text: Vec<u16> = text.encode_utf16().collect();
        let len = text.len();
        Self {
            formats: vec![Vec::new(); len],
            text,
            start: len,
            end: len,
            active_formats: Vec::new(),
        }
    }

    /// Build a value from text and explicit per-code-unit formats.
    ///
    /// Missing format lists are padded with empty ones and extra lists are
    /// dropped, so the result is always aligned with the text.
    pub fn from_parts(text: &str, mut formats: Vec<Vec<FormatRef>>) -> Self {
        let text: Vec<u16> = text.encode_utf16().collect();
        let len = text.len();
        formats.resize_with(len, Vec::new);
        Self {
            text,
            formats,
            start: len,
            end: len,
            active_formats: Vec::new(),
        }
    }

    /// Return a copy with the given selection, ordered and clamped to the
    /// text length.
    pub fn with_selection(&self, start: usize, end: usize) -> Self {
        let mut value = self.clone();
        value.set_selection(start, end);
        value
    }

    pub fn with_active_formats(&self, active_formats: Vec<FormatRef>) -> Self {
        let mut value = self.clone();
        value.active_formats = active_formats;
        value
    }

    pub(crate) fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len();
        let (start, end) = (start.min(end), start.max(end));
        self.start = start.min(len);
        self.end = end.min(len);
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Whether the selection is a caret rather than a range.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn active_formats(&self) -> &[FormatRef] {
        &self.active_formats
    }

    pub fn formats(&self) -> &[Vec<FormatRef>] {
        &self.formats
    }

    /// The formats applied at `index`; empty past the end of the text.
    pub fn formats_at(&self, index: usize) -> &[FormatRef] {
        self.formats.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first format instance of `format_type` at `index`.
    pub fn format_of_type_at(
        &self,
        index: usize,
        format_type: &str,
    ) -> Option<&FormatRef> {
        self.formats_at(index)
            .iter()
            .find(|f| f.is_type(format_type))
    }

    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.text)
    }

    /// The text between two offsets, clamped to the text length.
    pub fn text_in(&self, start: usize, end: usize) -> String {
        let (start, end) = self.clamp_range(start, end);
        String::from_utf16_lossy(&self.text[start..end])
    }

    /// The selected text; empty for a caret.
    pub fn selected_text(&self) -> String {
        self.text_in(self.start, self.end)
    }

    pub(crate) fn clamp_range(
        &self,
        start: usize,
        end: usize,
    ) -> (usize, usize) {
        let len = self.len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{Format, LINK};
    use crate::RichTextValue;

    #[test]
    fn new_value_is_empty_with_caret_at_zero() {
        let value = RichTextValue::new();
        assert!(value.is_empty());
        assert_eq!(value.selection(), (0, 0));
        assert!(value.is_collapsed());
    }

    #[test]
    fn from_text_places_caret_at_end() {
        let value = RichTextValue::from_text("hello");
        assert_eq!(value.len(), 5);
        assert_eq!(value.selection(), (5, 5));
        assert_eq!(value.formats().len(), 5);
    }

    #[test]
    fn lengths_are_utf16_code_units() {
        // \u{1F4A9} is 💩, 2 UTF-16 code units
        let value = RichTextValue::from_text("a\u{1F4A9}b");
        assert_eq!(value.len(), 4);
        assert_eq!(value.text_in(1, 3), "\u{1F4A9}");
    }

    #[test]
    fn selection_is_ordered_and_clamped() {
        let value = RichTextValue::from_text("abc").with_selection(9, 1);
        assert_eq!(value.selection(), (1, 3));
    }

    #[test]
    fn from_parts_pads_missing_format_lists() {
        let link = Format::new(LINK).into_ref();
        let value = RichTextValue::from_parts("abc", vec![vec![link]]);
        assert_eq!(value.formats().len(), 3);
        assert!(value.format_of_type_at(0, LINK).is_some());
        assert!(value.format_of_type_at(1, LINK).is_none());
        assert!(value.formats_at(10).is_empty());
    }

    #[test]
    fn text_in_clamps_out_of_range_offsets() {
        let value = RichTextValue::from_text("hello");
        assert_eq!(value.text_in(3, 99), "lo");
        assert_eq!(value.text_in(7, 2), "");
        assert_eq!(value.with_selection(1, 4).selected_text(), "ell");
    }
}
