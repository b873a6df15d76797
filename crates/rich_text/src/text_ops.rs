// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Text operations: insert, replace, slice, split and concat.

use crate::RichTextValue;

impl RichTextValue {
    /// Replace `start..end` with `to_insert`, keeping its formats, and
    /// collapse the caret after the inserted content.
    pub fn insert(
        &self,
        to_insert: &RichTextValue,
        start: usize,
        end: usize,
    ) -> Self {
        let (start, end) = self.clamp_range(start.min(end), start.max(end));
        let mut value = self.splice(start, end, to_insert);
        let caret = start + to_insert.len();
        value.start = caret;
        value.end = caret;
        value.active_formats.clear();

        value.assert_invariants();
        value
    }

    /// Insert unformatted text in place of the selection.
    pub fn insert_text(&self, text: &str) -> Self {
        self.insert(&RichTextValue::from_text(text), self.start, self.end)
    }

    /// Replace `start..end` with `replacement` and map the selection across
    /// the edit: offsets before the range stay, offsets after it shift by
    /// the change in length, offsets inside it move to the end of the
    /// replacement.
    pub fn replace_range(
        &self,
        start: usize,
        end: usize,
        replacement: &RichTextValue,
    ) -> Self {
        let (start, end) = self.clamp_range(start.min(end), start.max(end));
        let mut value = self.splice(start, end, replacement);
        let new_end = start + replacement.len();
        let map = |offset: usize| {
            if offset <= start {
                offset
            } else if offset >= end {
                offset - end + new_end
            } else {
                new_end
            }
        };
        value.start = map(self.start);
        value.end = map(self.end);

        value.assert_invariants();
        value
    }

    /// The sub-value between two offsets, with a caret at 0.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let (start, end) = self.clamp_range(start.min(end), start.max(end));
        let value = Self {
            text: self.text[start..end].to_vec(),
            formats: self.formats[start..end].to_vec(),
            start: 0,
            end: 0,
            active_formats: Vec::new(),
        };

        value.assert_invariants();
        value
    }

    /// Split into the values before and after `index`.
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let index = index.min(self.len());
        (self.slice(0, index), self.slice(index, self.len()))
    }

    /// Join values in order, with the caret at the end of the result.
    pub fn concat(values: &[RichTextValue]) -> Self {
        let mut value = Self::new();
        for v in values {
            value.text.extend_from_slice(&v.text);
            value.formats.extend(v.formats.iter().cloned());
        }
        value.start = value.len();
        value.end = value.len();

        value.assert_invariants();
        value
    }

    fn splice(&self, start: usize, end: usize, middle: &RichTextValue) -> Self {
        let mut value = self.clone();
        value
            .text
            .splice(start..end, middle.text.iter().copied());
        value
            .formats
            .splice(start..end, middle.formats.iter().cloned());
        value
    }
}
