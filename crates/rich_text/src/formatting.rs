// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Applying, removing and querying formats.

use crate::boundary::get_format_boundary_in;
use crate::format::{same_instance, FormatRef};
use crate::RichTextValue;

impl RichTextValue {
    /// Apply one format instance over `start..end`.
    ///
    /// Any other instance of the same type in the range is replaced, so
    /// the whole range ends up sharing `format`. On a caret, an existing
    /// run of the same type under the caret is replaced instead; with no
    /// such run the format becomes active for the next typed text.
    pub fn apply_format(
        &self,
        format: &FormatRef,
        start: usize,
        end: usize,
    ) -> Self {
        let (start, end) = self.clamp_range(start.min(end), start.max(end));
        let mut value = self.clone();

        let range = if start == end {
            get_format_boundary_in(self, &format.format_type, start, end)
                .map(|boundary| (boundary.start, boundary.end))
        } else {
            Some((start, end))
        };

        if let Some((from, to)) = range {
            for formats in &mut value.formats[from..to] {
                set_format(formats, format);
            }
        }

        value
            .active_formats
            .retain(|f| !f.is_type(&format.format_type));
        value.active_formats.push(format.clone());

        value.assert_invariants();
        value
    }

    /// Remove every instance of `format_type` over `start..end`.
    ///
    /// On a caret, the run of the instance under the caret is removed. With
    /// nothing to remove the text and formats are returned unchanged.
    pub fn remove_format(
        &self,
        format_type: &str,
        start: usize,
        end: usize,
    ) -> Self {
        let (start, end) = self.clamp_range(start.min(end), start.max(end));
        let mut value = self.clone();

        let range = if start == end {
            get_format_boundary_in(self, format_type, start, end)
                .map(|boundary| (boundary.start, boundary.end))
        } else {
            Some((start, end))
        };

        if let Some((from, to)) = range {
            for formats in &mut value.formats[from..to] {
                formats.retain(|f| !f.is_type(format_type));
            }
        }
        value.active_formats.retain(|f| !f.is_type(format_type));

        value.assert_invariants();
        value
    }

    /// The formats in effect at the selection.
    ///
    /// On a caret, explicitly active formats come first; otherwise the
    /// shorter of the format lists on either side of the caret is used, so
    /// a caret at the very edge of a run is outside it. For a range, the
    /// instances present on every code unit of the range.
    pub fn current_formats(&self) -> Vec<FormatRef> {
        if self.is_collapsed() {
            if !self.active_formats.is_empty() {
                return self.active_formats.clone();
            }
            let before = match self.start {
                0 => &[][..],
                start => self.formats_at(start - 1),
            };
            let after = self.formats_at(self.start);
            let shorter = if before.len() < after.len() {
                before
            } else {
                after
            };
            return shorter.to_vec();
        }

        let mut common = self.formats_at(self.start).to_vec();
        for formats in &self.formats[self.start + 1..self.end] {
            common.retain(|f| formats.iter().any(|g| same_instance(f, g)));
        }
        common
    }

    /// The format of `format_type` in effect at the selection, if any.
    pub fn active_format(&self, format_type: &str) -> Option<FormatRef> {
        self.current_formats()
            .into_iter()
            .find(|f| f.is_type(format_type))
    }
}

/// Put `format` in `formats`, taking the place of an instance of the same
/// type if there is one.
fn set_format(formats: &mut Vec<FormatRef>, format: &FormatRef) {
    match formats
        .iter()
        .position(|f| f.format_type == format.format_type)
    {
        Some(i) => formats[i] = format.clone(),
        None => formats.push(format.clone()),
    }
}
