// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Locating the run of characters that share one format instance.

use crate::format::{same_instance, FormatRef};
use crate::RichTextValue;

/// A `[start, end)` range of UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatBoundary {
    pub start: usize,
    pub end: usize,
}

impl FormatBoundary {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the run of `format_type` around the value's own selection.
///
/// See [`get_format_boundary_in`].
pub fn get_format_boundary(
    value: &RichTextValue,
    format_type: &str,
) -> Option<FormatBoundary> {
    get_format_boundary_in(value, format_type, value.start, value.end)
}

/// Find the maximal run around `start..end` in which every code unit holds
/// the same instance of `format_type` as the code unit at `start`.
///
/// Returns `None` when there is no such format at `start`. Characters that
/// carry an equal but separately built format are not part of the run.
/// `start..end` is first clamped to the value; the result always contains
/// the clamped range.
pub fn get_format_boundary_in(
    value: &RichTextValue,
    format_type: &str,
    start: usize,
    end: usize,
) -> Option<FormatBoundary> {
    let (start, end) = value.clamp_range(start.min(end), start.max(end));
    let target = value.format_of_type_at(start, format_type)?;

    let mut boundary_start = start;
    while boundary_start > 0
        && holds_instance(value, boundary_start - 1, target)
    {
        boundary_start -= 1;
    }

    // The code unit at `start` is known to hold the target.
    let mut boundary_end = end.max(start + 1);
    while holds_instance(value, boundary_end, target) {
        boundary_end += 1;
    }

    log::trace!(
        "{format_type} boundary around {start}..{end}: \
         {boundary_start}..{boundary_end}"
    );

    Some(FormatBoundary {
        start: boundary_start,
        end: boundary_end,
    })
}

impl RichTextValue {
    /// The run of a specific format instance, starting from its first
    /// occurrence in the value.
    pub fn find_instance_run(
        &self,
        format: &FormatRef,
    ) -> Option<FormatBoundary> {
        let first =
            (0..self.len()).find(|&i| holds_instance(self, i, format))?;
        get_format_boundary_in(self, &format.format_type, first, first)
    }
}

fn holds_instance(
    value: &RichTextValue,
    index: usize,
    target: &FormatRef,
) -> bool {
    value
        .formats_at(index)
        .iter()
        .any(|format| same_instance(format, target))
}
