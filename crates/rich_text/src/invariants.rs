// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::RichTextValue;

impl RichTextValue {
    /// Panic if the value is malformed. Compiled in for tests and with the
    /// `assert-invariants` feature; otherwise a no-op.
    #[cfg(any(test, feature = "assert-invariants"))]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(
            self.text.len(),
            self.formats.len(),
            "every code unit needs a format list"
        );
        assert!(self.start <= self.end, "selection start after end");
        assert!(self.end <= self.text.len(), "selection past end of text");
        for (index, formats) in self.formats.iter().enumerate() {
            for (i, format) in formats.iter().enumerate() {
                assert!(
                    !formats[..i]
                        .iter()
                        .any(|f| f.format_type == format.format_type),
                    "two {} formats at {index}",
                    format.format_type
                );
            }
        }
    }

    #[cfg(not(any(test, feature = "assert-invariants")))]
    pub(crate) fn assert_invariants(&self) {}
}
