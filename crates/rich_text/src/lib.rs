// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Rich text values: a run of UTF-16 code units, one list of format
//! instances per code unit, and a selection.
//!
//! Every operation in this crate is pure. It borrows its input and returns
//! a new [`RichTextValue`], so callers can keep the previous value around
//! and compare.
//!
//! Format instances are shared [`FormatRef`] handles. Two characters belong
//! to the same run of a format only when they hold the *same* handle, which
//! is what [`get_format_boundary`] walks.

mod boundary;
mod format;
mod formatting;
mod html;
mod invariants;
mod text_ops;
mod value;

pub use crate::boundary::{
    get_format_boundary, get_format_boundary_in, FormatBoundary,
};
pub use crate::format::{
    same_instance, Format, FormatRef, KnownFormat, BOLD, CODE, ITALIC, LINK,
    STRIKETHROUGH, UNDERLINE,
};
pub use crate::value::RichTextValue;
