// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::BTreeMap;
use std::sync::Arc;

use strum_macros::{AsRefStr, EnumIter, EnumString};

pub const BOLD: &str = "core/bold";
pub const ITALIC: &str = "core/italic";
pub const STRIKETHROUGH: &str = "core/strikethrough";
pub const UNDERLINE: &str = "core/underline";
pub const CODE: &str = "core/code";
pub const LINK: &str = "core/link";

/// A shared handle to one format instance.
///
/// Cloning the handle keeps the instance; building a new [`Format`] makes a
/// new one, even if its type and attributes match an existing instance.
pub type FormatRef = Arc<Format>;

/// A typed annotation with string attributes, e.g.
/// `core/link { url: "https://matrix.org" }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    pub format_type: String,
    pub attributes: BTreeMap<String, String>,
}

impl Format {
    pub fn new(format_type: impl Into<String>) -> Self {
        Self {
            format_type: format_type.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_type(&self, format_type: &str) -> bool {
        self.format_type == format_type
    }

    /// Wrap this format in a fresh instance handle.
    pub fn into_ref(self) -> FormatRef {
        Arc::new(self)
    }

    pub fn known(&self) -> Option<KnownFormat> {
        self.format_type.parse().ok()
    }
}

/// Whether two handles point at the same format instance.
pub fn same_instance(a: &FormatRef, b: &FormatRef) -> bool {
    Arc::ptr_eq(a, b)
}

/// Format types with an HTML rendering.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString,
)]
pub enum KnownFormat {
    #[strum(serialize = "core/bold")]
    Bold,
    #[strum(serialize = "core/italic")]
    Italic,
    #[strum(serialize = "core/strikethrough")]
    StrikeThrough,
    #[strum(serialize = "core/underline")]
    Underline,
    #[strum(serialize = "core/code")]
    InlineCode,
    #[strum(serialize = "core/link")]
    Link,
}

impl KnownFormat {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bold => "strong",
            Self::Italic => "em",
            Self::StrikeThrough => "del",
            Self::Underline => "u",
            Self::InlineCode => "code",
            Self::Link => "a",
        }
    }
}
