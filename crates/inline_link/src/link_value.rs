// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

/// The editable state of a link: where it points, how it opens, and the
/// text it is displayed with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkValue {
    pub url: Option<String>,
    /// The kind of thing linked to, e.g. `"page"` or `"URL"`.
    pub kind: Option<String>,
    pub id: Option<String>,
    pub opens_in_new_tab: bool,
    pub nofollow: bool,
    pub text: Option<String>,
}

impl LinkValue {
    /// The URL, if it is set and not blank.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn has_url(&self) -> bool {
        self.url().is_some()
    }
}

/// A partial [`LinkValue`]: only the fields that are `Some` change.
///
/// Also used to hold settings toggled before the link has a URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkValueUpdate {
    pub url: Option<String>,
    pub kind: Option<String>,
    pub id: Option<String>,
    pub opens_in_new_tab: Option<bool>,
    pub nofollow: Option<bool>,
    pub text: Option<String>,
}

impl LinkValueUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn opens_in_new_tab(mut self, opens_in_new_tab: bool) -> Self {
        self.opens_in_new_tab = Some(opens_in_new_tab);
        self
    }

    pub fn nofollow(mut self, nofollow: bool) -> Self {
        self.nofollow = Some(nofollow);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay this update on `base`; fields set here win.
    pub fn merged_over(&self, base: &LinkValueUpdate) -> LinkValueUpdate {
        LinkValueUpdate {
            url: self.url.clone().or_else(|| base.url.clone()),
            kind: self.kind.clone().or_else(|| base.kind.clone()),
            id: self.id.clone().or_else(|| base.id.clone()),
            opens_in_new_tab: self.opens_in_new_tab.or(base.opens_in_new_tab),
            nofollow: self.nofollow.or(base.nofollow),
            text: self.text.clone().or_else(|| base.text.clone()),
        }
    }

    /// Produce a full value by applying this update to `base`.
    pub fn apply_to(&self, base: &LinkValue) -> LinkValue {
        LinkValue {
            url: self.url.clone().or_else(|| base.url.clone()),
            kind: self.kind.clone().or_else(|| base.kind.clone()),
            id: self.id.clone().or_else(|| base.id.clone()),
            opens_in_new_tab: self
                .opens_in_new_tab
                .unwrap_or(base.opens_in_new_tab),
            nofollow: self.nofollow.unwrap_or(base.nofollow),
            text: self.text.clone().or_else(|| base.text.clone()),
        }
    }
}
