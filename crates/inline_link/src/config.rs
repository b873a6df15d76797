// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use strum_macros::{AsRefStr, EnumIter};

/// A toggle shown next to the link URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum LinkSetting {
    #[strum(serialize = "opensInNewTab")]
    OpensInNewTab,
    #[strum(serialize = "nofollow")]
    Nofollow,
}

impl LinkSetting {
    pub fn title(&self) -> &'static str {
        match self {
            Self::OpensInNewTab => "Open in new tab",
            Self::Nofollow => "Mark as nofollow",
        }
    }
}

/// Options for a link editing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkControlSettings {
    /// The toggles the user can change.
    pub settings: Vec<LinkSetting>,
    /// Offer a URL typed in the search box as a result.
    pub allow_direct_entry: bool,
    /// Put a direct entry above search results for queries without spaces.
    pub show_url_suggestion: bool,
    /// Offer to create a new page named after the query.
    pub allow_creation: bool,
    pub show_initial_suggestions: bool,
    pub suggestions_per_page: usize,
    pub initial_suggestions_per_page: usize,
}

impl Default for LinkControlSettings {
    fn default() -> Self {
        Self {
            settings: vec![LinkSetting::OpensInNewTab, LinkSetting::Nofollow],
            allow_direct_entry: true,
            show_url_suggestion: true,
            allow_creation: false,
            show_initial_suggestions: false,
            suggestions_per_page: 20,
            initial_suggestions_per_page: 3,
        }
    }
}

impl LinkControlSettings {
    pub fn with_settings(mut self, settings: Vec<LinkSetting>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_direct_entry(mut self, allow: bool) -> Self {
        self.allow_direct_entry = allow;
        self
    }

    pub fn with_url_suggestion(mut self, show: bool) -> Self {
        self.show_url_suggestion = show;
        self
    }

    pub fn with_creation(mut self, allow: bool) -> Self {
        self.allow_creation = allow;
        self
    }

    pub fn with_initial_suggestions(mut self, show: bool) -> Self {
        self.show_initial_suggestions = show;
        self
    }

    pub fn with_suggestions_per_page(mut self, per_page: usize) -> Self {
        self.suggestions_per_page = per_page;
        self
    }

    pub fn has_setting(&self, setting: LinkSetting) -> bool {
        self.settings.contains(&setting)
    }
}
