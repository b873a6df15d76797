// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inserting, editing and removing links in a [`rich_text::RichTextValue`].
//!
//! [`InlineLinkController`] holds the state of one link editing session:
//! whether the user is viewing or editing the link, settings toggled before
//! a URL exists, and the latest suggestion results. Every user action
//! returns a [`LinkUpdate`] telling the host what to do with the rich text
//! value and what to announce.

mod announce;
mod config;
mod controller;
mod error;
mod link_format;
mod link_value;
mod selection_text;
mod suggestions;
pub mod url;

pub use crate::announce::{Announcement, Announcer, LogAnnouncer, Politeness};
pub use crate::config::{LinkControlSettings, LinkSetting};
pub use crate::controller::{
    EditMode, InlineLinkController, LinkUpdate, ValueUpdate,
};
pub use crate::error::CreatePageError;
pub use crate::link_format::{create_link_format, link_value_from_format};
pub use crate::link_value::{LinkValue, LinkValueUpdate};
pub use crate::selection_text::{compute_selection_text, strip_html};
pub use crate::suggestions::{
    build_results, LinkSuggestion, NoPageCreator, PageCreator, SearchOptions,
    SearchRequest, SuggestionKind, SuggestionSearch, SuggestionSource,
};
