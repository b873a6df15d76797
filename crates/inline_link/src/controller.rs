// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The link editing session.
//!
//! ## Modes
//!
//! | Mode      | Meaning                                   |
//! |-----------|-------------------------------------------|
//! | `Viewing` | a committed link is shown as a preview    |
//! | `Editing` | the URL and text inputs are shown         |
//!
//! The host forces `Editing` with [`InlineLinkController::set_adding_link`].
//! Clicking "edit" enters it; committing a link (other than a settings
//! toggle), removing it, or cancelling leaves it.

use rich_text::{
    get_format_boundary, FormatBoundary, FormatRef, RichTextValue, LINK,
};
use strum_macros::Display;

use crate::url::{is_valid_href, prepend_http};
use crate::{
    create_link_format, link_value_from_format, strip_html, Announcement,
    Announcer, LinkControlSettings, LinkSetting, LinkSuggestion, LinkValue,
    LinkValueUpdate, PageCreator, SearchRequest, SuggestionKind,
    SuggestionSearch, SuggestionSource,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum EditMode {
    Viewing,
    Editing,
}

/// What the host should do with its rich text value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueUpdate {
    Keep,
    Replace(RichTextValue),
}

/// The result of a user action on the link editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkUpdate {
    pub value_update: ValueUpdate,
    /// The user removed the link.
    pub removed: bool,
    pub announcement: Option<Announcement>,
    pub mode: EditMode,
}

impl LinkUpdate {
    fn keep(mode: EditMode) -> Self {
        Self {
            value_update: ValueUpdate::Keep,
            removed: false,
            announcement: None,
            mode,
        }
    }

    /// The new value, if the action changed it.
    pub fn new_value(&self) -> Option<&RichTextValue> {
        match &self.value_update {
            ValueUpdate::Keep => None,
            ValueUpdate::Replace(value) => Some(value),
        }
    }

    /// Speak the announcement, if there is one.
    pub fn announce(&self, announcer: &mut impl Announcer) {
        if let Some(announcement) = self.announcement {
            announcer.speak(announcement.message(), announcement.politeness());
        }
    }
}

/// State of one link editing session over a rich text value.
pub struct InlineLinkController {
    settings: LinkControlSettings,
    value: RichTextValue,
    /// A link is active at the selection.
    is_active: bool,
    /// The link instance being edited.
    active_link: Option<FormatRef>,
    adding_link: bool,
    is_editing: bool,
    /// Settings toggled before the link had a URL.
    pending_settings: Option<LinkValueUpdate>,
    search: SuggestionSearch,
    error_message: Option<String>,
}

impl InlineLinkController {
    pub fn new(value: RichTextValue, settings: LinkControlSettings) -> Self {
        let mut controller = Self {
            settings,
            value,
            is_active: false,
            active_link: None,
            adding_link: false,
            is_editing: false,
            pending_settings: None,
            search: SuggestionSearch::default(),
            error_message: None,
        };
        controller.sync_active_link();
        controller.is_editing = !controller.link_value().has_url();
        controller
    }

    pub fn settings(&self) -> &LinkControlSettings {
        &self.settings
    }

    pub fn value(&self) -> &RichTextValue {
        &self.value
    }

    /// Take the host's latest value, e.g. after the selection moved.
    pub fn set_value(&mut self, value: RichTextValue) {
        self.value = value;
        self.sync_active_link();
    }

    /// Override whether a link counts as active at the selection.
    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
        if !is_active {
            self.active_link = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Force (or stop forcing) the editing mode.
    pub fn set_adding_link(&mut self, adding_link: bool) {
        if self.adding_link != adding_link {
            log::debug!("Adding link: {adding_link}");
        }
        self.adding_link = adding_link;
        self.is_editing = adding_link;
    }

    pub fn is_adding_link(&self) -> bool {
        self.adding_link
    }

    pub fn mode(&self) -> EditMode {
        if self.adding_link || self.is_editing {
            EditMode::Editing
        } else {
            EditMode::Viewing
        }
    }

    /// The user clicked "edit" on the link preview.
    pub fn start_editing(&mut self) -> EditMode {
        self.is_editing = true;
        log::debug!("Editing link");
        self.mode()
    }

    /// The user dismissed the editor without committing.
    pub fn cancel(&mut self) -> LinkUpdate {
        self.pending_settings = None;
        self.search.clear();
        self.error_message = None;
        self.is_editing = false;
        self.adding_link = false;
        log::debug!("Link editing cancelled");
        LinkUpdate::keep(self.mode())
    }

    pub fn pending_settings(&self) -> Option<&LinkValueUpdate> {
        self.pending_settings.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The text of the link being edited, or of the selection. Markup is
    /// stripped.
    pub fn selection_text(&self) -> String {
        strip_html(&self.raw_selection_text())
    }

    /// The text of the link being edited, or of the selection, exactly as
    /// it is in the value.
    fn raw_selection_text(&self) -> String {
        let range = self.edit_range();
        self.value.text_in(range.start, range.end)
    }

    /// The link as shown in the editor, including pending settings.
    pub fn link_value(&self) -> LinkValue {
        let text = Some(self.selection_text()).filter(|t| !t.is_empty());
        let base = match &self.active_link {
            Some(link) => link_value_from_format(link, text),
            None => LinkValue {
                text,
                ..LinkValue::default()
            },
        };
        match &self.pending_settings {
            Some(pending) => pending.apply_to(&base),
            None => base,
        }
    }

    /// Apply a change made in the link editor.
    ///
    /// A settings toggle on a link that has no URL yet is held back as
    /// pending settings. Anything else is committed to the value: as new
    /// linked text at a caret outside any link, otherwise by re-linking or
    /// replacing the text of the link or selection.
    pub fn on_change_link(&mut self, update: LinkValueUpdate) -> LinkUpdate {
        let current = self.link_value();
        let merged = match &self.pending_settings {
            Some(pending) => update.merged_over(pending),
            None => update,
        };
        let next = merged.apply_to(&current);

        if is_setting_toggle_for_new_link(&current, &next)
            || lacks_url_for_new_link(&next, self.active_link.as_ref())
        {
            log::debug!("Holding link settings until a URL is set");
            self.pending_settings = Some(merged);
            return LinkUpdate::keep(self.mode());
        }

        let toggled = did_toggle_setting(&current, &next);
        let was_active = self.is_active;
        let url = prepend_http(next.url.as_deref().unwrap_or_default());
        let format = create_link_format(&LinkValue {
            url: Some(url.clone()),
            ..next.clone()
        });
        // Unless the user typed new text, the link keeps its text as stored,
        // not the stripped text the editor shows.
        let text = merged
            .text
            .clone()
            .unwrap_or_else(|| self.raw_selection_text());
        let text = Some(text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| url.clone());

        let new_value = if self.value.is_collapsed() && !was_active {
            self.insert_link(&text, &format)
        } else {
            self.replace_link(&text, &format)
        };

        log::debug!(
            "Committed link to {url:?} ({})",
            if was_active { "edit" } else { "insert" }
        );

        self.value = new_value.clone();
        self.active_link = Some(format);
        self.is_active = true;
        self.pending_settings = None;
        self.error_message = None;
        if !toggled {
            self.is_editing = false;
            self.adding_link = false;
            self.search.clear();
        }

        let announcement = if !is_valid_href(&url) {
            Announcement::InsertedWithWarning
        } else if was_active {
            Announcement::Edited
        } else {
            Announcement::Inserted
        };

        LinkUpdate {
            value_update: ValueUpdate::Replace(new_value),
            removed: false,
            announcement: Some(announcement),
            mode: self.mode(),
        }
    }

    /// Flip one of the link settings.
    pub fn toggle_setting(
        &mut self,
        setting: LinkSetting,
        enabled: bool,
    ) -> LinkUpdate {
        if !self.settings.has_setting(setting) {
            return LinkUpdate::keep(self.mode());
        }
        let update = match setting {
            LinkSetting::OpensInNewTab => {
                LinkValueUpdate::new().opens_in_new_tab(enabled)
            }
            LinkSetting::Nofollow => LinkValueUpdate::new().nofollow(enabled),
        };
        self.on_change_link(update)
    }

    /// Remove the link at the selection. Does nothing to the text if there
    /// is no link, but still reports the removal.
    pub fn remove_link(&mut self) -> LinkUpdate {
        let range = self.edit_range();
        let new_value = self.value.remove_format(LINK, range.start, range.end);

        self.value = new_value.clone();
        self.active_link = None;
        self.is_active = false;
        self.pending_settings = None;
        self.is_editing = false;
        self.adding_link = false;
        self.search.clear();
        log::debug!("Removed link over {}..{}", range.start, range.end);

        LinkUpdate {
            value_update: ValueUpdate::Replace(new_value),
            removed: true,
            announcement: Some(Announcement::Removed),
            mode: self.mode(),
        }
    }

    /// Start a suggestion search. `None` means the results are already
    /// available and nothing needs fetching.
    pub fn search(&mut self, query: &str) -> Option<SearchRequest> {
        self.search.begin(query, &self.settings)
    }

    pub fn receive_suggestions(
        &mut self,
        request: &SearchRequest,
        fetched: Vec<LinkSuggestion>,
    ) {
        self.search.receive(request, fetched, &self.settings);
    }

    /// Search and fetch in one go.
    pub fn search_with(
        &mut self,
        source: &impl SuggestionSource,
        query: &str,
    ) -> &[LinkSuggestion] {
        if let Some(request) = self.search(query) {
            let fetched = source.fetch(&request.query, &request.options);
            self.receive_suggestions(&request, fetched);
        }
        self.suggestions()
    }

    pub fn suggestions(&self) -> &[LinkSuggestion] {
        self.search.results()
    }

    /// Link to a suggestion, creating a page first if it is the
    /// create-page suggestion. A failed page creation keeps the editor
    /// open and stores the error message.
    pub fn select_suggestion(
        &mut self,
        suggestion: &LinkSuggestion,
        creator: &mut impl PageCreator,
    ) -> LinkUpdate {
        let (update, title) = match &suggestion.kind {
            SuggestionKind::CreatePage => {
                match creator.create_page(&suggestion.title) {
                    Ok(page) => {
                        let title = page
                            .text
                            .clone()
                            .unwrap_or_else(|| suggestion.title.clone());
                        (target_of(&page), Some(title))
                    }
                    Err(e) => {
                        log::warn!("Failed to create page: {e}");
                        self.error_message = Some(e.to_string());
                        self.is_editing = true;
                        return LinkUpdate::keep(self.mode());
                    }
                }
            }
            SuggestionKind::Entity(_) => {
                (suggestion.to_update(), Some(suggestion.title.clone()))
            }
            SuggestionKind::Direct(_) => (suggestion.to_update(), None),
        };

        let update = match title {
            Some(title) if self.raw_selection_text().is_empty() => {
                update.text(title)
            }
            _ => update,
        };
        self.on_change_link(update)
    }

    fn sync_active_link(&mut self) {
        self.active_link = self.value.active_format(LINK);
        self.is_active = self.active_link.is_some();
    }

    /// The range a link change applies to: the selection, else the link
    /// under the caret, else the link being edited, else the caret.
    fn edit_range(&self) -> FormatBoundary {
        let (start, end) = self.value.selection();
        if start != end {
            return FormatBoundary { start, end };
        }
        get_format_boundary(&self.value, LINK)
            .or_else(|| {
                self.active_link
                    .as_ref()
                    .and_then(|link| self.value.find_instance_run(link))
            })
            .unwrap_or(FormatBoundary { start, end })
    }

    fn insert_link(&self, text: &str, format: &FormatRef) -> RichTextValue {
        let linked = RichTextValue::from_text(text);
        let linked = linked.apply_format(format, 0, linked.len());
        self.value
            .insert(&linked, self.value.start(), self.value.end())
            .with_active_formats(Vec::new())
    }

    /// Re-link the edit range, replacing its text when `text` differs.
    /// Formats other than links that cover the whole old range carry over
    /// to the new text.
    fn replace_link(&self, text: &str, format: &FormatRef) -> RichTextValue {
        let range = self.edit_range();
        let current_text = self.value.text_in(range.start, range.end);

        let (replaced, new_len) = if text == current_text {
            (
                self.value.apply_format(format, range.start, range.end),
                range.len(),
            )
        } else {
            let kept = if range.is_empty() {
                Vec::new()
            } else {
                self.value
                    .with_selection(range.start, range.end)
                    .current_formats()
            };
            let mut replacement = RichTextValue::from_text(text);
            let len = replacement.len();
            for f in kept.iter().filter(|f| !f.is_type(LINK)) {
                replacement = replacement.apply_format(f, 0, len);
            }
            replacement = replacement.apply_format(format, 0, len);
            (
                self.value.replace_range(range.start, range.end, &replacement),
                len,
            )
        };

        let caret = range.start + new_len;
        replaced
            .with_selection(caret, caret)
            .with_active_formats(Vec::new())
    }
}

fn url_changed(current: &LinkValue, next: &LinkValue) -> bool {
    current.url() != next.url()
}

fn settings_changed(current: &LinkValue, next: &LinkValue) -> bool {
    current.opens_in_new_tab != next.opens_in_new_tab
        || current.nofollow != next.nofollow
}

/// A toggle flipped while the URL stayed put. A change to both counts as a
/// commit.
fn did_toggle_setting(current: &LinkValue, next: &LinkValue) -> bool {
    settings_changed(current, next) && !url_changed(current, next)
}

fn is_setting_toggle_for_new_link(
    current: &LinkValue,
    next: &LinkValue,
) -> bool {
    did_toggle_setting(current, next) && !next.has_url()
}

/// Without a URL and without an existing link there is nothing to commit.
fn lacks_url_for_new_link(
    next: &LinkValue,
    active_link: Option<&FormatRef>,
) -> bool {
    !next.has_url() && active_link.is_none()
}

/// The parts of a link value that say where it points.
fn target_of(link: &LinkValue) -> LinkValueUpdate {
    LinkValueUpdate {
        url: link.url.clone(),
        kind: link.kind.clone(),
        id: link.id.clone(),
        ..LinkValueUpdate::default()
    }
}
