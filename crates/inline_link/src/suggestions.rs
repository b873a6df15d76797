// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Link suggestions: searching for link targets and creating new pages.
//!
//! Searches are started with [`SuggestionSearch::begin`] and finished when
//! the host passes the fetched results to [`SuggestionSearch::receive`].
//! There is no cancellation: a late response for an older query simply
//! replaces the current results.

use crate::url::{direct_entry_kind, is_url_like, DirectEntryKind};
use crate::{CreatePageError, LinkControlSettings, LinkValue, LinkValueUpdate};

/// What a suggestion links to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuggestionKind {
    /// The query itself, used as a URL.
    Direct(DirectEntryKind),
    /// A search result, e.g. `"page"`, `"post"` or `"category"`.
    Entity(String),
    /// Create a new page titled after the query.
    CreatePage,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Direct(kind) => kind.as_ref(),
            Self::Entity(kind) => kind,
            Self::CreatePage => "__CREATE__",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkSuggestion {
    pub id: String,
    pub title: String,
    pub url: String,
    pub kind: SuggestionKind,
}

impl LinkSuggestion {
    pub fn entity(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            kind: SuggestionKind::Entity(kind.into()),
        }
    }

    fn direct(query: &str) -> Self {
        Self {
            id: query.to_owned(),
            title: query.to_owned(),
            url: query.to_owned(),
            kind: SuggestionKind::Direct(direct_entry_kind(query)),
        }
    }

    fn create_page(query: &str) -> Self {
        Self {
            id: query.to_owned(),
            title: query.to_owned(),
            url: String::new(),
            kind: SuggestionKind::CreatePage,
        }
    }

    /// The link change selecting this suggestion makes.
    pub fn to_update(&self) -> LinkValueUpdate {
        let update = LinkValueUpdate::new()
            .url(self.url.clone())
            .kind(self.kind.as_str());
        match self.kind {
            SuggestionKind::Entity(_) => update.id(self.id.clone()),
            _ => update,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub per_page: usize,
    pub is_initial_suggestions: bool,
}

/// Fetches link targets for a free-text query.
pub trait SuggestionSource {
    fn fetch(&self, query: &str, options: &SearchOptions)
        -> Vec<LinkSuggestion>;
}

/// Creates a page for the "create a new page" suggestion.
pub trait PageCreator {
    fn create_page(&mut self, title: &str)
        -> Result<LinkValue, CreatePageError>;
}

/// A [`PageCreator`] for hosts that cannot create pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPageCreator;

impl PageCreator for NoPageCreator {
    fn create_page(
        &mut self,
        _title: &str,
    ) -> Result<LinkValue, CreatePageError> {
        Err(CreatePageError::Unavailable)
    }
}

/// A search the host should run with a [`SuggestionSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub options: SearchOptions,
}

/// The results shown below the search box.
#[derive(Clone, Debug, Default)]
pub struct SuggestionSearch {
    query: String,
    results: Vec<LinkSuggestion>,
}

impl SuggestionSearch {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[LinkSuggestion] {
        &self.results
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    /// Start a search for `query`.
    ///
    /// URL-like queries and blank queries are answered straight away and
    /// need no fetch, in which case `None` is returned.
    pub fn begin(
        &mut self,
        query: &str,
        settings: &LinkControlSettings,
    ) -> Option<SearchRequest> {
        self.query = query.to_owned();
        let trimmed = query.trim();

        if trimmed.is_empty() {
            self.results.clear();
            return settings.show_initial_suggestions.then(|| SearchRequest {
                query: String::new(),
                options: SearchOptions {
                    per_page: settings.initial_suggestions_per_page,
                    is_initial_suggestions: true,
                },
            });
        }

        if is_url_like(trimmed) {
            self.results = build_results(query, Vec::new(), settings);
            return None;
        }

        Some(SearchRequest {
            query: query.to_owned(),
            options: SearchOptions {
                per_page: settings.suggestions_per_page,
                is_initial_suggestions: false,
            },
        })
    }

    /// Store the results fetched for `request`, even if a newer search has
    /// started since.
    pub fn receive(
        &mut self,
        request: &SearchRequest,
        fetched: Vec<LinkSuggestion>,
        settings: &LinkControlSettings,
    ) {
        if request.query != self.query {
            log::debug!(
                "Results for {:?} arrived after search for {:?}",
                request.query,
                self.query
            );
        }
        self.results = if request.options.is_initial_suggestions {
            fetched
        } else {
            build_results(&request.query, fetched, settings)
        };
    }
}

/// Combine fetched results with the direct entry and create-page
/// suggestions for `query`.
pub fn build_results(
    query: &str,
    fetched: Vec<LinkSuggestion>,
    settings: &LinkControlSettings,
) -> Vec<LinkSuggestion> {
    let query = query.trim();
    if query.is_empty() {
        return fetched;
    }

    let url_like = is_url_like(query);
    if url_like {
        return if settings.allow_direct_entry {
            vec![LinkSuggestion::direct(query)]
        } else {
            Vec::new()
        };
    }

    let mut results = Vec::with_capacity(fetched.len() + 2);
    let could_be_url = !query.contains(' ');
    if could_be_url
        && settings.allow_direct_entry
        && settings.show_url_suggestion
    {
        results.push(LinkSuggestion::direct(query));
    }
    results.extend(fetched);
    if settings.allow_creation {
        results.push(LinkSuggestion::create_page(query));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str) -> LinkSuggestion {
        LinkSuggestion::entity(
            "1",
            title,
            format!("https://example.com/{title}"),
            "page",
        )
    }

    #[test]
    fn url_like_query_gives_only_a_direct_entry() {
        let results = build_results(
            "https://matrix.org",
            vec![page("ignored")],
            &LinkControlSettings::default(),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].kind,
            SuggestionKind::Direct(DirectEntryKind::Url)
        );
        assert_eq!(results[0].url, "https://matrix.org");
    }

    #[test]
    fn single_word_query_offers_direct_entry_before_results() {
        let results = build_results(
            "about",
            vec![page("about")],
            &LinkControlSettings::default(),
        );
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0].kind, SuggestionKind::Direct(_)));
        assert_eq!(results[1].title, "about");
    }

    #[test]
    fn query_with_spaces_has_no_direct_entry() {
        let results = build_results(
            "about us",
            vec![page("about-us")],
            &LinkControlSettings::default(),
        );
        assert_eq!(results, vec![page("about-us")]);
    }

    #[test]
    fn create_page_is_offered_last_when_allowed() {
        let settings = LinkControlSettings::default().with_creation(true);
        let results = build_results("new page", Vec::new(), &settings);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SuggestionKind::CreatePage);
        assert_eq!(results[0].title, "new page");
    }

    #[test]
    fn url_like_query_is_answered_without_a_fetch() {
        let mut search = SuggestionSearch::default();
        let request =
            search.begin("www.matrix.org", &LinkControlSettings::default());
        assert_eq!(request, None);
        assert_eq!(search.results().len(), 1);
    }

    #[test]
    fn blank_query_requests_initial_suggestions_when_enabled() {
        let settings =
            LinkControlSettings::default().with_initial_suggestions(true);
        let mut search = SuggestionSearch::default();
        let request = search.begin("  ", &settings).unwrap();
        assert!(request.options.is_initial_suggestions);
        assert_eq!(request.options.per_page, 3);

        let mut search = SuggestionSearch::default();
        assert_eq!(search.begin("", &LinkControlSettings::default()), None);
    }

    #[test]
    fn stale_response_overwrites_current_results() {
        let settings = LinkControlSettings::default().with_url_suggestion(false);
        let mut search = SuggestionSearch::default();
        let first = search.begin("alpha beta", &settings).unwrap();
        let second = search.begin("gamma delta", &settings).unwrap();

        search.receive(&second, vec![page("gamma")], &settings);
        search.receive(&first, vec![page("alpha")], &settings);

        assert_eq!(search.query(), "gamma delta");
        assert_eq!(search.results(), &[page("alpha")]);
    }

    #[test]
    fn selecting_an_entity_carries_its_id_and_kind() {
        let update = page("about").to_update();
        assert_eq!(update.url.as_deref(), Some("https://example.com/about"));
        assert_eq!(update.kind.as_deref(), Some("page"));
        assert_eq!(update.id.as_deref(), Some("1"));
    }

    #[test]
    fn no_page_creator_is_unavailable() {
        assert_eq!(
            NoPageCreator.create_page("x"),
            Err(CreatePageError::Unavailable)
        );
    }
}
