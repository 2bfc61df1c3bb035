//! Multi-search page composer.
//!
//! One `/search/multi` call feeds three tabs: results are partitioned by
//! media type into disjoint movie, TV, and person buckets, preserving
//! upstream order within each bucket. A blank search term never reaches
//! the network; the page returns to its "nothing searched yet" state.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{LocalCatalogApi, MultiResult, SearchParams};

use crate::cards::{CatalogCard, PersonCard};
use crate::composer::{Compose, Composer, FetchStatus};
use crate::pagination::clamp_page;

/// Request parameters for the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term as typed.
    pub term: String,
    /// Result page (already clamped).
    pub page: u32,
}

impl SearchQuery {
    /// Page 1 for the given term.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page: 1,
        }
    }

    /// Whether the term is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty()
    }

    /// Moves to `requested`, clamped into the valid page range of the
    /// results currently shown.
    #[must_use]
    pub fn go_to_page(mut self, requested: i64, total_pages: Option<u32>) -> Self {
        self.page = clamp_page(requested, total_pages);
        self
    }
}

/// View model for the search page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchModel {
    /// Movie results in upstream order.
    pub movies: Vec<CatalogCard>,
    /// TV results in upstream order.
    pub tv: Vec<CatalogCard>,
    /// Person results in upstream order.
    pub people: Vec<PersonCard>,
    /// Page the results are showing.
    pub page: u32,
    /// Total pages reported upstream.
    pub total_pages: u32,
}

impl SearchModel {
    fn partition(results: &[MultiResult], page: u32, total_pages: u32) -> Self {
        let mut model = Self {
            page,
            total_pages,
            ..Self::default()
        };
        for result in results {
            match result {
                MultiResult::Movie(movie) => model.movies.push(CatalogCard::from_movie(movie)),
                MultiResult::Tv(tv) => model.tv.push(CatalogCard::from_tv(tv)),
                MultiResult::Person(person) => model.people.push(PersonCard::from_person(person)),
            }
        }
        model
    }
}

/// Compose recipe for the search page.
#[derive(Debug)]
pub struct SearchPage;

impl Compose for SearchPage {
    type Query = SearchQuery;
    type Model = SearchModel;

    const ERROR_FALLBACK: &'static str = "Failed to search";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &SearchQuery,
    ) -> Result<SearchModel, ApiError> {
        let page = api
            .search_multi(&SearchParams::new(query.term.clone()).page(query.page.max(1)))
            .await?;
        Ok(SearchModel::partition(
            &page.results,
            page.page,
            page.total_pages,
        ))
    }
}

/// Drives the search composer for one submitted term.
///
/// A blank term issues no request and clears the page back to idle, so
/// the presentation layer can show its "nothing searched yet" state
/// instead of an empty result set.
pub async fn run_search<'a, A: LocalCatalogApi>(
    composer: &'a mut Composer<SearchPage>,
    api: &A,
    query: SearchQuery,
) -> &'a FetchStatus<SearchModel> {
    if query.is_blank() {
        composer.reset();
        return composer.status();
    }
    composer.run(api, query).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_blank_term_detection() {
        // Arrange & Act & Assert
        assert!(SearchQuery::new("").is_blank());
        assert!(SearchQuery::new("  \t ").is_blank());
        assert!(!SearchQuery::new("batman").is_blank());
    }

    #[test]
    fn test_partition_buckets_are_disjoint_and_ordered() {
        // Arrange: mixed results as `/search/multi` returns them.
        let json = r#"[
            {"media_type": "movie", "id": 268, "title": "Batman"},
            {"media_type": "person", "id": 2524, "name": "Tom Hardy"},
            {"media_type": "tv", "id": 2098, "name": "Batman"},
            {"media_type": "movie", "id": 272, "title": "Batman Begins"}
        ]"#;
        let results: Vec<MultiResult> = serde_json::from_str(json).unwrap();

        // Act
        let model = SearchModel::partition(&results, 1, 3);

        // Assert: every result lands in exactly one bucket, in order.
        assert_eq!(
            model.movies.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![268, 272]
        );
        assert_eq!(model.tv.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2098]);
        assert_eq!(
            model.people.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![2524]
        );
        assert_eq!(model.total_pages, 3);
    }

    #[test]
    fn test_go_to_page_clamps_into_range() {
        // Arrange
        let query = SearchQuery::new("batman");

        // Act & Assert
        assert_eq!(query.clone().go_to_page(9, Some(4)).page, 4);
        assert_eq!(query.go_to_page(0, Some(4)).page, 1);
    }
}
