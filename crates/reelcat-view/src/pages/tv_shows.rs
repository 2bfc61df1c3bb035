//! TV shows page composer: category browsing, genre filter, name search.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{ListParams, LocalCatalogApi, SearchParams, TvCategory};

use crate::cards::CatalogCard;
use crate::composer::Compose;
use crate::pagination::clamp_page;

use super::GridModel;

/// Request parameters for the TV shows grid.
///
/// Mirrors the movies grid: a non-blank `search` term overrides the
/// category listing and the genre filter only applies when browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TvShowsQuery {
    /// Listing category when not searching.
    pub category: TvCategory,
    /// Comma-separated genre id filter.
    pub with_genres: Option<String>,
    /// Name search term.
    pub search: Option<String>,
    /// Result page (already clamped).
    pub page: u32,
}

impl Default for TvShowsQuery {
    fn default() -> Self {
        Self::new(TvCategory::Popular)
    }
}

impl TvShowsQuery {
    /// Page 1 of a category listing without filters.
    #[must_use]
    pub const fn new(category: TvCategory) -> Self {
        Self {
            category,
            with_genres: None,
            search: None,
            page: 1,
        }
    }

    /// Sets the genre filter.
    #[must_use]
    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.with_genres = Some(genres.into());
        self
    }

    /// Sets the name search term. Blank terms are treated as absent.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then_some(term);
        self
    }

    /// Moves to `requested`, clamped into the valid page range of the
    /// grid currently shown.
    #[must_use]
    pub fn go_to_page(mut self, requested: i64, total_pages: Option<u32>) -> Self {
        self.page = clamp_page(requested, total_pages);
        self
    }
}

/// Compose recipe for the TV shows grid.
#[derive(Debug)]
pub struct TvShowsPage;

impl Compose for TvShowsPage {
    type Query = TvShowsQuery;
    type Model = GridModel;

    const ERROR_FALLBACK: &'static str = "Failed to load TV shows";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &TvShowsQuery,
    ) -> Result<GridModel, ApiError> {
        // The query is built clamped, but the field is public; a page
        // below 1 must never go upstream.
        let page_number = query.page.max(1);
        let page = match &query.search {
            Some(term) => {
                api.search_tv(&SearchParams::new(term.clone()).page(page_number))
                    .await?
            }
            None => {
                let mut params = ListParams::new().page(page_number);
                if let Some(genres) = &query.with_genres {
                    params = params.with_genres(genres.clone());
                }
                api.tv_by_category(query.category, &params).await?
            }
        };

        Ok(GridModel {
            cards: page.results.iter().map(CatalogCard::from_tv).collect(),
            page: page.page,
            total_pages: page.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_is_kept_when_non_blank() {
        // Arrange & Act
        let query = TvShowsQuery::new(TvCategory::OnTheAir).search("breaking");

        // Assert
        assert_eq!(query.search.as_deref(), Some("breaking"));
    }

    #[test]
    fn test_go_to_page_clamps_into_range() {
        // Arrange
        let query = TvShowsQuery::new(TvCategory::Popular);

        // Act & Assert
        assert_eq!(query.clone().go_to_page(-1, Some(12)).page, 1);
        assert_eq!(query.go_to_page(100, Some(12)).page, 12);
    }
}
