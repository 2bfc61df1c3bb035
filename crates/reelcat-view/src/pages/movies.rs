//! Movies page composer: category browsing, genre filter, title search.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{ListParams, LocalCatalogApi, MovieCategory, SearchParams};

use crate::cards::CatalogCard;
use crate::composer::Compose;
use crate::pagination::clamp_page;

use super::GridModel;

/// Request parameters for the movies grid.
///
/// A non-blank `search` term takes precedence over the category listing;
/// the genre filter only applies to category browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoviesQuery {
    /// Listing category when not searching.
    pub category: MovieCategory,
    /// Comma-separated genre id filter.
    pub with_genres: Option<String>,
    /// Title search term.
    pub search: Option<String>,
    /// Result page (already clamped).
    pub page: u32,
}

impl Default for MoviesQuery {
    fn default() -> Self {
        Self::new(MovieCategory::Popular)
    }
}

impl MoviesQuery {
    /// Page 1 of a category listing without filters.
    #[must_use]
    pub const fn new(category: MovieCategory) -> Self {
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

    /// Sets the title search term. Blank terms are treated as absent.
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

/// Compose recipe for the movies grid.
#[derive(Debug)]
pub struct MoviesPage;

impl Compose for MoviesPage {
    type Query = MoviesQuery;
    type Model = GridModel;

    const ERROR_FALLBACK: &'static str = "Failed to load movies";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &MoviesQuery,
    ) -> Result<GridModel, ApiError> {
        // The query is built clamped, but the field is public; a page
        // below 1 must never go upstream.
        let page_number = query.page.max(1);
        let page = match &query.search {
            Some(term) => {
                api.search_movies(&SearchParams::new(term.clone()).page(page_number))
                    .await?
            }
            None => {
                let mut params = ListParams::new().page(page_number);
                if let Some(genres) = &query.with_genres {
                    params = params.with_genres(genres.clone());
                }
                api.movies_by_category(query.category, &params).await?
            }
        };

        Ok(GridModel {
            cards: page.results.iter().map(CatalogCard::from_movie).collect(),
            page: page.page,
            total_pages: page.total_pages,
        })
    }
}
