//! Actors page composer: weekly trending people grid.

use reelcat_api::ApiError;
use reelcat_api::tmdb::LocalCatalogApi;

use crate::cards::PersonCard;
use crate::composer::Compose;
use crate::pagination::clamp_page;

/// Request parameters for the actors grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorsQuery {
    /// Result page (already clamped).
    pub page: u32,
}

impl Default for ActorsQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl ActorsQuery {
    /// Moves to `requested`, clamped into the valid page range of the
    /// grid currently shown.
    #[must_use]
    pub fn go_to_page(mut self, requested: i64, total_pages: Option<u32>) -> Self {
        self.page = clamp_page(requested, total_pages);
        self
    }
}

/// View model for the actors grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorsModel {
    /// Person cards in upstream order.
    pub people: Vec<PersonCard>,
    /// Page the grid is showing.
    pub page: u32,
    /// Total pages reported upstream.
    pub total_pages: u32,
}

/// Compose recipe for the actors grid.
#[derive(Debug)]
pub struct ActorsPage;

impl Compose for ActorsPage {
    type Query = ActorsQuery;
    type Model = ActorsModel;

    const ERROR_FALLBACK: &'static str = "Failed to load trending people";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &ActorsQuery,
    ) -> Result<ActorsModel, ApiError> {
        let page = api.trending_people(query.page.max(1)).await?;

        Ok(ActorsModel {
            people: page.results.iter().map(PersonCard::from_person).collect(),
            page: page.page,
            total_pages: page.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_page_clamps_into_range() {
        // Arrange
        let query = ActorsQuery::default();

        // Act & Assert
        assert_eq!(query.go_to_page(0, Some(500)).page, 1);
        assert_eq!(query.go_to_page(501, Some(500)).page, 500);
    }
}
