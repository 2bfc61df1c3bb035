//! Home page composer: trending movie and TV rows.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{LocalCatalogApi, TrendingWindow};

use crate::cards::CatalogCard;
use crate::composer::Compose;

/// Maximum cards per home row.
const HOME_ROW_LIMIT: usize = 16;

/// Request parameters for the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeQuery {
    /// Trending time window for both rows.
    pub window: TrendingWindow,
}

/// View model for the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeModel {
    /// Trending movies row, at most 16 cards.
    pub trending_movies: Vec<CatalogCard>,
    /// Trending TV row, at most 16 cards.
    pub trending_tv: Vec<CatalogCard>,
}

/// Compose recipe for the home page. Both trending rows are fetched
/// concurrently; if either fails, the whole page fails.
#[derive(Debug)]
pub struct HomePage;

impl Compose for HomePage {
    type Query = HomeQuery;
    type Model = HomeModel;

    const ERROR_FALLBACK: &'static str = "Failed to load home data";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &HomeQuery,
    ) -> Result<HomeModel, ApiError> {
        let (movies, tv) = tokio::try_join!(
            api.trending_movies(query.window),
            api.trending_tv(query.window),
        )?;

        Ok(HomeModel {
            trending_movies: movies
                .results
                .iter()
                .take(HOME_ROW_LIMIT)
                .map(CatalogCard::from_movie)
                .collect(),
            trending_tv: tv
                .results
                .iter()
                .take(HOME_ROW_LIMIT)
                .map(CatalogCard::from_tv)
                .collect(),
        })
    }
}
