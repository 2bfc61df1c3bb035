//! Season episode list composer, loaded on demand from TV details.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{LocalCatalogApi, TvSeason};

use crate::composer::Compose;

/// Request parameters for a season's episode list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonQuery {
    /// TMDB series ID.
    pub series_id: u64,
    /// Season number within the series (0 = specials).
    pub season_number: u32,
}

/// View model for a season's episode list.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonModel {
    /// The season with its episodes.
    pub season: TvSeason,
}

/// Compose recipe for one season.
#[derive(Debug)]
pub struct SeasonPage;

impl Compose for SeasonPage {
    type Query = SeasonQuery;
    type Model = SeasonModel;

    const ERROR_FALLBACK: &'static str = "Failed to load season";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &SeasonQuery,
    ) -> Result<SeasonModel, ApiError> {
        let season = api.tv_season(query.series_id, query.season_number).await?;
        Ok(SeasonModel { season })
    }
}
