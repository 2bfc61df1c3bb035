//! TV show details page composer.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{CastMember, LocalCatalogApi, TvDetails, Video};

use crate::cards::CatalogCard;
use crate::composer::Compose;

use super::pick_trailer;

const TOP_CAST_LIMIT: usize = 10;
const SIMILAR_LIMIT: usize = 12;

/// Request parameters for a TV show details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TvShowDetailsQuery {
    /// TMDB series ID.
    pub id: u64,
}

/// View model for a TV show details page.
///
/// Season summaries come with the details response itself; episode lists
/// are loaded on demand by the season composer.
#[derive(Debug, Clone, PartialEq)]
pub struct TvShowDetailsModel {
    /// Core series facts, including season summaries.
    pub details: TvDetails,
    /// First 10 cast members in billing order.
    pub top_cast: Vec<CastMember>,
    /// Featured trailer, if any videos exist.
    pub trailer: Option<Video>,
    /// Up to 12 similar series.
    pub similar: Vec<CatalogCard>,
}

/// Compose recipe for a TV show details page. Details, credits, videos,
/// and similar series are fetched concurrently; any failure fails the
/// whole page.
#[derive(Debug)]
pub struct TvShowDetailsPage;

impl Compose for TvShowDetailsPage {
    type Query = TvShowDetailsQuery;
    type Model = TvShowDetailsModel;

    const ERROR_FALLBACK: &'static str = "Failed to load TV show details";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &TvShowDetailsQuery,
    ) -> Result<TvShowDetailsModel, ApiError> {
        let (details, credits, videos, similar) = tokio::try_join!(
            api.tv_details(query.id),
            api.tv_credits(query.id),
            api.tv_videos(query.id),
            api.similar_tv(query.id, 1),
        )?;

        Ok(TvShowDetailsModel {
            details,
            top_cast: credits.cast.into_iter().take(TOP_CAST_LIMIT).collect(),
            trailer: pick_trailer(&videos.results).cloned(),
            similar: similar
                .results
                .iter()
                .take(SIMILAR_LIMIT)
                .map(CatalogCard::from_tv)
                .collect(),
        })
    }
}
