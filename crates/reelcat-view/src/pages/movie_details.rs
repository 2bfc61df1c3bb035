//! Movie details page composer.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{CastMember, LocalCatalogApi, MovieDetails, Video};

use crate::cards::CatalogCard;
use crate::composer::Compose;

use super::pick_trailer;

/// Cast members shown on a details page.
const TOP_CAST_LIMIT: usize = 10;

/// Similar titles shown on a details page.
const SIMILAR_LIMIT: usize = 12;

/// Request parameters for a movie details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieDetailsQuery {
    /// TMDB movie ID.
    pub id: u64,
}

/// View model for a movie details page.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailsModel {
    /// Core movie facts.
    pub details: MovieDetails,
    /// Director name, if credited.
    pub director: Option<String>,
    /// First 10 cast members in billing order.
    pub top_cast: Vec<CastMember>,
    /// Featured trailer, if any videos exist.
    pub trailer: Option<Video>,
    /// Up to 12 similar movies.
    pub similar: Vec<CatalogCard>,
}

/// Compose recipe for a movie details page. Details, credits, videos,
/// and similar titles are fetched concurrently; any failure fails the
/// whole page.
#[derive(Debug)]
pub struct MovieDetailsPage;

impl Compose for MovieDetailsPage {
    type Query = MovieDetailsQuery;
    type Model = MovieDetailsModel;

    const ERROR_FALLBACK: &'static str = "Failed to load movie details";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &MovieDetailsQuery,
    ) -> Result<MovieDetailsModel, ApiError> {
        let (details, credits, videos, similar) = tokio::try_join!(
            api.movie_details(query.id),
            api.movie_credits(query.id),
            api.movie_videos(query.id),
            api.similar_movies(query.id, 1),
        )?;

        let director = credits
            .crew
            .iter()
            .find(|member| member.job.as_deref() == Some("Director"))
            .map(|member| member.name.clone());

        Ok(MovieDetailsModel {
            details,
            director,
            top_cast: credits.cast.into_iter().take(TOP_CAST_LIMIT).collect(),
            trailer: pick_trailer(&videos.results).cloned(),
            similar: similar
                .results
                .iter()
                .take(SIMILAR_LIMIT)
                .map(CatalogCard::from_movie)
                .collect(),
        })
    }
}
