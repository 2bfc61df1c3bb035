//! `CatalogApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::ApiError;

use super::params::{ListParams, MovieCategory, SearchParams, TrendingWindow, TvCategory};
use super::types::{
    CombinedCredits, Credits, ExternalIds, GenreList, MovieDetails, MovieSummary, MultiResult,
    Page, PersonDetails, PersonSummary, TvDetails, TvSeason, TvSummary, VideoList,
};

/// Read-only catalog API, one method per remote endpoint.
///
/// Abstracts API operations for mock substitution in tests. Uses
/// `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every operation maps to exactly one outbound HTTP GET and fails with
/// [`ApiError`] on transport failure, a non-2xx upstream status, or an
/// undecodable 2xx body. Identical arguments always produce identical
/// outbound requests; absent optional parameters are omitted from the
/// query string entirely.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// Lists movie genres (`/genre/movie/list`).
    async fn movie_genres(&self) -> Result<GenreList, ApiError>;

    /// Lists TV genres (`/genre/tv/list`).
    async fn tv_genres(&self) -> Result<GenreList, ApiError>;

    /// Lists movies by category (`/movie/{category}`).
    async fn movies_by_category(
        &self,
        category: MovieCategory,
        params: &ListParams,
    ) -> Result<Page<MovieSummary>, ApiError>;

    /// Lists TV series by category (`/tv/{category}`).
    async fn tv_by_category(
        &self,
        category: TvCategory,
        params: &ListParams,
    ) -> Result<Page<TvSummary>, ApiError>;

    /// Searches movies (`/search/movie`, adult content excluded).
    async fn search_movies(&self, params: &SearchParams) -> Result<Page<MovieSummary>, ApiError>;

    /// Searches TV series (`/search/tv`, adult content excluded).
    async fn search_tv(&self, params: &SearchParams) -> Result<Page<TvSummary>, ApiError>;

    /// Searches movies, TV, and people at once (`/search/multi`).
    async fn search_multi(&self, params: &SearchParams) -> Result<Page<MultiResult>, ApiError>;

    /// Fetches movie details (`/movie/{id}`).
    async fn movie_details(&self, id: u64) -> Result<MovieDetails, ApiError>;

    /// Fetches TV series details (`/tv/{id}`).
    async fn tv_details(&self, id: u64) -> Result<TvDetails, ApiError>;

    /// Fetches person details (`/person/{id}`).
    async fn person_details(&self, id: u64) -> Result<PersonDetails, ApiError>;

    /// Fetches movie cast and crew (`/movie/{id}/credits`).
    async fn movie_credits(&self, id: u64) -> Result<Credits, ApiError>;

    /// Fetches TV cast and crew (`/tv/{id}/credits`).
    async fn tv_credits(&self, id: u64) -> Result<Credits, ApiError>;

    /// Fetches a person's combined movie/TV credits (`/person/{id}/combined_credits`).
    async fn person_combined_credits(&self, id: u64) -> Result<CombinedCredits, ApiError>;

    /// Lists movies similar to the given one (`/movie/{id}/similar`).
    async fn similar_movies(&self, id: u64, page: u32) -> Result<Page<MovieSummary>, ApiError>;

    /// Lists TV series similar to the given one (`/tv/{id}/similar`).
    async fn similar_tv(&self, id: u64, page: u32) -> Result<Page<TvSummary>, ApiError>;

    /// Lists movie recommendations (`/movie/{id}/recommendations`).
    async fn movie_recommendations(
        &self,
        id: u64,
        page: u32,
    ) -> Result<Page<MovieSummary>, ApiError>;

    /// Lists TV recommendations (`/tv/{id}/recommendations`).
    async fn tv_recommendations(&self, id: u64, page: u32) -> Result<Page<TvSummary>, ApiError>;

    /// Lists movie videos (`/movie/{id}/videos`).
    async fn movie_videos(&self, id: u64) -> Result<VideoList, ApiError>;

    /// Lists TV videos (`/tv/{id}/videos`).
    async fn tv_videos(&self, id: u64) -> Result<VideoList, ApiError>;

    /// Fetches one TV season with its episode list (`/tv/{id}/season/{n}`).
    async fn tv_season(&self, id: u64, season_number: u32) -> Result<TvSeason, ApiError>;

    /// Lists trending movies for a time window (`/trending/movie/{window}`).
    async fn trending_movies(
        &self,
        window: TrendingWindow,
    ) -> Result<Page<MovieSummary>, ApiError>;

    /// Lists trending TV series for a time window (`/trending/tv/{window}`).
    async fn trending_tv(&self, window: TrendingWindow) -> Result<Page<TvSummary>, ApiError>;

    /// Lists weekly trending people (`/trending/person/week`).
    async fn trending_people(&self, page: u32) -> Result<Page<PersonSummary>, ApiError>;

    /// Fetches a person's external site IDs (`/person/{id}/external_ids`).
    async fn person_external_ids(&self, id: u64) -> Result<ExternalIds, ApiError>;
}
