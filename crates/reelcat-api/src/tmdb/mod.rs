//! TMDB API client module.
//!
//! One async method per remote endpoint, all read-only HTTP GET against a
//! single base URL with the `api_key` credential attached to every call.

mod api;
mod client;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{CatalogApi, LocalCatalogApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
pub use params::{ListParams, MovieCategory, SearchParams, TrendingWindow, TvCategory};
pub use types::{
    CastMember, CombinedCredits, CreditEntry, Credits, CrewMember, Episode, ErrorBody,
    ExternalIds, Genre, GenreList, MovieDetails, MovieSummary, MultiResult, Page, PersonDetails,
    PersonSummary, ProductionCompany, SeasonSummary, TvDetails, TvSeason, TvSummary, Video,
    VideoList,
};
