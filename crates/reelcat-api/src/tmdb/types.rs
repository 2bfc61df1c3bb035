//! TMDB API response types.
//!
//! All types are transient view data deserialized straight from upstream
//! JSON. Fields the API may omit are `Option` or defaulted so that a 2xx
//! body with a sparse shape still decodes (a missing `results` array is
//! treated as zero results, not as an error).

use serde::Deserialize;

const fn default_page() -> u32 {
    1
}

/// A paginated result set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    /// Current page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Results in upstream order.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default = "default_page")]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

impl<T> Page<T> {
    /// An empty single-page result set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 1,
            total_results: 0,
        }
    }
}

/// A movie summary as it appears in listings, search results, and trending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Release date (YYYY-MM-DD or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// A TV series summary as it appears in listings, search results, and trending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TvSummary {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// First air date (YYYY-MM-DD or null).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// A person summary from trending or search results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonSummary {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
}

/// One entry of a `/search/multi` result list, discriminated by `media_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MultiResult {
    /// A movie result.
    Movie(MovieSummary),
    /// A TV series result.
    Tv(TvSummary),
    /// A person result.
    Person(PersonSummary),
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Response from `/genre/{movie|tv}/list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenreList {
    /// All genres for the media type.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Production company reference within details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductionCompany {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Logo image path.
    #[serde(default)]
    pub logo_path: Option<String>,
}

/// Response from `/movie/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

/// Season summary within TV details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Number of episodes in this season.
    #[serde(default)]
    pub episode_count: u32,
    /// Season name.
    #[serde(default)]
    pub name: Option<String>,
    /// Air date of this season.
    #[serde(default)]
    pub air_date: Option<String>,
}

/// Response from `/tv/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// First air date.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Season summaries.
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

/// Response from `/person/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Biography text.
    #[serde(default)]
    pub biography: Option<String>,
    /// Birthday (YYYY-MM-DD).
    #[serde(default)]
    pub birthday: Option<String>,
    /// Deathday (YYYY-MM-DD).
    #[serde(default)]
    pub deathday: Option<String>,
    /// Place of birth.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Gender code (1 = female, 2 = male).
    #[serde(default)]
    pub gender: u8,
    /// Department the person is known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// A cast member within movie/TV credits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing order.
    #[serde(default)]
    pub order: Option<u32>,
}

/// A crew member within movie/TV credits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Job title (e.g. "Director").
    #[serde(default)]
    pub job: Option<String>,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
}

/// Response from `/{movie|tv}/{id}/credits`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Credits {
    /// Cast in billing order.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// One credit of a person's combined movie/TV credit list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreditEntry {
    /// TMDB movie or series ID.
    pub id: u64,
    /// `"movie"` or `"tv"`.
    #[serde(default)]
    pub media_type: Option<String>,
    /// Movie title (movies only).
    #[serde(default)]
    pub title: Option<String>,
    /// Series name (TV only).
    #[serde(default)]
    pub name: Option<String>,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Popularity score of the credited work.
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl CreditEntry {
    /// Display title: movie `title` for movies, series `name` for TV.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(untitled)")
    }
}

/// Response from `/person/{id}/combined_credits`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CombinedCredits {
    /// Acting credits.
    #[serde(default)]
    pub cast: Vec<CreditEntry>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<CreditEntry>,
}

/// A single video entry (trailer, teaser, clip).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Video {
    /// Provider-specific video key (YouTube video ID).
    pub key: String,
    /// Video name.
    #[serde(default)]
    pub name: Option<String>,
    /// Hosting site (e.g. "YouTube").
    #[serde(default)]
    pub site: String,
    /// Video type (e.g. "Trailer", "Teaser").
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Response from `/{movie|tv}/{id}/videos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoList {
    /// Videos in upstream order.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A single episode within a season.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode name.
    pub name: String,
    /// Air date.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
}

/// Response from `/tv/{id}/season/{n}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TvSeason {
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    #[serde(default)]
    pub name: Option<String>,
    /// Season overview.
    #[serde(default)]
    pub overview: Option<String>,
    /// Air date.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Episodes in this season.
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// Response from `/person/{id}/external_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalIds {
    /// IMDB name ID (e.g. "nm0000206").
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Instagram handle.
    #[serde(default)]
    pub instagram_id: Option<String>,
    /// Twitter handle.
    #[serde(default)]
    pub twitter_id: Option<String>,
    /// Facebook handle.
    #[serde(default)]
    pub facebook_id: Option<String>,
}

/// TMDB API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}
