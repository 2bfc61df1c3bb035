//! TMDB request parameter types.

use std::fmt;
use std::str::FromStr;

/// Movie listing category (path segment of `/movie/{category}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieCategory {
    /// `/movie/popular`
    #[default]
    Popular,
    /// `/movie/top_rated`
    TopRated,
    /// `/movie/now_playing`
    NowPlaying,
    /// `/movie/upcoming`
    Upcoming,
}

impl MovieCategory {
    /// Path segment for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::NowPlaying => "now_playing",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(Self::Popular),
            "top_rated" => Ok(Self::TopRated),
            "now_playing" => Ok(Self::NowPlaying),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(format!(
                "unknown movie category \"{other}\" (expected popular, top_rated, now_playing, upcoming)"
            )),
        }
    }
}

/// TV listing category (path segment of `/tv/{category}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TvCategory {
    /// `/tv/popular`
    #[default]
    Popular,
    /// `/tv/top_rated`
    TopRated,
    /// `/tv/on_the_air`
    OnTheAir,
    /// `/tv/airing_today`
    AiringToday,
}

impl TvCategory {
    /// Path segment for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::OnTheAir => "on_the_air",
            Self::AiringToday => "airing_today",
        }
    }
}

impl fmt::Display for TvCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TvCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(Self::Popular),
            "top_rated" => Ok(Self::TopRated),
            "on_the_air" => Ok(Self::OnTheAir),
            "airing_today" => Ok(Self::AiringToday),
            other => Err(format!(
                "unknown tv category \"{other}\" (expected popular, top_rated, on_the_air, airing_today)"
            )),
        }
    }
}

/// Trending time window (path segment of `/trending/{media}/{window}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingWindow {
    /// `/trending/{media}/day`
    #[default]
    Day,
    /// `/trending/{media}/week`
    Week,
}

impl TrendingWindow {
    /// Path segment for this window.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TrendingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendingWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            other => Err(format!(
                "unknown trending window \"{other}\" (expected day, week)"
            )),
        }
    }
}

/// Parameters for category listing endpoints.
///
/// `with_genres` is omitted from the query string entirely when absent;
/// sending `with_genres=` would change upstream filtering semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Result page (1-based, default 1).
    pub page: u32,
    /// Comma-separated genre id filter, forwarded verbatim.
    pub with_genres: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            with_genres: None,
        }
    }
}

impl ListParams {
    /// Creates default listing params (page 1, no genre filter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the genre filter.
    #[must_use]
    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.with_genres = Some(genres.into());
        self
    }
}

/// Parameters for search endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search term (required).
    pub query: String,
    /// Result page (1-based, default 1).
    pub page: u32,
}

impl SearchParams {
    /// Creates search params with the given term.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}
