//! Card view models shared by the grid pages.
//!
//! Cards normalize movies and TV series into a single shape so the grid
//! pages can render both through one code path. Image paths are resolved
//! to full CDN URLs here so the presentation layer never concatenates.

use reelcat_api::tmdb::{CreditEntry, MovieSummary, PersonSummary, TvSummary};

/// TMDB image CDN base.
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Poster/profile size used for grid cards.
const CARD_IMAGE_SIZE: &str = "w500";

/// Resolves a relative image path to a full CDN URL.
#[must_use]
pub fn image_url(size: &str, path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{IMAGE_BASE}/{size}{p}"))
}

/// Whether a card refers to a movie or a TV series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A movie.
    Movie,
    /// A TV series.
    Tv,
}

/// A movie or TV series rendered as a grid card.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCard {
    /// TMDB movie or series ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Full poster URL, if the entry has a poster.
    pub poster_url: Option<String>,
    /// Vote average on the 0..=10 scale.
    pub rating: f64,
    /// Release date for movies, first air date for TV.
    pub date: Option<String>,
    /// What the card links to.
    pub media: MediaKind,
}

impl CatalogCard {
    /// Builds a card from a movie summary.
    #[must_use]
    pub fn from_movie(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: image_url(CARD_IMAGE_SIZE, movie.poster_path.as_deref()),
            rating: movie.vote_average,
            date: movie.release_date.clone(),
            media: MediaKind::Movie,
        }
    }

    /// Builds a card from a TV series summary.
    #[must_use]
    pub fn from_tv(tv: &TvSummary) -> Self {
        Self {
            id: tv.id,
            title: tv.name.clone(),
            poster_url: image_url(CARD_IMAGE_SIZE, tv.poster_path.as_deref()),
            rating: tv.vote_average,
            date: tv.first_air_date.clone(),
            media: MediaKind::Tv,
        }
    }
}

/// A person rendered as a grid card.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCard {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Full profile image URL.
    pub profile_url: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
}

impl PersonCard {
    /// Builds a card from a person summary.
    #[must_use]
    pub fn from_person(person: &PersonSummary) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            profile_url: image_url(CARD_IMAGE_SIZE, person.profile_path.as_deref()),
            popularity: person.popularity,
            known_for_department: person.known_for_department.clone(),
        }
    }
}

/// One work on a person page's known-for strip.
#[derive(Debug, Clone, PartialEq)]
pub struct KnownForCard {
    /// TMDB movie or series ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Full poster URL.
    pub poster_url: Option<String>,
    /// Popularity score of the credited work (missing treated as 0).
    pub popularity: f64,
    /// Character played, if credited as cast.
    pub character: Option<String>,
    /// What the card links to.
    pub media: MediaKind,
}

impl KnownForCard {
    /// Builds a card from one combined-credits entry.
    #[must_use]
    pub fn from_credit(entry: &CreditEntry) -> Self {
        let media = match entry.media_type.as_deref() {
            Some("tv") => MediaKind::Tv,
            _ => MediaKind::Movie,
        };
        Self {
            id: entry.id,
            title: entry.display_title().to_owned(),
            poster_url: image_url(CARD_IMAGE_SIZE, entry.poster_path.as_deref()),
            popularity: entry.popularity.unwrap_or(0.0),
            character: entry.character.clone(),
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn movie() -> MovieSummary {
        MovieSummary {
            id: 603,
            title: String::from("The Matrix"),
            release_date: Some(String::from("1999-03-30")),
            overview: None,
            popularity: 98.5,
            vote_average: 8.2,
            vote_count: 25_000,
            genre_ids: vec![28, 878],
            poster_path: Some(String::from("/matrix.jpg")),
            backdrop_path: None,
        }
    }

    #[test]
    fn test_movie_card_resolves_poster_url() {
        // Arrange & Act
        let card = CatalogCard::from_movie(&movie());

        // Assert
        assert_eq!(card.media, MediaKind::Movie);
        assert_eq!(
            card.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/matrix.jpg")
        );
        assert_eq!(card.title, "The Matrix");
    }

    #[test]
    fn test_missing_poster_yields_no_url() {
        // Arrange
        let mut summary = movie();
        summary.poster_path = None;

        // Act
        let card = CatalogCard::from_movie(&summary);

        // Assert
        assert!(card.poster_url.is_none());
    }

    #[test]
    fn test_tv_card_uses_name_and_first_air_date() {
        // Arrange
        let tv = TvSummary {
            id: 1396,
            name: String::from("Breaking Bad"),
            first_air_date: Some(String::from("2008-01-20")),
            overview: None,
            popularity: 200.0,
            vote_average: 8.9,
            vote_count: 12_000,
            genre_ids: vec![18],
            poster_path: None,
            backdrop_path: None,
        };

        // Act
        let card = CatalogCard::from_tv(&tv);

        // Assert
        assert_eq!(card.media, MediaKind::Tv);
        assert_eq!(card.title, "Breaking Bad");
        assert_eq!(card.date.as_deref(), Some("2008-01-20"));
    }

    #[test]
    fn test_known_for_card_defaults_missing_popularity_to_zero() {
        // Arrange
        let entry: CreditEntry = serde_json::from_str(
            r#"{"id": 1396, "media_type": "tv", "name": "Breaking Bad"}"#,
        )
        .unwrap();

        // Act
        let card = KnownForCard::from_credit(&entry);

        // Assert
        assert_eq!(card.media, MediaKind::Tv);
        assert!((card.popularity - 0.0).abs() < f64::EPSILON);
        assert_eq!(card.title, "Breaking Bad");
    }
}
