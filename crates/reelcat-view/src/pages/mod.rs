//! One composer per view.
//!
//! Every page follows the same pattern: a `Query` struct holds the
//! immutable request parameters, a `Compose` impl fans out the API calls
//! and joins them into a view model, and the generic
//! [`Composer`](crate::Composer) tracks loading/error/staleness.

use reelcat_api::tmdb::Video;

use crate::cards::CatalogCard;

mod actor_details;
mod actors;
mod home;
mod movie_details;
mod movies;
mod search;
mod season;
mod tv_show_details;
mod tv_shows;

pub use actor_details::{ActorDetailsModel, ActorDetailsPage, ActorDetailsQuery, rank_known_for};
pub use actors::{ActorsModel, ActorsPage, ActorsQuery};
pub use home::{HomeModel, HomePage, HomeQuery};
pub use movie_details::{MovieDetailsModel, MovieDetailsPage, MovieDetailsQuery};
pub use movies::{MoviesPage, MoviesQuery};
pub use search::{SearchModel, SearchPage, SearchQuery, run_search};
pub use season::{SeasonModel, SeasonPage, SeasonQuery};
pub use tv_show_details::{TvShowDetailsModel, TvShowDetailsPage, TvShowDetailsQuery};
pub use tv_shows::{TvShowsPage, TvShowsQuery};

/// Shared shape of the paged card grids (Movies, TV Shows, Search tabs).
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    /// Cards in upstream order.
    pub cards: Vec<CatalogCard>,
    /// Page the grid is showing.
    pub page: u32,
    /// Total pages reported upstream.
    pub total_pages: u32,
}

/// Picks the video to feature on a details page: the first YouTube
/// trailer, falling back to the first video of any kind.
#[must_use]
pub fn pick_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.site == "YouTube" && v.kind == "Trailer")
        .or_else(|| videos.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(site: &str, kind: &str, key: &str) -> Video {
        Video {
            key: String::from(key),
            name: None,
            site: String::from(site),
            kind: String::from(kind),
        }
    }

    #[test]
    fn test_pick_trailer_prefers_youtube_trailer() {
        // Arrange
        let videos = vec![
            video("YouTube", "Teaser", "teaser-1"),
            video("Vimeo", "Trailer", "vimeo-1"),
            video("YouTube", "Trailer", "trailer-1"),
        ];

        // Act
        let picked = pick_trailer(&videos);

        // Assert
        assert_eq!(picked.map(|v| v.key.as_str()), Some("trailer-1"));
    }

    #[test]
    fn test_pick_trailer_falls_back_to_first_video() {
        // Arrange
        let videos = vec![
            video("YouTube", "Clip", "clip-1"),
            video("YouTube", "Teaser", "teaser-1"),
        ];

        // Act
        let picked = pick_trailer(&videos);

        // Assert
        assert_eq!(picked.map(|v| v.key.as_str()), Some("clip-1"));
    }

    #[test]
    fn test_pick_trailer_empty_list() {
        // Arrange & Act & Assert
        assert!(pick_trailer(&[]).is_none());
    }
}
