//! Person details page composer.

use reelcat_api::ApiError;
use reelcat_api::tmdb::{CreditEntry, ExternalIds, LocalCatalogApi, PersonDetails};

use crate::cards::KnownForCard;
use crate::composer::Compose;

/// Works shown in the known-for strip.
const KNOWN_FOR_LIMIT: usize = 12;

/// Request parameters for a person details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorDetailsQuery {
    /// TMDB person ID.
    pub id: u64,
}

/// View model for a person details page.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorDetailsModel {
    /// Core person facts.
    pub details: PersonDetails,
    /// Up to 12 best-known works, most popular first.
    pub known_for: Vec<KnownForCard>,
    /// IMDB profile URL, if the person has an IMDB ID.
    pub imdb_url: Option<String>,
    /// External site handles.
    pub external_ids: ExternalIds,
}

/// Ranks acting credits by descending popularity of the credited work.
///
/// Missing popularity ranks as 0. The sort is stable, so works sharing a
/// popularity score keep their upstream relative order. At most 12 cards
/// are returned.
#[must_use]
pub fn rank_known_for(cast: &[CreditEntry]) -> Vec<KnownForCard> {
    let mut cards: Vec<KnownForCard> = cast.iter().map(KnownForCard::from_credit).collect();
    cards.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    cards.truncate(KNOWN_FOR_LIMIT);
    cards
}

/// Compose recipe for a person details page. Details, combined credits,
/// and external IDs are fetched concurrently; any failure fails the
/// whole page.
#[derive(Debug)]
pub struct ActorDetailsPage;

impl Compose for ActorDetailsPage {
    type Query = ActorDetailsQuery;
    type Model = ActorDetailsModel;

    const ERROR_FALLBACK: &'static str = "Failed to load person details";

    async fn load<A: LocalCatalogApi>(
        api: &A,
        query: &ActorDetailsQuery,
    ) -> Result<ActorDetailsModel, ApiError> {
        let (details, credits, external_ids) = tokio::try_join!(
            api.person_details(query.id),
            api.person_combined_credits(query.id),
            api.person_external_ids(query.id),
        )?;

        let imdb_url = external_ids
            .imdb_id
            .as_deref()
            .map(|id| format!("https://www.imdb.com/name/{id}"));

        Ok(ActorDetailsModel {
            details,
            known_for: rank_known_for(&credits.cast),
            imdb_url,
            external_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn credit(id: u64, title: &str, popularity: Option<f64>) -> CreditEntry {
        let popularity = popularity.map_or(String::from("null"), |p| p.to_string());
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "media_type": "movie", "title": "{title}", "popularity": {popularity}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_known_for_ranks_by_descending_popularity() {
        // Arrange
        let cast = vec![
            credit(1, "Middling", Some(50.0)),
            credit(2, "Hit", Some(120.0)),
            credit(3, "Obscure", Some(2.0)),
        ];

        // Act
        let ranked = rank_known_for(&cast);

        // Assert
        assert_eq!(
            ranked.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn test_known_for_ties_keep_upstream_order() {
        // Arrange
        let cast = vec![
            credit(1, "First", Some(10.0)),
            credit(2, "Second", Some(10.0)),
            credit(3, "Third", Some(10.0)),
        ];

        // Act
        let ranked = rank_known_for(&cast);

        // Assert
        assert_eq!(
            ranked.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_known_for_missing_popularity_ranks_last() {
        // Arrange
        let cast = vec![
            credit(1, "Unknown", None),
            credit(2, "Known", Some(1.0)),
        ];

        // Act
        let ranked = rank_known_for(&cast);

        // Assert
        assert_eq!(ranked[0].id, 2);
        assert_eq!(ranked[1].id, 1);
    }

    #[test]
    fn test_known_for_is_capped_at_twelve() {
        // Arrange
        let cast: Vec<CreditEntry> = (0..20)
            .map(|i| credit(i, "Work", Some(f64::from(u32::try_from(i).unwrap()))))
            .collect();

        // Act
        let ranked = rank_known_for(&cast);

        // Assert
        assert_eq!(ranked.len(), 12);
        assert_eq!(ranked[0].id, 19);
    }
}
