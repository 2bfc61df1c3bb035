//! Generic fetch composer with staleness tracking.
//!
//! The composer is a three-state machine (`idle → loading → success|error`)
//! keyed by an immutable query spec. Every `begin` bumps a generation
//! counter; a completion carrying an older generation is ignored, so the
//! rendered state always corresponds to the last-issued query regardless
//! of response arrival order.

use reelcat_api::ApiError;
use reelcat_api::tmdb::LocalCatalogApi;

/// Fetch lifecycle of one view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus<T> {
    /// Nothing requested yet (for Search: nothing searched yet).
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch completed with a view model.
    Success(T),
    /// The last fetch failed; carries the user-visible message.
    Error(String),
}

impl<T> FetchStatus<T> {
    /// Returns the view model if the status is `Success`.
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Identifies which fetch generation a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A view's data-loading recipe: a query spec, a model, and how to load
/// the model from the API.
pub trait Compose {
    /// Immutable request parameters derived from navigation state.
    type Query: Clone + PartialEq;
    /// The view model handed to the presentation layer.
    type Model;

    /// User-visible message when the fetch fails without an upstream message.
    const ERROR_FALLBACK: &'static str;

    /// Loads the model. Independent calls are fanned out concurrently and
    /// joined; if any member fails the whole load fails and partial
    /// results are dropped.
    fn load<A: LocalCatalogApi>(
        api: &A,
        query: &Self::Query,
    ) -> impl Future<Output = Result<Self::Model, ApiError>>;
}

/// Fetch state machine for one view.
#[derive(Debug)]
pub struct Composer<C: Compose> {
    query: Option<C::Query>,
    generation: u64,
    status: FetchStatus<C::Model>,
}

impl<C: Compose> Default for Composer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Compose> Composer<C> {
    /// Creates an idle composer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: None,
            generation: 0,
            status: FetchStatus::Idle,
        }
    }

    /// Current status.
    pub const fn status(&self) -> &FetchStatus<C::Model> {
        &self.status
    }

    /// The query the current status corresponds to.
    pub const fn query(&self) -> Option<&C::Query> {
        self.query.as_ref()
    }

    /// Whether `query` differs from the one currently held, i.e. a new
    /// fetch cycle should start.
    pub fn needs_fetch(&self, query: &C::Query) -> bool {
        self.query.as_ref() != Some(query) || matches!(self.status, FetchStatus::Idle)
    }

    /// Starts a fetch cycle for `query`: transitions to `Loading` and
    /// invalidates any in-flight completion.
    pub fn begin(&mut self, query: C::Query) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.query = Some(query);
        self.status = FetchStatus::Loading;
        Ticket(self.generation)
    }

    /// Applies a completed fetch.
    ///
    /// Returns `false` and leaves the state untouched when the ticket is
    /// stale (its query was superseded before the response arrived).
    pub fn finish(&mut self, ticket: Ticket, result: Result<C::Model, ApiError>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                stale = ticket.0,
                current = self.generation,
                "discarding stale fetch completion"
            );
            return false;
        }
        self.status = match result {
            Ok(model) => FetchStatus::Success(model),
            Err(err) => FetchStatus::Error(err.user_message(C::ERROR_FALLBACK)),
        };
        true
    }

    /// Returns to `Idle`, invalidating any in-flight fetch.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.query = None;
        self.status = FetchStatus::Idle;
    }

    /// Begin + load + finish in one step.
    pub async fn run<A: LocalCatalogApi>(
        &mut self,
        api: &A,
        query: C::Query,
    ) -> &FetchStatus<C::Model> {
        let ticket = self.begin(query.clone());
        let result = C::load(api, &query).await;
        self.finish(ticket, result);
        &self.status
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use reelcat_api::tmdb::TmdbClient;

    use super::*;

    /// Minimal compose recipe for state-machine tests; the load path is
    /// never exercised here, completions are injected through `finish`.
    struct Probe;

    impl Compose for Probe {
        type Query = u32;
        type Model = String;

        const ERROR_FALLBACK: &'static str = "Failed to load probe";

        async fn load<A: LocalCatalogApi>(
            _api: &A,
            query: &u32,
        ) -> Result<String, ApiError> {
            Ok(query.to_string())
        }
    }

    #[test]
    fn test_new_composer_is_idle() {
        // Arrange & Act
        let composer = Composer::<Probe>::new();

        // Assert
        assert_eq!(*composer.status(), FetchStatus::Idle);
        assert!(composer.query().is_none());
    }

    #[test]
    fn test_begin_enters_loading() {
        // Arrange
        let mut composer = Composer::<Probe>::new();

        // Act
        composer.begin(1);

        // Assert
        assert_eq!(*composer.status(), FetchStatus::Loading);
        assert_eq!(composer.query(), Some(&1));
    }

    #[test]
    fn test_last_issued_query_wins_regardless_of_arrival_order() {
        // Arrange: page 1 issued, then page 2 before page 1 resolves.
        let mut composer = Composer::<Probe>::new();
        let first = composer.begin(1);
        let second = composer.begin(2);

        // Act: page 2's response arrives first, page 1's late.
        let applied_second = composer.finish(second, Ok(String::from("page-2")));
        let applied_first = composer.finish(first, Ok(String::from("page-1")));

        // Assert: the late page-1 completion is discarded.
        assert!(applied_second);
        assert!(!applied_first);
        assert_eq!(
            *composer.status(),
            FetchStatus::Success(String::from("page-2"))
        );
    }

    #[test]
    fn test_stale_error_is_discarded_too() {
        // Arrange
        let mut composer = Composer::<Probe>::new();
        let first = composer.begin(1);
        let second = composer.begin(2);
        composer.finish(second, Ok(String::from("page-2")));

        // Act
        let applied = composer.finish(
            first,
            Err(ApiError::Upstream {
                status: 500,
                message: None,
            }),
        );

        // Assert
        assert!(!applied);
        assert_eq!(
            *composer.status(),
            FetchStatus::Success(String::from("page-2"))
        );
    }

    #[test]
    fn test_error_uses_upstream_message_when_present() {
        // Arrange
        let mut composer = Composer::<Probe>::new();
        let ticket = composer.begin(1);

        // Act
        composer.finish(
            ticket,
            Err(ApiError::Upstream {
                status: 401,
                message: Some(String::from("Invalid API key")),
            }),
        );

        // Assert
        assert_eq!(
            *composer.status(),
            FetchStatus::Error(String::from("Invalid API key"))
        );
    }

    #[test]
    fn test_error_falls_back_to_page_message() {
        // Arrange
        let mut composer = Composer::<Probe>::new();
        let ticket = composer.begin(1);

        // Act
        composer.finish(
            ticket,
            Err(ApiError::Upstream {
                status: 502,
                message: None,
            }),
        );

        // Assert
        assert_eq!(
            *composer.status(),
            FetchStatus::Error(String::from("Failed to load probe"))
        );
    }

    #[test]
    fn test_reset_invalidates_in_flight_fetch() {
        // Arrange
        let mut composer = Composer::<Probe>::new();
        let ticket = composer.begin(1);

        // Act
        composer.reset();
        let applied = composer.finish(ticket, Ok(String::from("late")));

        // Assert
        assert!(!applied);
        assert_eq!(*composer.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_needs_fetch_tracks_query_changes() {
        // Arrange
        let mut composer = Composer::<Probe>::new();

        // Act & Assert
        assert!(composer.needs_fetch(&1));
        let ticket = composer.begin(1);
        composer.finish(ticket, Ok(String::from("one")));
        assert!(!composer.needs_fetch(&1));
        assert!(composer.needs_fetch(&2));
    }

    #[tokio::test]
    async fn test_run_reaches_success() {
        // Arrange
        let mut composer = Composer::<Probe>::new();
        let client = TmdbClient::builder()
            .api_key("unused")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        composer.run(&client, 7).await;

        // Assert
        assert_eq!(*composer.status(), FetchStatus::Success(String::from("7")));
    }

    #[test]
    fn test_status_data_accessor() {
        // Arrange
        let success: FetchStatus<u32> = FetchStatus::Success(5);
        let loading: FetchStatus<u32> = FetchStatus::Loading;

        // Act & Assert
        assert_eq!(success.data(), Some(&5));
        assert_eq!(loading.data(), None);
    }
}
