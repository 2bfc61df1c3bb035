//! `TmdbClient` - TMDB API client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::error::ApiError;

use super::api::LocalCatalogApi;
use super::params::{ListParams, MovieCategory, SearchParams, TrendingWindow, TvCategory};
use super::types::{
    CombinedCredits, Credits, ErrorBody, ExternalIds, GenreList, MovieDetails, MovieSummary,
    MultiResult, Page, PersonDetails, PersonSummary, TvDetails, TvSeason, TvSummary, VideoList,
};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// TMDB API client.
///
/// A pass-through: every call is one outbound GET with the `api_key`
/// credential attached as a query parameter. No retries, no caching, no
/// deduplication of in-flight requests. Base URL and credential are
/// immutable after construction and safe to share across composers.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Static API key, sent as the `api_key` query parameter.
    api_key: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient, ApiError> {
        let api_key = self
            .api_key
            .ok_or_else(|| ApiError::Config(String::from("api_key is required")))?;
        let user_agent = self
            .user_agent
            .ok_or_else(|| ApiError::Config(String::from("user_agent is required")))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| ApiError::Config(format!("invalid default base URL: {e}")))?,
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends one GET request with the credential and query params attached.
    ///
    /// Non-2xx responses are mapped to [`ApiError::Upstream`], preserving
    /// the upstream `status_message` when the error body parses. The
    /// diagnostic log never alters the error value returned to the caller.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::Url(format!("{path}: {e}")))?;

        let request = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .build()?;

        tracing::debug!(url = %request.url(), "TMDB API request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.status_message);
            tracing::warn!(
                method = "GET",
                path,
                status = status.as_u16(),
                upstream_message = message.as_deref().unwrap_or("-"),
                "TMDB API request failed"
            );
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_owned(),
            source,
        })
    }
}

impl LocalCatalogApi for TmdbClient {
    async fn movie_genres(&self) -> Result<GenreList, ApiError> {
        self.get_json("genre/movie/list", &[]).await
    }

    async fn tv_genres(&self) -> Result<GenreList, ApiError> {
        self.get_json("genre/tv/list", &[]).await
    }

    #[instrument(skip_all)]
    async fn movies_by_category(
        &self,
        category: MovieCategory,
        params: &ListParams,
    ) -> Result<Page<MovieSummary>, ApiError> {
        let mut query: Vec<(&str, String)> = vec![("page", params.page.to_string())];
        if let Some(ref genres) = params.with_genres {
            query.push(("with_genres", genres.clone()));
        }

        self.get_json(&format!("movie/{category}"), &query).await
    }

    #[instrument(skip_all)]
    async fn tv_by_category(
        &self,
        category: TvCategory,
        params: &ListParams,
    ) -> Result<Page<TvSummary>, ApiError> {
        let mut query: Vec<(&str, String)> = vec![("page", params.page.to_string())];
        if let Some(ref genres) = params.with_genres {
            query.push(("with_genres", genres.clone()));
        }

        self.get_json(&format!("tv/{category}"), &query).await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, params: &SearchParams) -> Result<Page<MovieSummary>, ApiError> {
        let query = [
            ("query", params.query.clone()),
            ("page", params.page.to_string()),
            ("include_adult", String::from("false")),
        ];
        self.get_json("search/movie", &query).await
    }

    #[instrument(skip_all)]
    async fn search_tv(&self, params: &SearchParams) -> Result<Page<TvSummary>, ApiError> {
        let query = [
            ("query", params.query.clone()),
            ("page", params.page.to_string()),
            ("include_adult", String::from("false")),
        ];
        self.get_json("search/tv", &query).await
    }

    #[instrument(skip_all)]
    async fn search_multi(&self, params: &SearchParams) -> Result<Page<MultiResult>, ApiError> {
        let query = [
            ("query", params.query.clone()),
            ("page", params.page.to_string()),
        ];
        self.get_json("search/multi", &query).await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, ApiError> {
        self.get_json(&format!("movie/{id}"), &[]).await
    }

    async fn tv_details(&self, id: u64) -> Result<TvDetails, ApiError> {
        self.get_json(&format!("tv/{id}"), &[]).await
    }

    async fn person_details(&self, id: u64) -> Result<PersonDetails, ApiError> {
        self.get_json(&format!("person/{id}"), &[]).await
    }

    async fn movie_credits(&self, id: u64) -> Result<Credits, ApiError> {
        self.get_json(&format!("movie/{id}/credits"), &[]).await
    }

    async fn tv_credits(&self, id: u64) -> Result<Credits, ApiError> {
        self.get_json(&format!("tv/{id}/credits"), &[]).await
    }

    async fn person_combined_credits(&self, id: u64) -> Result<CombinedCredits, ApiError> {
        self.get_json(&format!("person/{id}/combined_credits"), &[])
            .await
    }

    async fn similar_movies(&self, id: u64, page: u32) -> Result<Page<MovieSummary>, ApiError> {
        let query = [("page", page.to_string())];
        self.get_json(&format!("movie/{id}/similar"), &query).await
    }

    async fn similar_tv(&self, id: u64, page: u32) -> Result<Page<TvSummary>, ApiError> {
        let query = [("page", page.to_string())];
        self.get_json(&format!("tv/{id}/similar"), &query).await
    }

    async fn movie_recommendations(
        &self,
        id: u64,
        page: u32,
    ) -> Result<Page<MovieSummary>, ApiError> {
        let query = [("page", page.to_string())];
        self.get_json(&format!("movie/{id}/recommendations"), &query)
            .await
    }

    async fn tv_recommendations(&self, id: u64, page: u32) -> Result<Page<TvSummary>, ApiError> {
        let query = [("page", page.to_string())];
        self.get_json(&format!("tv/{id}/recommendations"), &query)
            .await
    }

    async fn movie_videos(&self, id: u64) -> Result<VideoList, ApiError> {
        self.get_json(&format!("movie/{id}/videos"), &[]).await
    }

    async fn tv_videos(&self, id: u64) -> Result<VideoList, ApiError> {
        self.get_json(&format!("tv/{id}/videos"), &[]).await
    }

    async fn tv_season(&self, id: u64, season_number: u32) -> Result<TvSeason, ApiError> {
        self.get_json(&format!("tv/{id}/season/{season_number}"), &[])
            .await
    }

    async fn trending_movies(
        &self,
        window: TrendingWindow,
    ) -> Result<Page<MovieSummary>, ApiError> {
        self.get_json(&format!("trending/movie/{window}"), &[])
            .await
    }

    async fn trending_tv(&self, window: TrendingWindow) -> Result<Page<TvSummary>, ApiError> {
        self.get_json(&format!("trending/tv/{window}"), &[]).await
    }

    async fn trending_people(&self, page: u32) -> Result<Page<PersonSummary>, ApiError> {
        let query = [("page", page.to_string())];
        self.get_json("trending/person/week", &query).await
    }

    async fn person_external_ids(&self, id: u64) -> Result<ExternalIds, ApiError> {
        self.get_json(&format!("person/{id}/external_ids"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn mock_client(server: &MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        // Arrange & Act
        let result = TmdbClient::builder().user_agent("test/0.0.0").build();

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(err.to_string().contains("api_key is required"));
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = TmdbClient::builder().api_key("test-key").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_with_required_fields_succeeds() {
        // Arrange & Act
        let result = TmdbClient::builder()
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build();

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_api_key_is_sent_as_query_param() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/genre_movie_list.json");

        Mock::given(method("GET"))
            .and(path("/3/genre/movie/list"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act
        let genres = client.movie_genres().await.unwrap();

        // Assert (mock expect(1) verifies the api_key query param)
        assert!(!genres.genres.is_empty());
    }

    #[tokio::test]
    async fn test_with_genres_is_omitted_when_absent() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/movie_popular_page1.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/popular"))
            .and(query_param("page", "1"))
            .and(query_param_is_missing("with_genres"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act
        let page = client
            .movies_by_category(MovieCategory::Popular, &ListParams::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(page.page, 1);
        assert!(!page.results.is_empty());
    }

    #[tokio::test]
    async fn test_with_genres_is_forwarded_verbatim() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/movie_popular_page1.json");

        Mock::given(method("GET"))
            .and(path("/3/movie/popular"))
            .and(query_param("page", "2"))
            .and(query_param("with_genres", "28,12"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let params = ListParams::new().page(2).with_genres("28,12");

        // Act & Assert (mock expect(1) verifies the query string)
        client
            .movies_by_category(MovieCategory::Popular, &params)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search_movies_excludes_adult_content() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/movie_popular_page1.json");

        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("query", "matrix"))
            .and(query_param("include_adult", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act & Assert
        client
            .search_movies(&SearchParams::new("matrix"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search_multi_omits_include_adult() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_multi_batman.json");

        Mock::given(method("GET"))
            .and(path("/3/search/multi"))
            .and(query_param("query", "batman"))
            .and(query_param_is_missing("include_adult"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act
        let page = client
            .search_multi(&SearchParams::new("batman"))
            .await
            .unwrap();

        // Assert
        assert!(!page.results.is_empty());
    }

    #[tokio::test]
    async fn test_trending_path_includes_window() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/trending_movies_day.json");

        Mock::given(method("GET"))
            .and(path("/3/trending/movie/week"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act & Assert
        client.trending_movies(TrendingWindow::Week).await.unwrap();
    }

    #[tokio::test]
    async fn test_tv_season_path() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/tv_season_1396_1.json");

        Mock::given(method("GET"))
            .and(path("/3/tv/1396/season/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act
        let season = client.tv_season(1396, 1).await.unwrap();

        // Assert
        assert_eq!(season.season_number, 1);
        assert!(!season.episodes.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_preserves_upstream_message() {
        // Arrange
        let server = MockServer::start().await;
        let error_body = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(error_body))
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act
        let result = client.movie_details(603).await;

        // Assert
        let err = result.unwrap_err();
        match err {
            ApiError::Upstream { status, ref message } => {
                assert_eq!(status, 401);
                assert!(message.as_deref().unwrap().contains("Invalid API key"));
            }
            other => panic!("expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_without_parsable_body() {
        // Arrange
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act
        let result = client.movie_details(603).await;

        // Assert
        match result.unwrap_err() {
            ApiError::Upstream { status, message } => {
                assert_eq!(status, 502);
                assert!(message.is_none());
            }
            other => panic!("expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_a_decode_error() {
        // Arrange
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act
        let result = client.movie_details(603).await;

        // Assert
        assert!(matches!(result.unwrap_err(), ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_no_retry_on_failure() {
        // Arrange: every call fails; the client must issue exactly one request.
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);

        // Act & Assert (mock expect(1) verifies pass-through, no retry)
        assert!(client.movie_details(603).await.is_err());
    }
}
