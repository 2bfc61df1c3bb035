//! API client library for reelcat.
//!
//! Provides a typed read-only client for the TMDB API v3.

/// Client error taxonomy.
pub mod error;

/// TMDB API client.
pub mod tmdb;

pub use error::ApiError;
