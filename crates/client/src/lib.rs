//! REST client for the Fyyur venue endpoints.
//!
//! Wraps `POST /venues/create` and `DELETE /venues/{id}` with typed
//! results, and exposes the [`VenueTransport`] seam the UI bridges call.

pub mod api;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{DeleteResponse, VenueApi};
pub use config::ClientConfig;
pub use error::VenueApiError;
pub use transport::VenueTransport;
