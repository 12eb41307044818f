use fyyur_core::ValidationError;

/// Errors from the venue REST layer.
#[derive(Debug, thiserror::Error)]
pub enum VenueApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The record or identifier was rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-2xx status, or reported failure in
    /// its body.
    #[error("Venue API error ({status}): {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl VenueApiError {
    /// Short classification used in log fields and feedback.
    pub fn kind(&self) -> &'static str {
        match self {
            VenueApiError::Network(_) => "network",
            VenueApiError::Validation(_) => "validation",
            VenueApiError::Server { .. } => "server",
        }
    }
}
