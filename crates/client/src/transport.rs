use async_trait::async_trait;
use fyyur_core::{VenueForm, VenueId};

use crate::api::VenueApi;
use crate::error::VenueApiError;

/// The two venue requests the UI bridges depend on.
///
/// [`VenueApi`] is the HTTP implementation; tests substitute fakes.
#[async_trait]
pub trait VenueTransport: Send + Sync {
    async fn create_venue(&self, form: &VenueForm) -> Result<(), VenueApiError>;

    async fn delete_venue(&self, id: &VenueId) -> Result<(), VenueApiError>;
}

#[async_trait]
impl VenueTransport for VenueApi {
    async fn create_venue(&self, form: &VenueForm) -> Result<(), VenueApiError> {
        VenueApi::create_venue(self, form).await
    }

    async fn delete_venue(&self, id: &VenueId) -> Result<(), VenueApiError> {
        VenueApi::delete_venue(self, id).await
    }
}
