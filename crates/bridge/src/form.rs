//! Venue-creation form bridge.

use std::sync::Arc;

use fyyur_client::{VenueApiError, VenueTransport};
use fyyur_core::{FieldSource, VenueForm};

use crate::feedback::Feedback;

/// A form submit event. Handlers call [`SubmitEvent::prevent_default`] to
/// stop the page from doing a full navigation.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Turns a submit of the new-venue form into one `POST /venues/create`.
pub struct FormSubmissionBridge {
    transport: Arc<dyn VenueTransport>,
    feedback: Arc<Feedback>,
}

impl FormSubmissionBridge {
    pub fn new(transport: Arc<dyn VenueTransport>, feedback: Arc<Feedback>) -> Self {
        Self {
            transport,
            feedback,
        }
    }

    /// Handle one submit.
    ///
    /// The default action is suppressed before anything else, so it stays
    /// suppressed even when reading or sending fails. The outcome is both
    /// returned and pushed to the feedback queue.
    pub async fn submit<S>(
        &self,
        event: &mut SubmitEvent,
        fields: &S,
    ) -> Result<(), VenueApiError>
    where
        S: FieldSource + ?Sized,
    {
        event.prevent_default();

        tracing::debug!(genres = ?fields.field("genres"), "Venue form submitted");

        let name = fields.field("name").unwrap_or_default().to_string();

        let result = match VenueForm::read_from(fields) {
            Ok(form) => self.transport.create_venue(&form).await,
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(()) => {
                tracing::info!(name = %name, "Venue listed");
                self.feedback
                    .success(format!("Venue {name} was successfully listed!"));
            }
            Err(e) => {
                tracing::warn!(
                    name = %name,
                    kind = e.kind(),
                    error = %e,
                    "Venue could not be listed"
                );
                self.feedback
                    .error(format!("An error occurred. Venue {name} could not be listed."));
            }
        }

        result
    }
}
