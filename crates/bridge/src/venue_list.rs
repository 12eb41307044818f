//! Venue listing that owns its delete controls.
//!
//! Each row carries the identifier its delete control sends. A click issues
//! one `DELETE /venues/{id}` and the row disappears only once the server has
//! confirmed. Rows are independent: clicks on different rows may be in
//! flight at the same time, while a second click on a row whose delete is
//! still pending is ignored.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fyyur_client::{VenueApiError, VenueTransport};
use fyyur_core::VenueId;

use crate::feedback::Feedback;

/// One visible row of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRow {
    pub id: VenueId,
    pub label: String,
    pending: bool,
}

impl VenueRow {
    /// Whether a delete for this row is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// What a click on a delete control did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server confirmed and the row was removed.
    Removed,
    /// A delete for this row was already in flight; no request was sent.
    AlreadyPending,
    /// No row carries this identifier; no request was sent.
    NotFound,
}

pub struct VenueList {
    transport: Arc<dyn VenueTransport>,
    feedback: Arc<Feedback>,
    rows: Mutex<Vec<VenueRow>>,
}

impl VenueList {
    pub fn new(transport: Arc<dyn VenueTransport>, feedback: Arc<Feedback>) -> Self {
        Self {
            transport,
            feedback,
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Append a row. Returns `false` and changes nothing if a row with the
    /// same identifier is already listed.
    pub fn push(&self, id: VenueId, label: impl Into<String>) -> bool {
        let mut rows = self.lock_rows();
        if rows.iter().any(|row| row.id == id) {
            return false;
        }
        rows.push(VenueRow {
            id,
            label: label.into(),
            pending: false,
        });
        true
    }

    /// Snapshot of the visible rows, in listing order.
    pub fn rows(&self) -> Vec<VenueRow> {
        self.lock_rows().clone()
    }

    pub fn contains(&self, id: &VenueId) -> bool {
        self.lock_rows().iter().any(|row| &row.id == id)
    }

    pub fn len(&self) -> usize {
        self.lock_rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_rows().is_empty()
    }

    /// Handle a click on the delete control of the row carrying `id`.
    pub async fn click_delete(&self, id: &VenueId) -> Result<DeleteOutcome, VenueApiError> {
        let label = {
            let mut rows = self.lock_rows();
            let Some(row) = rows.iter_mut().find(|row| &row.id == id) else {
                tracing::debug!(venue_id = %id, "Delete clicked for unlisted venue");
                return Ok(DeleteOutcome::NotFound);
            };
            if row.pending {
                tracing::debug!(venue_id = %id, "Delete already in flight");
                return Ok(DeleteOutcome::AlreadyPending);
            }
            row.pending = true;
            row.label.clone()
        };

        match self.transport.delete_venue(id).await {
            Ok(()) => {
                self.lock_rows().retain(|row| &row.id != id);
                tracing::info!(venue_id = %id, "Venue deleted");
                self.feedback.success(format!("Venue {label} was deleted."));
                Ok(DeleteOutcome::Removed)
            }
            Err(e) => {
                if let Some(row) = self.lock_rows().iter_mut().find(|row| &row.id == id) {
                    row.pending = false;
                }
                tracing::warn!(
                    venue_id = %id,
                    kind = e.kind(),
                    error = %e,
                    "Venue could not be deleted"
                );
                self.feedback
                    .error(format!("Venue {label} could not be deleted."));
                Err(e)
            }
        }
    }

    fn lock_rows(&self) -> MutexGuard<'_, Vec<VenueRow>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
