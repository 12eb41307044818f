//! Fake transport shared by the bridge unit tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fyyur_client::{VenueApiError, VenueTransport};
use fyyur_core::{VenueForm, VenueId};
use tokio::sync::Notify;

/// Records every call. Deletes of ids in `failing` answer with a 500.
/// When gated, each delete signals `started` and then waits on `release`.
#[derive(Default)]
pub struct RecordingTransport {
    pub created: Mutex<Vec<VenueForm>>,
    pub deleted: Mutex<Vec<VenueId>>,
    pub fail_create: bool,
    pub failing: HashSet<String>,
    pub gate: Option<(Arc<Notify>, Arc<Notify>)>,
}

impl RecordingTransport {
    pub fn failing_delete(ids: &[&str]) -> Self {
        Self {
            failing: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn gated() -> (Self, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let transport = Self {
            gate: Some((started.clone(), release.clone())),
            ..Self::default()
        };
        (transport, started, release)
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted
            .lock()
            .unwrap()
            .iter()
            .map(|id| id.to_string())
            .collect()
    }
}

#[async_trait]
impl VenueTransport for RecordingTransport {
    async fn create_venue(&self, form: &VenueForm) -> Result<(), VenueApiError> {
        form.check()?;
        self.created.lock().unwrap().push(form.clone());
        if self.fail_create {
            return Err(VenueApiError::Server {
                status: 500,
                body: "insert failed".into(),
            });
        }
        Ok(())
    }

    async fn delete_venue(&self, id: &VenueId) -> Result<(), VenueApiError> {
        self.deleted.lock().unwrap().push(id.clone());
        if let Some((started, release)) = &self.gate {
            started.notify_one();
            release.notified().await;
        }
        if self.failing.contains(id.as_str()) {
            return Err(VenueApiError::Server {
                status: 500,
                body: "delete failed".into(),
            });
        }
        Ok(())
    }
}
