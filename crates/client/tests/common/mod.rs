use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use fyyur_client::{ClientConfig, VenueApi};

/// One request as the fake server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    body: String,
    delay: Duration,
}

/// In-process stand-in for the venue server.
///
/// Records every request and answers all of them with one canned status
/// and body.
pub struct FakeVenueServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeVenueServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like [`FakeVenueServer::start`], but each reply waits `delay` first.
    pub async fn start_delayed(status: StatusCode, body: &str, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            requests: requests.clone(),
            status,
            body: body.to_string(),
            delay,
        };

        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    /// Server answering every request with `200 {"success": true}`.
    pub async fn ok() -> Self {
        Self::start(StatusCode::OK, r#"{"success": true}"#).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api(&self) -> VenueApi {
        VenueApi::new(&ClientConfig::new(self.base_url()).with_timeout_secs(5)).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        content_type,
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, state.body.clone())
}

/// A venue record with every field populated.
pub fn sample_form() -> fyyur_core::VenueForm {
    fyyur_core::VenueForm {
        name: "The Dueling Pianos Bar".into(),
        city: "New York".into(),
        state: "NY".into(),
        address: "335 Delancey Street".into(),
        phone: "914-003-1132".into(),
        facebook_link: "https://www.facebook.com/theduelingpianos".into(),
        website: "https://www.theduelingpianos.com".into(),
        seeking_talent: true,
        seeking_description: "Looking for pianists".into(),
        genres: "Classical".into(),
        image_link: "https://images.unsplash.com/photo-1497032205916".into(),
    }
}
