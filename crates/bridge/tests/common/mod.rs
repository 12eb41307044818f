use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use fyyur_client::{ClientConfig, VenueApi};

/// Method, path, content type and body of one received request.
pub type Received = (Method, String, Option<String>, Bytes);

type Log = Arc<Mutex<Vec<Received>>>;

/// Venue server stand-in that logs requests and always answers
/// `200 {"success": true}`.
pub struct VenueServer {
    base_url: String,
    log: Log,
}

impl VenueServer {
    pub async fn start() -> Self {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(receive).with_state(log.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, log }
    }

    pub fn api(&self) -> Arc<VenueApi> {
        Arc::new(VenueApi::new(&ClientConfig::new(self.base_url.clone())).unwrap())
    }

    pub fn received(&self) -> Vec<Received> {
        self.log.lock().unwrap().clone()
    }
}

async fn receive(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    log.lock()
        .unwrap()
        .push((method, uri.path().to_string(), content_type, body));
    (StatusCode::OK, r#"{"success": true}"#)
}
