//! In-process HTTP responder used by the request-level tests.

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Clone, Debug)]
pub struct Route {
    prefix: &'static str,
    status: u16,
    body: String,
}

impl Route {
    pub fn new(prefix: &'static str, status: u16, body: &str) -> Self {
        Route {
            prefix,
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    fn parsed(&self) -> Url {
        Url::parse(&format!("http://stub{}", self.target)).unwrap()
    }

    pub fn path(&self) -> String {
        self.parsed().path().to_string()
    }

    pub fn query(&self, name: &str) -> Option<String> {
        self.parsed()
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Vec<Route>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            routes: Arc::new(routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        StubServer { addr, requests }
    }

    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("http://{}{}", self.addr, path)).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.target.starts_with(prefix))
            .count()
    }
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let (status, reply) = state
        .routes
        .iter()
        .find(|route| target.starts_with(route.prefix))
        .map(|route| (route.status, route.body.clone()))
        .unwrap_or((404, "no route".to_string()));

    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        target,
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body,
    });

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, reply)
}
