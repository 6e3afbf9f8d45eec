//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route table
//! lookup and dispatch to the static responder.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, IF_MODIFIED_SINCE, RANGE, REFERER, USER_AGENT};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_modified_since: Option<&'a str>,
    pub range_header: Option<&'a str>,
}

/// Main entry point for HTTP request handling
///
/// Requests are served from their head alone; any body is dropped unread.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (head, body) = req.into_parts();
    drop(body);

    let (response, file) = respond(&head, &state).await;

    if state.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            &head.method,
            head.uri.path(),
            head.version,
        );
        entry.query = head.uri.query().map(ToString::to_string);
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().lower()).unwrap_or(usize::MAX);
        entry.file = file;
        entry.referer = header_str(&head, REFERER).map(ToString::to_string);
        entry.user_agent = header_str(&head, USER_AGENT).map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Produce the response and the fixture file it was built from
async fn respond(
    head: &Parts,
    state: &AppState,
) -> (Response<Full<Bytes>>, Option<&'static str>) {
    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&head.method) {
        return (resp, None);
    }

    // 2. Exact-match lookup; anything unregistered is a 404
    let path = head.uri.path();
    let Some(policy) = state.routes.lookup(path) else {
        return (http::build_404_response(), None);
    };

    // 3. Serve the policy's file
    let ctx = RequestContext {
        path,
        is_head: head.method == Method::HEAD,
        if_modified_since: header_str(head, IF_MODIFIED_SINCE),
        range_header: header_str(head, RANGE),
    };
    let resp = static_files::serve_policy(&ctx, policy, &state.root_dir).await;
    (resp, Some(policy.file))
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => Some(http::build_405_response()),
    }
}

fn header_str(head: &Parts, name: HeaderName) -> Option<&str> {
    head.headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fixture::RouteTable;
    use http_body_util::{BodyExt, Empty};
    use hyper::header::{CACHE_CONTROL, CONTENT_SECURITY_POLICY, CONTENT_TYPE};
    use hyper::StatusCode;
    use tempfile::TempDir;

    struct Fixture {
        // Held so the directory outlives the requests
        _dir: TempDir,
        state: Arc<AppState>,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            std::fs::write(dir.path().join("index.html"), "<p>index</p>").unwrap();
            std::fs::write(dir.path().join("index1.html"), "<p>index1</p>").unwrap();

            let config = Config::load_from("does-not-exist/config").unwrap();
            let routes = RouteTable::builtin().unwrap();
            let state = Arc::new(AppState::new(&config, routes, dir.path().to_path_buf()));
            Self { _dir: dir, state }
        }

        async fn send(&self, method: Method, path: &str) -> (Response<Full<Bytes>>, Bytes) {
            let req = Request::builder()
                .method(method)
                .uri(path)
                .body(Empty::<Bytes>::new())
                .unwrap();
            let peer = "127.0.0.1:40000".parse().unwrap();
            let resp = handle_request(req, Arc::clone(&self.state), peer).await.unwrap();
            let (parts, body) = resp.into_parts();
            let bytes = body.collect().await.unwrap().to_bytes();
            (Response::from_parts(parts, Full::new(bytes.clone())), bytes)
        }
    }

    #[tokio::test]
    async fn test_root_route() {
        let fx = Fixture::new();
        let (resp, body) = fx.send(Method::GET, "/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[CONTENT_SECURITY_POLICY],
            "script-src 'self'; object-src 'none'"
        );
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html");
        assert!(resp.headers().get(CACHE_CONTROL).is_none());
        assert_eq!(&body[..], b"<p>index</p>");
    }

    #[tokio::test]
    async fn test_unregistered_path() {
        let fx = Fixture::new();
        let (resp, _) = fx.send(Method::GET, "/does-not-exist").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(resp.headers().get(CONTENT_SECURITY_POLICY).is_none());
    }

    #[tokio::test]
    async fn test_query_string_ignored_for_lookup() {
        let fx = Fixture::new();
        let (resp, _) = fx.send(Method::GET, "/csp2?cache=bust").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[CONTENT_SECURITY_POLICY],
            "script-src 'self'; object-src 'none'"
        );
    }

    #[tokio::test]
    async fn test_methods() {
        let fx = Fixture::new();
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let (resp, _) = fx.send(method, "/csp1").await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(resp.headers()["allow"], "GET, HEAD, OPTIONS");
            assert!(resp.headers().get(CONTENT_SECURITY_POLICY).is_none());
        }

        let (resp, _) = fx.send(Method::OPTIONS, "/csp1").await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let (resp, body) = fx.send(Method::HEAD, "/csp1").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(resp.headers()["content-length"], "12");
    }

    #[tokio::test]
    async fn test_alternate_file() {
        let fx = Fixture::new();
        let (_, body) = fx.send(Method::GET, "/csp43").await;
        assert_eq!(&body[..], b"<p>index1</p>");
    }
}
