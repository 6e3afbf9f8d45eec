//! Static file serving module
//!
//! Applies a route policy's headers and serves the policy's file from the
//! fixture directory.

use crate::fixture::RoutePolicy;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, range::RangeParseResult, FileMeta};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::Response;
use std::io;
use std::path::Path;
use tokio::fs;

/// Content type every fixture page is served with
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// File contents plus the validators derived from its metadata
struct LoadedFile {
    data: Bytes,
    last_modified: Option<std::time::SystemTime>,
}

/// Serve the file named by `policy`, decorated with the policy's headers
pub async fn serve_policy(
    ctx: &RequestContext<'_>,
    policy: &RoutePolicy,
    root_dir: &Path,
) -> Response<Full<Bytes>> {
    let file_path = root_dir.join(policy.file);

    let loaded = match load_file(&file_path).await {
        Ok(f) => f,
        Err(e) => return file_error_response(ctx.path, &file_path, &e),
    };

    let last_modified = loaded.last_modified.map(cache::format_http_date);
    let meta = FileMeta {
        len: loaded.data.len(),
        last_modified: last_modified.as_deref(),
    };

    let mut resp = if loaded
        .last_modified
        .is_some_and(|mtime| cache::is_not_modified(ctx.if_modified_since, mtime))
    {
        http::build_304_response(meta.last_modified)
    } else {
        match http::parse_range_header(ctx.range_header, meta.len) {
            RangeParseResult::Valid(range) => {
                http::response::build_partial_response(&loaded.data, range, &meta, ctx.is_head)
            }
            RangeParseResult::NotSatisfiable => {
                let mut resp = http::build_416_response(meta.len);
                apply_policy(&mut resp, policy);
                return resp;
            }
            RangeParseResult::None => {
                http::response::build_file_response(loaded.data, &meta, ctx.is_head)
            }
        }
    };

    apply_policy(&mut resp, policy);
    if resp.status() != hyper::StatusCode::NOT_MODIFIED {
        resp.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    }
    resp
}

/// Set each configured header; a repeated name replaces the earlier value
fn apply_policy(resp: &mut Response<Full<Bytes>>, policy: &RoutePolicy) {
    let headers = resp.headers_mut();
    for (name, value) in policy.wire_headers() {
        headers.insert(name.clone(), value.clone());
    }
}

async fn load_file(path: &Path) -> io::Result<LoadedFile> {
    let metadata = fs::metadata(path).await?;
    if metadata.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "fixture path is a directory",
        ));
    }
    let data = fs::read(path).await?;
    Ok(LoadedFile {
        data: Bytes::from(data),
        last_modified: metadata.modified().ok(),
    })
}

/// Map a read failure to the response for this request only
fn file_error_response(route: &str, file_path: &Path, err: &io::Error) -> Response<Full<Bytes>> {
    match err.kind() {
        io::ErrorKind::NotFound => {
            logger::log_warning(&format!(
                "Route {route}: file '{}' not found",
                file_path.display()
            ));
            http::build_404_response()
        }
        io::ErrorKind::PermissionDenied => {
            logger::log_warning(&format!(
                "Route {route}: permission denied reading '{}'",
                file_path.display()
            ));
            http::build_403_response()
        }
        _ => {
            logger::log_error(&format!(
                "Route {route}: failed to read '{}': {err}",
                file_path.display()
            ));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::RouteTable;
    use http_body_util::BodyExt;
    use hyper::header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_SECURITY_POLICY, LAST_MODIFIED};
    use hyper::StatusCode;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "0123456789").unwrap();
        dir
    }

    fn ctx<'a>(range: Option<&'a str>, since: Option<&'a str>) -> RequestContext<'a> {
        RequestContext {
            path: "/csp8",
            is_head: false,
            if_modified_since: since,
            range_header: range,
        }
    }

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_full_response_headers() {
        let dir = fixture_dir();
        let table = RouteTable::builtin().unwrap();
        let policy = table.lookup("/csp8").unwrap();

        let resp = serve_policy(&ctx(None, None), policy, dir.path()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html");
        assert_eq!(resp.headers()[CACHE_CONTROL], "no-store");
        assert_eq!(
            resp.headers()[CONTENT_SECURITY_POLICY],
            "script-src 'self'; object-src 'none'"
        );
        assert_eq!(resp.headers()[CONTENT_LENGTH], "10");
        assert!(resp.headers().contains_key(LAST_MODIFIED));
        assert_eq!(&body_of(resp).await[..], b"0123456789");
    }

    #[tokio::test]
    async fn test_range_and_conditional() {
        let dir = fixture_dir();
        let table = RouteTable::builtin().unwrap();
        let policy = table.lookup("/csp8").unwrap();

        let resp = serve_policy(&ctx(Some("bytes=2-4"), None), policy, dir.path()).await;
        assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(resp.headers()[CONTENT_RANGE], "bytes 2-4/10");
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html");
        assert_eq!(&body_of(resp).await[..], b"234");

        let resp = serve_policy(&ctx(Some("bytes=50-"), None), policy, dir.path()).await;
        assert_eq!(resp.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(resp.headers()[CACHE_CONTROL], "no-store");

        let far_future = "Fri, 01 Jan 2100 00:00:00 GMT";
        let resp = serve_policy(&ctx(None, Some(far_future)), policy, dir.path()).await;
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(resp.headers()[CACHE_CONTROL], "no-store");
        assert!(resp.headers().get(CONTENT_TYPE).is_none());
        assert!(body_of(resp).await.is_empty());

        let long_ago = "Sun, 06 Nov 1994 08:49:37 GMT";
        let resp = serve_policy(&ctx(None, Some(long_ago)), policy, dir.path()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = fixture_dir();
        let table = RouteTable::builtin().unwrap();
        // index1.html is not written by fixture_dir
        let policy = table.lookup("/csp42").unwrap();

        let resp = serve_policy(&ctx(None, None), policy, dir.path()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(resp.headers().get(CONTENT_SECURITY_POLICY).is_none());
    }

    #[test]
    fn test_file_error_mapping() {
        let path = Path::new("/srv/fixture/index.html");
        let cases = [
            (io::ErrorKind::NotFound, StatusCode::NOT_FOUND),
            (io::ErrorKind::PermissionDenied, StatusCode::FORBIDDEN),
            (io::ErrorKind::InvalidData, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (kind, status) in cases {
            let resp = file_error_response("/csp1", path, &io::Error::from(kind));
            assert_eq!(resp.status(), status);
            assert!(resp.headers().get(CONTENT_SECURITY_POLICY).is_none());
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unreadable_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = fixture_dir();
        let file = dir.path().join("index.html");
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::File::open(&file).is_ok() {
            // Mode bits are not enforced for root
            return;
        }

        let table = RouteTable::builtin().unwrap();
        let policy = table.lookup("/csp1").unwrap();
        let resp = serve_policy(&ctx(None, None), policy, dir.path()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(resp.headers().get(CONTENT_SECURITY_POLICY).is_none());
    }
}
