//! HTTP response building module
//!
//! Builders for the status responses the fixture server sends, decoupled
//! from route policy handling.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, ACCEPT_RANGES, ALLOW, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, LAST_MODIFIED,
};
use hyper::{Response, StatusCode};

use super::range::ByteRange;

pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Metadata of a file about to be written to a response
pub struct FileMeta<'a> {
    /// Total length of the file in bytes
    pub len: usize,
    /// Formatted `Last-Modified` value, if the mtime is known
    pub last_modified: Option<&'a str>,
}

/// Build 200 OK carrying a whole file
pub fn build_file_response(data: Bytes, meta: &FileMeta<'_>, is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head { Bytes::new() } else { data };
    let mut resp = plain(StatusCode::OK, body);
    set_file_headers(&mut resp, meta, meta.len);
    resp
}

/// Build 206 Partial Content for a single byte range
pub fn build_partial_response(
    data: &Bytes,
    range: ByteRange,
    meta: &FileMeta<'_>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        data.slice(range.start..=range.end)
    };
    let mut resp = plain(StatusCode::PARTIAL_CONTENT, body);
    set_file_headers(&mut resp, meta, range.len());
    insert(&mut resp, CONTENT_RANGE, &range.content_range(meta.len));
    resp
}

/// Build 304 Not Modified
pub fn build_304_response(last_modified: Option<&str>) -> Response<Full<Bytes>> {
    let mut resp = plain(StatusCode::NOT_MODIFIED, Bytes::new());
    if let Some(value) = last_modified {
        insert(&mut resp, LAST_MODIFIED, value);
    }
    resp
}

/// Build 403 Forbidden
pub fn build_403_response() -> Response<Full<Bytes>> {
    text_response(StatusCode::FORBIDDEN, "403 Forbidden")
}

/// Build 404 Not Found
pub fn build_404_response() -> Response<Full<Bytes>> {
    text_response(StatusCode::NOT_FOUND, "404 Not Found")
}

/// Build 405 Method Not Allowed
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut resp = text_response(StatusCode::METHOD_NOT_ALLOWED, "405 Method Not Allowed");
    insert(&mut resp, ALLOW, ALLOWED_METHODS);
    resp
}

/// Build 204 answer to OPTIONS
pub fn build_options_response() -> Response<Full<Bytes>> {
    let mut resp = plain(StatusCode::NO_CONTENT, Bytes::new());
    insert(&mut resp, ALLOW, ALLOWED_METHODS);
    resp
}

/// Build 416 Range Not Satisfiable
pub fn build_416_response(file_size: usize) -> Response<Full<Bytes>> {
    let mut resp = text_response(StatusCode::RANGE_NOT_SATISFIABLE, "416 Range Not Satisfiable");
    insert(&mut resp, CONTENT_RANGE, &format!("bytes */{file_size}"));
    resp
}

/// Build 500 Internal Server Error
pub fn build_500_response() -> Response<Full<Bytes>> {
    text_response(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
}

fn plain(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(body));
    *resp.status_mut() = status;
    resp
}

fn text_response(status: StatusCode, message: &'static str) -> Response<Full<Bytes>> {
    let mut resp = plain(status, Bytes::from_static(message.as_bytes()));
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    resp
}

fn set_file_headers(resp: &mut Response<Full<Bytes>>, meta: &FileMeta<'_>, content_length: usize) {
    let headers = resp.headers_mut();
    headers.insert(ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(content_length));
    if let Some(value) = meta.last_modified {
        insert(resp, LAST_MODIFIED, value);
    }
}

/// Insert a computed header value, logging instead of panicking if it is not valid
fn insert(resp: &mut Response<Full<Bytes>>, name: hyper::header::HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(v) => {
            resp.headers_mut().insert(name, v);
        }
        Err(e) => crate::logger::log_error(&format!("Failed to build {name} header: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(len: usize) -> FileMeta<'static> {
        FileMeta {
            len,
            last_modified: Some("Sun, 06 Nov 1994 08:49:37 GMT"),
        }
    }

    #[test]
    fn test_file_response() {
        let resp = build_file_response(Bytes::from_static(b"<html></html>"), &meta(13), false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "13");
        assert_eq!(resp.headers()[ACCEPT_RANGES], "bytes");
        assert_eq!(resp.headers()[LAST_MODIFIED], "Sun, 06 Nov 1994 08:49:37 GMT");
        assert!(resp.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_head_keeps_length() {
        let resp = build_file_response(Bytes::from_static(b"abc"), &meta(3), true);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "3");
    }

    #[test]
    fn test_partial_response() {
        let data = Bytes::from_static(b"0123456789");
        let resp = build_partial_response(&data, ByteRange { start: 2, end: 4 }, &meta(10), false);
        assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "3");
        assert_eq!(resp.headers()[CONTENT_RANGE], "bytes 2-4/10");
    }

    #[test]
    fn test_error_responses() {
        assert_eq!(build_404_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(build_403_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(build_500_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = build_405_response();
        assert_eq!(resp.headers()[ALLOW], ALLOWED_METHODS);

        let resp = build_416_response(10);
        assert_eq!(resp.headers()[CONTENT_RANGE], "bytes */10");
    }
}
