//! HTTP response building module
//!
//! Provides builders for fixture payload and error responses, decoupled
//! from the route handlers themselves.

use crate::error::FixtureError;
use crate::http::gzip;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response carrying a fixture payload verbatim.
pub fn build_fixture_response(payload: Bytes, use_gzip: bool) -> Response<Full<Bytes>> {
    let (body, encoding) = encode_body(payload, use_gzip);

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len());
    if let Some(enc) = encoding {
        builder = builder.header("Content-Encoding", enc);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build the generic fault-boundary response.
///
/// Every failed request, whatever the cause, serializes as
/// `{"error": "<message>: <status>"}` with the error's status code.
pub fn build_error_response(err: &FixtureError, use_gzip: bool) -> Response<Full<Bytes>> {
    let status = err.status();
    let payload = serde_json::json!({ "error": format!("{err}: {status}") });
    let (body, encoding) = encode_body(Bytes::from(payload.to_string()), use_gzip);

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len());
    if let Some(enc) = encoding {
        builder = builder.header("Content-Encoding", enc);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("error", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 405 Method Not Allowed response (only GET is served)
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Gzip the body when the client accepts it, falling back to identity
/// encoding if compression fails.
fn encode_body(body: Bytes, use_gzip: bool) -> (Bytes, Option<&'static str>) {
    if !use_gzip {
        return (body, None);
    }
    match gzip::compress(&body) {
        Ok(compressed) => (Bytes::from(compressed), Some("gzip")),
        Err(e) => {
            logger::log_warning(&format!("Gzip encoding failed, sending identity: {e}"));
            (body, None)
        }
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        use http_body_util::BodyExt;
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(resp.into_body().collect())
            .expect("collect body")
            .to_bytes()
    }

    #[test]
    fn test_fixture_response_identity() {
        let resp = build_fixture_response(Bytes::from_static(b"{\"items\":[]}"), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        assert!(resp.headers().get("Content-Encoding").is_none());
        assert_eq!(body_bytes(resp), Bytes::from_static(b"{\"items\":[]}"));
    }

    #[test]
    fn test_fixture_response_gzip() {
        let resp = build_fixture_response(Bytes::from_static(b"{\"items\":[]}"), true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Encoding").unwrap(), "gzip");

        let body = body_bytes(resp);
        let mut decoder = GzDecoder::new(&body[..]);
        let mut plain = String::new();
        decoder.read_to_string(&mut plain).expect("decompress");
        assert_eq!(plain, "{\"items\":[]}");
    }

    #[test]
    fn test_error_response_shape() {
        let err = FixtureError::UnknownQuery("apple".to_string());
        let resp = build_error_response(&err, false);
        assert_eq!(resp.status(), 500);

        let body = body_bytes(resp);
        let parsed: serde_json::Value = serde_json::from_slice(&body).expect("valid json");
        assert_eq!(parsed["error"], "Unknown query 'apple': 500");
    }

    #[test]
    fn test_unknown_route_is_404() {
        let err = FixtureError::UnknownRoute("/nope".to_string());
        let resp = build_error_response(&err, false);
        assert_eq!(resp.status(), 404);
    }
}
