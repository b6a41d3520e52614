//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method check, flat path
//! dispatch, and the single fault boundary that turns any handler error
//! into the generic JSON error payload.

use crate::config::{AppState, SearchVariant};
use crate::error::FixtureError;
use crate::handler::routes;
use crate::http::{self, QueryParams};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Explicit view over one HTTP exchange: header lookup and query-argument
/// lookup, nothing else. Handlers never touch the hyper request directly.
pub struct FixtureRequest<'a> {
    headers: &'a HeaderMap,
    params: QueryParams,
}

impl<'a> FixtureRequest<'a> {
    pub const fn new(headers: &'a HeaderMap, params: QueryParams) -> Self {
        Self { headers, params }
    }

    /// Header value, defaulting to `""` when absent or non-ASCII
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    /// Query argument value, defaulting to `""` when absent
    pub fn argument(&self, name: &str) -> &str {
        self.params.get(name)
    }

    /// Query argument value only if the parameter was supplied
    pub fn opt_argument(&self, name: &str) -> Option<&str> {
        self.params.get_opt(name)
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();

    if state.config.logging.access_log {
        logger::log_request(method, uri, req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // The catalog surface is GET-only
    if *method != Method::GET {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(http::build_405_response());
    }

    let params = QueryParams::parse(uri.query());
    let fixture_req = FixtureRequest::new(req.headers(), params);

    // Transport encoding is negotiated independently of validation: error
    // payloads also travel gzipped when the client accepts it.
    let use_gzip = http::accepts_gzip(fixture_req.header("Accept-Encoding"));

    match dispatch(path, &fixture_req, &state).await {
        Ok(payload) => {
            if state.config.logging.access_log {
                logger::log_response(payload.len());
            }
            Ok(http::build_fixture_response(payload, use_gzip))
        }
        Err(err) => {
            logger::log_request_failed(&err.to_string(), err.status());
            Ok(http::build_error_response(&err, use_gzip))
        }
    }
}

/// Flat dispatch table: path to handler, fixed at startup.
async fn dispatch(
    path: &str,
    req: &FixtureRequest<'_>,
    state: &AppState,
) -> Result<Bytes, FixtureError> {
    let store = &state.store;
    match path {
        "/youtube/v3/search" => match state.config.fixtures.search_variant {
            SearchVariant::Simple => routes::search_simple(req, store),
            SearchVariant::Extended => routes::search_extended(req, store).await,
        },
        "/youtube/v3/channels" => routes::channels(req, store).await,
        "/youtube/v3/channelSections" => routes::channel_sections(req, store).await,
        "/youtube/v3/guideCategories" => routes::guide_categories(req, store),
        "/youtube/v3/playlists" => routes::playlists(req, store).await,
        "/youtube/v3/playlistItems" => routes::playlist_items(req, store).await,
        "/youtube/v3/videos" => routes::videos(req, store).await,
        other => Err(FixtureError::UnknownRoute(other.to_string())),
    }
}
