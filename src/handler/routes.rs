//! Route handlers module
//!
//! One function per catalog endpoint. Each handler validates the request
//! shape, resolves a fixture key from the query parameters, and returns
//! the recorded payload bytes untouched.

use crate::error::FixtureError;
use crate::handler::fixtures::FixtureStore;
use crate::handler::router::FixtureRequest;
use crate::handler::validate;
use hyper::body::Bytes;

/// Token the recorded sessions were captured with. The client under test
/// sends it as `Authorization: Bearer ...`; this server never checks it.
#[allow(dead_code)]
pub const ACCESS_TOKEN: &str = "the_access_token";
#[allow(dead_code)]
pub const AUTHORIZATION_BEARER: &str = "Bearer the_access_token";

/// Simple search variant: one canned payload, one accepted query.
pub fn search_simple(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "snippet")?;
    validate::argument(req, "type", "video")?;
    validate::argument(req, "maxResults", "10")?;

    match req.argument("q") {
        "banana" => store.canned_search(),
        other => Err(FixtureError::UnknownQuery(other.to_string())),
    }
}

/// Extended search variant: fixture chosen by whichever of `q`,
/// `videoCategoryId` and `channelId` are supplied.
///
/// With both `q` and `videoCategoryId` set, the key is the plain
/// concatenation `{q}{videoCategoryId}` in that order.
pub async fn search_extended(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "snippet")?;
    validate::argument(req, "type", "video")?;

    let q = req.opt_argument("q");
    let video_category_id = req.opt_argument("videoCategoryId");
    let channel_id = req.opt_argument("channelId");

    match (q, video_category_id, channel_id) {
        (Some(q), Some(category), _) => store.read(&format!("search/q/{q}{category}.json")).await,
        (Some(q), None, _) => store.read(&format!("search/q/{q}.json")).await,
        (None, _, Some(channel)) => store.read(&format!("search/channelId/{channel}.json")).await,
        (None, _, None) => Ok(Bytes::new()),
    }
}

pub async fn channels(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "snippet,statistics")?;

    let category_id = req
        .opt_argument("categoryId")
        .ok_or(FixtureError::MissingArgument("categoryId"))?;
    store.read(&format!("channels/{category_id}.json")).await
}

pub async fn channel_sections(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "contentDetails")?;

    let channel_id = req
        .opt_argument("channelId")
        .ok_or(FixtureError::MissingArgument("channelId"))?;
    store
        .read(&format!("channelSections/{channel_id}.json"))
        .await
}

/// Parameter-less route served from the payload preloaded at startup.
pub fn guide_categories(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "snippet")?;
    Ok(store.guide_categories())
}

pub async fn playlists(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "snippet,contentDetails")?;

    let channel_id = req
        .opt_argument("channelId")
        .ok_or(FixtureError::MissingArgument("channelId"))?;
    store.read(&format!("playlists/{channel_id}.json")).await
}

pub async fn playlist_items(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "snippet,contentDetails")?;

    let playlist_id = req
        .opt_argument("playlistId")
        .ok_or(FixtureError::MissingArgument("playlistId"))?;
    store
        .read(&format!("playlistItems/{playlist_id}.json"))
        .await
}

pub async fn videos(
    req: &FixtureRequest<'_>,
    store: &FixtureStore,
) -> Result<Bytes, FixtureError> {
    validate::gzip_encoding(req)?;
    validate::argument(req, "part", "snippet")?;

    match req.opt_argument("videoCategoryId") {
        Some(category) => {
            store
                .read(&format!("videos/videoCategoryId/{category}.json"))
                .await
        }
        None => Ok(Bytes::new()),
    }
}
