//! Fixture store module
//!
//! Owns the static JSON tree the server answers from. Two payloads are
//! preloaded at startup and never re-read; everything else is read from
//! disk per request, keyed by a path derived from query parameters.

use crate::config::{FixturesConfig, SearchVariant};
use crate::error::FixtureError;
use hyper::body::Bytes;
use std::path::PathBuf;
use tokio::fs;

const SEARCH_FILE: &str = "search.json";
const GUIDE_CATEGORIES_FILE: &str = "guide-categories.json";

/// Immutable fixture store shared by all request handlers
pub struct FixtureStore {
    dir: PathBuf,
    /// Canned search payload; only loaded for the simple search variant
    search: Option<Bytes>,
    guide_categories: Bytes,
}

impl FixtureStore {
    /// Preload the constant payloads from the fixture directory.
    ///
    /// A missing required payload is a startup error; the server refuses
    /// to come up rather than 500 on every request later.
    pub fn load(config: &FixturesConfig) -> std::io::Result<Self> {
        let dir = PathBuf::from(&config.dir);

        let search = match config.search_variant {
            SearchVariant::Simple => Some(Bytes::from(std::fs::read(dir.join(SEARCH_FILE))?)),
            SearchVariant::Extended => None,
        };
        let guide_categories = Bytes::from(std::fs::read(dir.join(GUIDE_CATEGORIES_FILE))?);

        Ok(Self {
            dir,
            search,
            guide_categories,
        })
    }

    /// The preloaded `search.json` payload (simple search variant).
    pub fn canned_search(&self) -> Result<Bytes, FixtureError> {
        self.search
            .clone()
            .ok_or_else(|| FixtureError::FixtureNotFound(SEARCH_FILE.to_string()))
    }

    /// The preloaded `guide-categories.json` payload.
    pub fn guide_categories(&self) -> Bytes {
        self.guide_categories.clone()
    }

    /// Read the fixture for `key`, a path relative to the fixture root.
    ///
    /// Any read failure surfaces as a lookup error; the caller cannot tell
    /// a missing file from an unreadable one, and does not need to.
    pub async fn read(&self, key: &str) -> Result<Bytes, FixtureError> {
        if !is_safe_key(key) {
            return Err(FixtureError::FixtureNotFound(key.to_string()));
        }
        match fs::read(self.dir.join(key)).await {
            Ok(content) => Ok(Bytes::from(content)),
            Err(_) => Err(FixtureError::FixtureNotFound(key.to_string())),
        }
    }
}

/// Keys are built from request parameters; keep them inside the fixture
/// tree.
fn is_safe_key(key: &str) -> bool {
    !key.contains("..") && !key.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("search.json"), b"{\"kind\": \"search\"}").unwrap();
        fs::write(
            dir.path().join("guide-categories.json"),
            b"{\"kind\": \"guideCategories\"}",
        )
        .unwrap();
        dir
    }

    fn store(dir: &TempDir, variant: SearchVariant) -> FixtureStore {
        let config = FixturesConfig {
            dir: dir.path().to_string_lossy().into_owned(),
            search_variant: variant,
        };
        FixtureStore::load(&config).expect("store loads")
    }

    #[tokio::test]
    async fn test_read_existing_fixture() {
        let dir = fixture_dir();
        fs::create_dir(dir.path().join("channels")).unwrap();
        fs::write(dir.path().join("channels/10.json"), b"{\"id\": \"10\"}").unwrap();

        let store = store(&dir, SearchVariant::Simple);
        let payload = store.read("channels/10.json").await.expect("fixture");
        assert_eq!(&payload[..], b"{\"id\": \"10\"}");
    }

    #[tokio::test]
    async fn test_read_missing_fixture() {
        let dir = fixture_dir();
        let store = store(&dir, SearchVariant::Simple);
        let err = store.read("channels/99.json").await.unwrap_err();
        assert_eq!(
            err,
            FixtureError::FixtureNotFound("channels/99.json".to_string())
        );
    }

    #[tokio::test]
    async fn test_traversal_key_rejected() {
        let dir = fixture_dir();
        let store = store(&dir, SearchVariant::Simple);
        assert!(store.read("../outside.json").await.is_err());
        assert!(store.read("/etc/passwd").await.is_err());
    }

    #[test]
    fn test_extended_variant_skips_canned_search() {
        let dir = fixture_dir();
        let store = store(&dir, SearchVariant::Extended);
        assert!(store.canned_search().is_err());
    }

    #[test]
    fn test_missing_guide_categories_fails_startup() {
        let dir = TempDir::new().expect("tempdir");
        let config = FixturesConfig {
            dir: dir.path().to_string_lossy().into_owned(),
            search_variant: SearchVariant::Extended,
        };
        assert!(FixtureStore::load(&config).is_err());
    }
}
