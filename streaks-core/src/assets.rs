//! Static image assets: the ordered screenshot list and the placeholder used
//! when an image fails to load.

use crate::error::{Error, Result};

/// Index of an entry in an [`AssetCatalog`].
///
/// Only a catalog can mint ids, so an id points at an existing entry of the
/// catalog that produced it. Ids are not tagged with their catalog: handing
/// one to a different, shorter catalog is a logic error (debug builds assert)
/// and resolves to the placeholder in release builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(usize);

impl AssetId {
    /// Position of the asset in the carousel strip.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, immutable list of image paths resolved against a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    base_url: String,
    paths: Vec<String>,
    fallback: String,
}

impl AssetCatalog {
    /// Build a catalog. Fails with [`Error::EmptyAssets`] when `paths` is empty.
    pub fn new(
        base_url: impl Into<String>,
        paths: Vec<String>,
        fallback: impl Into<String>,
    ) -> Result<Self> {
        if paths.is_empty() {
            return Err(Error::EmptyAssets);
        }
        Ok(Self {
            base_url: base_url.into(),
            paths,
            fallback: fallback.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Ids of every asset in display order.
    pub fn ids(&self) -> impl Iterator<Item = AssetId> + '_ {
        (0..self.paths.len()).map(AssetId)
    }

    /// Id of the asset at `index`, if any.
    pub fn get(&self, index: usize) -> Option<AssetId> {
        (index < self.paths.len()).then_some(AssetId(index))
    }

    /// Look an asset up by its configured path or by its resolved URL.
    pub fn find(&self, path: &str) -> Option<AssetId> {
        self.paths
            .iter()
            .position(|p| p == path || self.asset_url(p) == path)
            .map(AssetId)
    }

    /// Like [`find`](Self::find) but reports unknown paths as an error.
    pub fn require(&self, path: &str) -> Result<AssetId> {
        self.find(path)
            .ok_or_else(|| Error::UnknownAsset(path.to_string()))
    }

    /// Configured (unresolved) path of an asset.
    pub fn path(&self, id: AssetId) -> &str {
        debug_assert!(
            id.0 < self.paths.len(),
            "asset id {} outside a catalog of {}",
            id.0,
            self.paths.len()
        );
        self.paths
            .get(id.0)
            .map_or(self.fallback.as_str(), String::as_str)
    }

    /// Resolved URL of an asset.
    pub fn url(&self, id: AssetId) -> String {
        self.asset_url(self.path(id))
    }

    /// Short human label derived from the file name: `screenshots/stat1.jpg` -> `stat1`.
    pub fn label(&self, id: AssetId) -> &str {
        let path = self.path(id);
        let file = path.rsplit('/').next().unwrap_or(path);
        file.split('.').next().unwrap_or(file)
    }

    /// Resolved URL of the placeholder image.
    pub fn fallback_url(&self) -> String {
        self.asset_url(&self.fallback)
    }

    /// Image source for an asset, wired to fall back to the placeholder.
    pub fn source(&self, id: AssetId) -> ImageSource {
        ImageSource::new(self.url(id), self.fallback_url())
    }

    /// Resolve any path (not only catalog entries) against the base URL.
    pub fn asset_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Join a deploy base URL and a relative asset path.
///
/// Absolute URLs are returned unchanged. Exactly one `/` separates the two
/// parts when the base is non-empty.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `src` of an `<img>` that degrades to a placeholder on load failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    fallback: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    /// URL the element should currently show.
    pub fn current(&self) -> &str {
        if self.failed {
            &self.fallback
        } else {
            &self.primary
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failed && self.primary != self.fallback
    }

    /// Record a load error. Returns `true` when the visible URL changed.
    ///
    /// Swaps at most once, so a broken placeholder cannot cause an error loop.
    pub fn fail(&mut self) -> bool {
        if self.failed {
            tracing::debug!(src = %self.fallback, "placeholder failed to load, keeping it");
            return false;
        }
        self.failed = true;
        let swapped = self.primary != self.fallback;
        if swapped {
            tracing::debug!(src = %self.primary, fallback = %self.fallback, "image failed, using placeholder");
        }
        swapped
    }
}
