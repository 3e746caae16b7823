//! Full-screen overlay showing one enlarged screenshot.

use crate::assets::{AssetCatalog, AssetId};
use crate::error::Result;

/// `Closed`, or `Open` on exactly one asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(AssetId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// Asset currently enlarged, if any.
    pub fn current(&self) -> Option<AssetId> {
        match self.state {
            LightboxState::Open(id) => Some(id),
            LightboxState::Closed => None,
        }
    }

    /// Show `id`. Opening while open replaces the image.
    pub fn open(&mut self, id: AssetId) {
        if let LightboxState::Open(previous) = self.state {
            tracing::debug!(from = previous.index(), to = id.index(), "lightbox image replaced");
        }
        self.state = LightboxState::Open(id);
    }

    /// Show the asset with the given path; unknown paths leave the state alone.
    pub fn open_path(&mut self, catalog: &AssetCatalog, path: &str) -> Result<AssetId> {
        let id = catalog.require(path)?;
        self.open(id);
        Ok(id)
    }

    /// Hide the overlay. Returns whether it was open; closing twice is fine.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = LightboxState::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn catalog() -> AssetCatalog {
        AssetCatalog::new(
            "/",
            vec!["screenshots/home.jpg".into(), "screenshots/login.jpg".into()],
            "icon.png",
        )
        .expect("catalog")
    }

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::new();
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(lightbox.current().is_none());
    }

    #[test]
    fn open_then_close_round_trips() {
        let catalog = catalog();
        let mut lightbox = Lightbox::new();
        let id = catalog.get(1).expect("login");
        lightbox.open(id);
        assert_eq!(lightbox.state(), LightboxState::Open(id));
        assert!(lightbox.close());
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.close());
        assert!(!lightbox.close());
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn reopening_replaces_image() {
        let catalog = catalog();
        let mut lightbox = Lightbox::new();
        lightbox.open(catalog.get(0).expect("home"));
        lightbox.open(catalog.get(1).expect("login"));
        assert_eq!(lightbox.current(), catalog.get(1));
    }

    #[test]
    fn open_path_rejects_unknown_assets() {
        let catalog = catalog();
        let mut lightbox = Lightbox::new();
        let id = lightbox
            .open_path(&catalog, "screenshots/home.jpg")
            .expect("known path");
        assert_eq!(lightbox.current(), Some(id));

        let err = lightbox.open_path(&catalog, "screenshots/ghost.jpg").unwrap_err();
        assert!(matches!(err, Error::UnknownAsset(_)));
        assert_eq!(lightbox.current(), Some(id));
    }
}
