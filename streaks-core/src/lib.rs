//! # streaks-core
//!
//! UI-independent state behind the Dev Streaks landing page.
//!
//! The landing page itself is a Leptos CSR app (`streaks-landing`); everything
//! with behavior worth testing lives here, free of any DOM dependency:
//!
//! - [`carousel`] - the screenshot preview strip in scroll-button or drag mode
//! - [`lightbox`] - overlay enlarging one screenshot
//! - [`menu`] - collapsible navigation panel for narrow screens
//! - [`metadata`] - scoped ownership of the document title, description and favicon
//! - [`assets`] - ordered screenshot catalog and broken-image fallback
//! - [`config`] - `site.toml` schema and defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use streaks_core::{Direction, Lightbox, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let mut carousel = config.carousel()?;
//!
//! // Not mounted yet: scrolling is a no-op.
//! let moved = carousel.scroll_by(None::<&dyn streaks_core::ScrollSurface>, Direction::Next);
//! assert_eq!(moved, 0.0);
//!
//! // Clicking the fourth screenshot opens it in the lightbox.
//! let mut lightbox = Lightbox::new();
//! if let Some(id) = carousel.activate(3) {
//!     lightbox.open(id);
//! }
//! assert!(lightbox.is_open());
//! # Ok::<(), streaks_core::Error>(())
//! ```
//!
//! All operations are total; the only errors come from configuration
//! ([`Error`]).

pub mod assets;
pub mod carousel;
pub mod config;
pub mod error;
pub mod lightbox;
pub mod menu;
pub mod metadata;

pub use assets::{AssetCatalog, AssetId, ImageSource};
pub use carousel::{
    CarouselMode, Direction, DragBounds, DragRelease, PreviewCarousel, ScrollStep, ScrollSurface,
    SurfaceMetrics,
};
pub use config::{SiteConfig, SocialIcon, SocialLink};
pub use error::{Error, Result};
pub use lightbox::{Lightbox, LightboxState};
pub use menu::NavMenu;
pub use metadata::{MetadataGuard, MetadataHost, PageMetadata};
