//! Site configuration.
//!
//! The landing page embeds a `site.toml`; every table is optional and falls
//! back to the Dev Streaks defaults.

use serde::Deserialize;

use crate::assets::{AssetCatalog, join_url};
use crate::carousel::{CarouselMode, DragBounds, PreviewCarousel, ScrollStep};
use crate::error::Result;
use crate::metadata::PageMetadata;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub assets: AssetsConfig,
    pub carousel: CarouselConfig,
    pub social: Vec<SocialLink>,
}

/// Branding, copy and outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    /// Document title.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    /// Favicon path, relative to `base_url`.
    pub favicon: String,
    /// Deploy base URL every asset path is resolved against.
    pub base_url: String,
    /// Release asset of the Android build.
    pub apk_url: String,
    pub tagline: String,
    pub credit: String,
    pub credit_aside: String,
    pub tech_line: String,
}

/// Screenshot list and the placeholder for broken images.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub screenshots: Vec<String>,
    pub fallback: String,
}

/// How the preview strip behaves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub mode: CarouselMode,
    pub step: ScrollStep,
    /// Fixed drag range. `None` starts from [`DragBounds::default`] and
    /// re-derives the range from the rendered strip width once mounted.
    pub drag_bounds: Option<DragBounds>,
    /// Enlarge screenshots on click.
    pub lightbox: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Linkedin,
    X,
    Instagram,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            assets: AssetsConfig::default(),
            carousel: CarouselConfig::default(),
            social: vec![
                SocialLink {
                    label: "GitHub".into(),
                    href: "https://github.com/ermadhav".into(),
                    icon: SocialIcon::Github,
                },
                SocialLink {
                    label: "LinkedIn".into(),
                    href: "https://www.linkedin.com/in/ermadhav/".into(),
                    icon: SocialIcon::Linkedin,
                },
                SocialLink {
                    label: "X".into(),
                    href: "https://twitter.com/madhavtiwari24".into(),
                    icon: SocialIcon::X,
                },
                SocialLink {
                    label: "Instagram".into(),
                    href: "https://www.instagram.com/madhav.tiwari24/".into(),
                    icon: SocialIcon::Instagram,
                },
            ],
        }
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Dev Streaks".into(),
            title: "Dev Streaks • Track GitHub & LeetCode Streaks".into(),
            description: "Dev Streaks helps developers track GitHub commits and LeetCode streaks \
                          with analytics, heatmaps, and profile sharing."
                .into(),
            favicon: "icon.png".into(),
            base_url: "/".into(),
            apk_url: "https://github.com/ermadhav/DS_Web/releases/download/v1.0.0/Dev_Streaks.apk"
                .into(),
            tagline: "Track your GitHub commits and LeetCode streaks in one beautiful mobile experience."
                .into(),
            credit: "Made with ❤️ by Cosmo Coder".into(),
            credit_aside: "(AKA Madhav Tiwari)".into(),
            tech_line: "Expo • React Native • Rust + Leptos".into(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        let screenshots = [
            "home", "login", "signup", "share", "stat1", "stat2", "setting", "repo1", "repo2",
        ]
        .iter()
        .map(|name| format!("screenshots/{name}.jpg"))
        .collect();
        Self {
            screenshots,
            fallback: "icon.png".into(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            mode: CarouselMode::Scroll,
            step: ScrollStep::default(),
            drag_bounds: None,
            lightbox: true,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `content`, falling back to the defaults when it is invalid.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid site config, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.carousel.step.validate()?;
        if let Some(bounds) = &self.carousel.drag_bounds {
            bounds.validate()?;
        }
        self.catalog().map(|_| ())
    }

    /// Asset catalog for the screenshot list.
    pub fn catalog(&self) -> Result<AssetCatalog> {
        AssetCatalog::new(
            self.site.base_url.clone(),
            self.assets.screenshots.clone(),
            self.assets.fallback.clone(),
        )
    }

    /// Head metadata with the favicon resolved against the base URL.
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            favicon: self.asset_url(&self.site.favicon),
        }
    }

    /// Carousel in the configured mode, starting at offset 0.
    pub fn carousel(&self) -> Result<PreviewCarousel> {
        let catalog = self.catalog()?;
        Ok(match self.carousel.mode {
            CarouselMode::Scroll => PreviewCarousel::scrolling(catalog, self.carousel.step),
            CarouselMode::Drag => PreviewCarousel::dragging(
                catalog,
                self.carousel.drag_bounds.unwrap_or_default(),
            ),
        })
    }

    /// Resolve a path against the deploy base URL.
    pub fn asset_url(&self, path: &str) -> String {
        join_url(&self.site.base_url, path)
    }
}
