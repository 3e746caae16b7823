//! Error type shared by the whole crate.

use thiserror::Error;

/// Everything that can go wrong while building the landing page state.
///
/// Runtime operations (scrolling, dragging, toggling) are total and never
/// return this type; only configuration and path lookups do.
#[derive(Debug, Error)]
pub enum Error {
    /// The site configuration is not valid TOML or does not match the schema.
    #[error("failed to parse site config: {0}")]
    Config(#[from] toml::de::Error),

    /// The screenshot list is empty.
    #[error("site config lists no screenshots")]
    EmptyAssets,

    /// Drag bounds with `min > max` (or non-finite values).
    #[error("invalid drag bounds: min {min} must not exceed max {max}")]
    InvalidDragBounds { min: f64, max: f64 },

    /// A scroll step that is zero, negative or not finite.
    #[error("scroll step must be a positive finite distance, got {0}")]
    InvalidScrollStep(f64),

    /// A path that is not part of the asset catalog.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
