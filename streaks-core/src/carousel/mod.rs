//! Screenshot preview carousel.
//!
//! The strip can be moved two ways, picked by [`CarouselMode`]:
//!
//! - **scroll** - previous/next buttons smooth-scroll a native overflow strip
//!   by a fixed step ([`ScrollStrip`], driven through a [`ScrollSurface`]);
//! - **drag** - the strip is translated directly by pointer drags inside a
//!   bounded range ([`DragTrack`]).
//!
//! [`PreviewCarousel`] owns exactly one of the two positions plus the asset
//! catalog, and turns item clicks into [`AssetId`]s for the lightbox.

mod drag;
mod scroll;

pub use drag::{DragBounds, DragRelease, DragTrack, TAP_TRAVEL};
pub use scroll::{ScrollStep, ScrollStrip, ScrollSurface, SurfaceMetrics};

use serde::Deserialize;

use crate::assets::{AssetCatalog, AssetId};

/// Which way a navigation button moves the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// `-1.0` for previous, `1.0` for next.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Previous => -1.0,
            Direction::Next => 1.0,
        }
    }
}

/// Interaction mode of the carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselMode {
    #[default]
    Scroll,
    Drag,
}

/// Position state; only one representation is live at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselPosition {
    Scroll(ScrollStrip),
    Drag(DragTrack),
}

/// The preview strip: asset list plus its current position.
#[derive(Debug, Clone)]
pub struct PreviewCarousel {
    catalog: AssetCatalog,
    step: ScrollStep,
    position: CarouselPosition,
}

impl PreviewCarousel {
    /// Carousel in scroll-button mode, starting at offset 0.
    pub fn scrolling(catalog: AssetCatalog, step: ScrollStep) -> Self {
        Self {
            catalog,
            step,
            position: CarouselPosition::Scroll(ScrollStrip::new()),
        }
    }

    /// Carousel in drag mode, starting at offset 0 (clamped into `bounds`).
    /// Invalid bounds are replaced by [`DragBounds::default`].
    pub fn dragging(catalog: AssetCatalog, bounds: DragBounds) -> Self {
        Self {
            catalog,
            step: ScrollStep::default(),
            position: CarouselPosition::Drag(DragTrack::new(bounds)),
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> CarouselMode {
        match self.position {
            CarouselPosition::Scroll(_) => CarouselMode::Scroll,
            CarouselPosition::Drag(_) => CarouselMode::Drag,
        }
    }

    pub fn position(&self) -> &CarouselPosition {
        &self.position
    }

    /// Current offset in whichever representation is active.
    pub fn offset(&self) -> f64 {
        match &self.position {
            CarouselPosition::Scroll(strip) => strip.offset(),
            CarouselPosition::Drag(track) => track.offset(),
        }
    }

    /// Move the strip one step. Returns the delta actually applied.
    ///
    /// `None` means the strip is not mounted yet: nothing happens. In drag
    /// mode there are no buttons and the call is ignored as well.
    pub fn scroll_by<S>(&mut self, surface: Option<&S>, direction: Direction) -> f64
    where
        S: ScrollSurface + ?Sized,
    {
        let CarouselPosition::Scroll(strip) = &mut self.position else {
            tracing::debug!(?direction, "scroll_by ignored in drag mode");
            return 0.0;
        };
        let Some(surface) = surface else {
            tracing::debug!(?direction, "scroll surface not mounted, skipping");
            return 0.0;
        };

        let metrics = surface.metrics();
        strip.set_extent(metrics.max_scroll());
        strip.sync(metrics.scroll_left);

        let delta = strip.step(direction, self.step.distance(metrics.window_width));
        if delta != 0.0 {
            surface.scroll_by(delta, true);
        }
        delta
    }

    /// Record a scroll position reported by the surface (native scrolling).
    pub fn sync(&mut self, metrics: SurfaceMetrics) {
        if let CarouselPosition::Scroll(strip) = &mut self.position {
            strip.set_extent(metrics.max_scroll());
            strip.sync(metrics.scroll_left);
        }
    }

    /// Set the drag offset directly (clamped). Ignored in scroll mode.
    pub fn drag_to(&mut self, offset: f64) -> f64 {
        match &mut self.position {
            CarouselPosition::Drag(track) => track.drag_to(offset),
            CarouselPosition::Scroll(strip) => strip.offset(),
        }
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        if let CarouselPosition::Drag(track) = &mut self.position {
            track.begin(pointer_x);
        }
    }

    pub fn drag_move(&mut self, pointer_x: f64) -> f64 {
        match &mut self.position {
            CarouselPosition::Drag(track) => track.move_to(pointer_x),
            CarouselPosition::Scroll(strip) => strip.offset(),
        }
    }

    /// A pointer gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(&self.position, CarouselPosition::Drag(track) if track.is_dragging())
    }

    /// Finish a drag gesture. In scroll mode every release counts as a tap.
    pub fn end_drag(&mut self) -> DragRelease {
        match &mut self.position {
            CarouselPosition::Drag(track) => track.end(),
            CarouselPosition::Scroll(_) => DragRelease { tap: true },
        }
    }

    /// Replace the drag bounds, e.g. once the real strip width is known.
    pub fn set_drag_bounds(&mut self, bounds: DragBounds) {
        if let CarouselPosition::Drag(track) = &mut self.position {
            track.set_bounds(bounds);
        }
    }

    /// Select the item at `index`; the id is handed to the lightbox.
    pub fn activate(&self, index: usize) -> Option<AssetId> {
        let id = self.catalog.get(index);
        if id.is_none() {
            tracing::debug!(index, "activate outside of the asset list");
        }
        id
    }

    /// `true` when the previous button has nowhere to go.
    pub fn at_start(&self) -> bool {
        match &self.position {
            CarouselPosition::Scroll(strip) => strip.at_start(),
            CarouselPosition::Drag(track) => track.at_max(),
        }
    }

    /// `true` when the next button has nowhere to go.
    pub fn at_end(&self) -> bool {
        match &self.position {
            CarouselPosition::Scroll(strip) => strip.at_end(),
            CarouselPosition::Drag(track) => track.at_min(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory strip that applies scroll commands instantly, clamping like
    /// a browser does.
    struct FakeStrip {
        left: Cell<f64>,
        content: f64,
        viewport: f64,
        window: f64,
        commands: RefCell<Vec<(f64, bool)>>,
    }

    impl FakeStrip {
        fn new(items: usize, viewport: f64, window: f64) -> Self {
            // 260px cards with a 32px gap, as on a wide screen.
            let content = items as f64 * 260.0 + (items as f64 - 1.0) * 32.0;
            Self {
                left: Cell::new(0.0),
                content,
                viewport,
                window,
                commands: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakeStrip {
        fn metrics(&self) -> SurfaceMetrics {
            SurfaceMetrics {
                scroll_left: self.left.get(),
                scroll_width: self.content,
                client_width: self.viewport,
                window_width: self.window,
            }
        }

        fn scroll_by(&self, delta: f64, animated: bool) {
            self.commands.borrow_mut().push((delta, animated));
            let max = (self.content - self.viewport).max(0.0);
            self.left.set((self.left.get() + delta).clamp(0.0, max));
        }
    }

    fn catalog() -> AssetCatalog {
        let names = [
            "home", "login", "signup", "share", "stat1", "stat2", "setting", "repo1", "repo2",
        ];
        AssetCatalog::new(
            "/",
            names.iter().map(|n| format!("screenshots/{n}.jpg")).collect(),
            "icon.png",
        )
        .expect("catalog")
    }

    #[test]
    fn scroll_without_surface_is_a_noop() {
        let mut carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());
        let delta = carousel.scroll_by(None::<&FakeStrip>, Direction::Next);
        assert_eq!(delta, 0.0);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn next_nine_times_clamps_at_max_scroll() {
        let strip = FakeStrip::new(9, 1000.0, 1280.0);
        let max = strip.metrics().max_scroll();
        let mut carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());

        let mut last = 0.0;
        for _ in 0..9 {
            carousel.scroll_by(Some(&strip), Direction::Next);
            let offset = carousel.offset();
            assert!(offset >= last, "offset must not move backwards");
            assert!(offset <= max);
            last = offset;
        }

        assert_eq!(carousel.offset(), max);
        assert_eq!(strip.left.get(), max);
        assert!(carousel.at_end());
        // Commands stop once the end is reached.
        let commands = strip.commands.borrow();
        assert!(commands.iter().all(|&(d, animated)| d > 0.0 && animated));
        assert!(commands.len() < 9);
    }

    #[test]
    fn fresh_carousel_enables_next_until_measured() {
        let mut carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());
        assert!(carousel.at_start());
        assert!(!carousel.at_end());

        let strip = FakeStrip::new(9, 1000.0, 1280.0);
        carousel.sync(strip.metrics());
        assert!(!carousel.at_end());

        // Everything fits: both buttons dim once measured.
        let wide = FakeStrip::new(2, 1000.0, 1280.0);
        carousel.sync(wide.metrics());
        assert!(carousel.at_start() && carousel.at_end());
    }

    #[test]
    fn previous_moves_back_toward_zero() {
        let strip = FakeStrip::new(9, 1000.0, 1280.0);
        let mut carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());
        carousel.scroll_by(Some(&strip), Direction::Next);
        carousel.scroll_by(Some(&strip), Direction::Next);
        assert_eq!(carousel.offset(), 640.0);

        assert_eq!(carousel.scroll_by(Some(&strip), Direction::Previous), -320.0);
        assert_eq!(carousel.scroll_by(Some(&strip), Direction::Previous), -320.0);
        assert_eq!(carousel.scroll_by(Some(&strip), Direction::Previous), 0.0);
        assert_eq!(carousel.offset(), 0.0);
        assert!(carousel.at_start());
    }

    #[test]
    fn narrow_window_uses_short_step() {
        let strip = FakeStrip::new(9, 360.0, 390.0);
        let mut carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());
        assert_eq!(carousel.scroll_by(Some(&strip), Direction::Next), 240.0);
    }

    #[test]
    fn native_scroll_is_picked_up_before_stepping() {
        let strip = FakeStrip::new(9, 1000.0, 1280.0);
        let mut carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());
        strip.left.set(500.0);
        carousel.sync(strip.metrics());
        assert_eq!(carousel.offset(), 500.0);

        carousel.scroll_by(Some(&strip), Direction::Previous);
        assert_eq!(carousel.offset(), 180.0);
    }

    #[test]
    fn drag_mode_ignores_buttons_and_clamps_drags() {
        let strip = FakeStrip::new(9, 1000.0, 1280.0);
        let mut carousel = PreviewCarousel::dragging(catalog(), DragBounds::default());
        assert_eq!(carousel.mode(), CarouselMode::Drag);
        assert_eq!(carousel.scroll_by(Some(&strip), Direction::Next), 0.0);
        assert!(strip.commands.borrow().is_empty());

        for target in [-300.0, 50.0, -5000.0, -1199.5, 12.0, -1200.0] {
            let offset = carousel.drag_to(target);
            assert!((-1200.0..=0.0).contains(&offset));
        }
        assert_eq!(carousel.offset(), -1200.0);
        assert!(carousel.at_end());

        carousel.begin_drag(0.0);
        assert!(carousel.is_dragging());
        assert_eq!(carousel.drag_move(450.0), -750.0);
        assert!(!carousel.end_drag().tap);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn dragging_with_bad_bounds_uses_defaults() {
        let inverted = toml::from_str::<DragBounds>("min = 5.0\nmax = 1.0\n").expect("parse");
        let mut carousel = PreviewCarousel::dragging(catalog(), inverted);
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.drag_to(-5000.0), -1200.0);
        assert!(carousel.at_end());

        let nan = toml::from_str::<DragBounds>("min = nan\nmax = 0.0\n").expect("parse");
        let mut carousel = PreviewCarousel::dragging(catalog(), nan);
        assert_eq!(carousel.drag_to(300.0), 0.0);
        assert!(carousel.at_start());
    }

    #[test]
    fn scroll_mode_ignores_pointer_drags() {
        let mut carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());
        carousel.begin_drag(100.0);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.drag_move(-400.0), 0.0);
        assert_eq!(carousel.drag_to(-400.0), 0.0);
        assert!(carousel.end_drag().tap);
    }

    #[test]
    fn activate_maps_index_to_asset() {
        let carousel = PreviewCarousel::scrolling(catalog(), ScrollStep::default());
        let id = carousel.activate(3).expect("share");
        assert_eq!(carousel.catalog().label(id), "share");
        assert!(carousel.activate(9).is_none());
    }
}
