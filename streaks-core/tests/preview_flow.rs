//! End-to-end flow over the public API: config -> carousel -> lightbox.

use std::cell::Cell;

use streaks_core::{
    Direction, Lightbox, LightboxState, NavMenu, ScrollSurface, SiteConfig, SurfaceMetrics,
};

const SCREENS: [&str; 9] = [
    "home", "login", "signup", "share", "stat1", "stat2", "setting", "repo1", "repo2",
];

struct Strip {
    left: Cell<f64>,
    width: f64,
    viewport: f64,
}

impl ScrollSurface for Strip {
    fn metrics(&self) -> SurfaceMetrics {
        SurfaceMetrics {
            scroll_left: self.left.get(),
            scroll_width: self.width,
            client_width: self.viewport,
            window_width: 390.0,
        }
    }

    fn scroll_by(&self, delta: f64, _animated: bool) {
        let max = (self.width - self.viewport).max(0.0);
        self.left.set((self.left.get() + delta).clamp(0.0, max));
    }
}

#[test]
fn default_site_lists_the_nine_screenshots() {
    let config = SiteConfig::default();
    let catalog = config.catalog().expect("catalog");
    let labels: Vec<&str> = catalog.ids().map(|id| catalog.label(id)).collect();
    assert_eq!(labels, SCREENS);
}

#[test]
fn clicking_every_item_opens_a_known_asset() {
    let config = SiteConfig::default();
    let carousel = config.carousel().expect("carousel");
    let catalog = carousel.catalog();
    let mut lightbox = Lightbox::new();

    for (index, name) in SCREENS.iter().enumerate() {
        let id = carousel.activate(index).expect("index inside list");
        lightbox.open(id);
        assert_eq!(lightbox.state(), LightboxState::Open(id));
        assert_eq!(catalog.url(id), format!("/screenshots/{name}.jpg"));
        lightbox.close();
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }
}

#[test]
fn mobile_strip_scrolls_to_the_end_and_back() {
    let config = SiteConfig::default();
    let mut carousel = config.carousel().expect("carousel");
    // 9 cards of 220px with 32px gaps on a phone.
    let strip = Strip {
        left: Cell::new(0.0),
        width: 9.0 * 220.0 + 8.0 * 32.0,
        viewport: 342.0,
    };
    let max = strip.metrics().max_scroll();

    for _ in 0..SCREENS.len() {
        carousel.scroll_by(Some(&strip), Direction::Next);
        assert!(carousel.offset() <= max);
    }
    assert_eq!(carousel.offset(), max);
    assert_eq!(strip.left.get(), max);

    while !carousel.at_start() {
        carousel.scroll_by(Some(&strip), Direction::Previous);
    }
    assert_eq!(carousel.offset(), 0.0);
}

#[test]
fn nav_link_collapses_open_menu() {
    let mut menu = NavMenu::new();
    menu.toggle();
    assert!(menu.is_open());
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn shipped_site_toml_is_valid() {
    let shipped = SiteConfig::from_toml_str(include_str!("../../landing/site.toml"))
        .expect("landing/site.toml must parse");
    let defaults = SiteConfig::default();

    assert_eq!(shipped.site, defaults.site);
    assert_eq!(shipped.assets, defaults.assets);
    assert_eq!(shipped.social, defaults.social);
    assert_eq!(shipped.carousel.step, defaults.carousel.step);
    assert_eq!(
        shipped.carousel.drag_bounds,
        Some(streaks_core::DragBounds::default())
    );
}
