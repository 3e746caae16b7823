// Landing page sections

mod features;
mod footer;
mod hero;
mod icons;
mod image;
mod lightbox;
mod nav;
mod preview;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use preview::Preview;

/// In-page anchors shared by the nav bar and the mobile menu.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#preview", "Preview"),
    ("#about", "About"),
];
