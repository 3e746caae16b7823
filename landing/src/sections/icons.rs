//! Inline stroke icons (Lucide style, 24x24 grid).

use leptos::prelude::*;

use streaks_core::SocialIcon;

/// Renders an inline SVG icon from path data.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_DOWNLOAD size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_DOWNLOAD: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3";
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";
pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";
pub const ICON_CHEVRON_LEFT: &str = "m15 18-6-6 6-6";
pub const ICON_CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";
pub const ICON_CODE: &str = "m16 18 6-6-6-6M8 6l-6 6 6 6";
pub const ICON_BAR_CHART: &str = "M3 3v18h18M18 17V9M13 17V5M8 17v-3";
pub const ICON_SHARE: &str = "M18 8a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM6 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM18 22a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM8.59 13.51l6.83 3.98M15.41 6.51l-6.82 3.98";
pub const ICON_SMARTPHONE: &str = "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM12 18h.01";
pub const ICON_GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2";
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z";
pub const ICON_INSTAGRAM: &str = "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01";

pub fn social_icon(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Github => ICON_GITHUB,
        SocialIcon::Linkedin => ICON_LINKEDIN,
        SocialIcon::X => ICON_X,
        SocialIcon::Instagram => ICON_INSTAGRAM,
    }
}
