use leptos::prelude::*;
use streaks_core::{ImageSource, SiteConfig};

use super::icons::{ICON_DOWNLOAD, Icon};
use super::image::FallbackImage;

#[component]
pub fn Hero(site: StoredValue<SiteConfig>) -> impl IntoView {
    let (name, tagline, apk_url) = site.with_value(|c| {
        (
            c.site.name.clone(),
            c.site.tagline.clone(),
            c.site.apk_url.clone(),
        )
    });
    // Phone mockup shows the first screenshot
    let mockup = site.with_value(|c| match c.catalog() {
        Ok(catalog) => catalog.ids().next().map(|id| catalog.source(id)),
        Err(_) => None,
    });
    let placeholder = site.with_value(|c| {
        let icon = c.asset_url(&c.assets.fallback);
        ImageSource::new(icon.clone(), icon)
    });

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">{name}" 🚀"</h1>
                        <p class="hero-description">{tagline}</p>
                        <div class="hero-actions">
                            <a href="#preview" class="btn btn-primary">
                                "View App"
                            </a>
                            <a href=apk_url target="_blank" rel="noopener" class="btn btn-accent">
                                <Icon path=ICON_DOWNLOAD size="18" />
                                "Download APK"
                            </a>
                        </div>
                    </div>
                    <div class="hero-phone">
                        <div class="phone-frame">
                            <FallbackImage
                                source=mockup.unwrap_or(placeholder)
                                alt="App home screen"
                                class="phone-screen"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
