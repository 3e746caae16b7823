// Dev Streaks Landing Page — Leptos 0.8 Edition

mod dom;
mod logging;
mod sections;

use leptos::prelude::*;
use sections::*;
use streaks_core::{MetadataGuard, SiteConfig};

/// Page configuration, compiled into the bundle.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = SiteConfig::load_or_default(SITE_TOML);
    tracing::info!(
        screenshots = config.assets.screenshots.len(),
        mode = ?config.carousel.mode,
        "mounting landing page"
    );
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    hold_page_metadata(&config);
    let site = StoredValue::new(config);

    view! {
        <div class="page">
            <Nav site=site />
            <main>
                <Hero site=site />
                <Features />
                <Preview site=site />
            </main>
            <Footer site=site />
        </div>
    }
}

/// Apply title/description/favicon for as long as the app is mounted.
fn hold_page_metadata(config: &SiteConfig) {
    let Some(head) = dom::DomHead::new() else {
        tracing::warn!("no document head, page metadata not applied");
        return;
    };
    let guard = StoredValue::new_local(Some(MetadataGuard::acquire(head, &config.metadata())));
    on_cleanup(move || {
        guard.try_update_value(|g| g.take());
    });
}
