use leptos::prelude::*;
use streaks_core::{ImageSource, NavMenu, SiteConfig};

use super::NAV_LINKS;
use super::icons::{ICON_DOWNLOAD, ICON_MENU, ICON_X, Icon};
use super::image::FallbackImage;

#[component]
pub fn Nav(site: StoredValue<SiteConfig>) -> impl IntoView {
    let menu = RwSignal::new(NavMenu::new());
    let is_open = move || menu.with(NavMenu::is_open);

    let (name, apk_url, logo) = site.with_value(|c| {
        let icon = c.asset_url(&c.assets.fallback);
        (
            c.site.name.clone(),
            c.site.apk_url.clone(),
            ImageSource::new(icon.clone(), icon),
        )
    });
    let mobile_apk_url = apk_url.clone();
    let logo_alt = name.clone();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-bar">
                    <a href="#" class="nav-brand">
                        <div class="nav-logo">
                            <FallbackImage source=logo alt=logo_alt />
                        </div>
                        <span class="nav-title">{name}</span>
                    </a>

                    <div class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
                            .collect_view()}
                        <a href=apk_url target="_blank" rel="noopener" class="nav-cta">
                            <Icon path=ICON_DOWNLOAD size="16" />
                            "Download APK"
                        </a>
                    </div>

                    <button
                        class="nav-toggle"
                        aria-label="Toggle navigation"
                        aria-expanded=move || if is_open() { "true" } else { "false" }
                        on:click=move |_| menu.update(|m| {
                            m.toggle();
                        })
                    >
                        {move || if is_open() {
                            view! { <Icon path=ICON_X /> }
                        } else {
                            view! { <Icon path=ICON_MENU /> }
                        }}
                    </button>
                </div>

                // Mobile panel; following a link collapses it
                <Show when=is_open>
                    <div class="nav-drawer">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a href=*href class="nav-drawer-link" on:click=move |_| menu.update(NavMenu::close)>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a href=mobile_apk_url.clone() target="_blank" rel="noopener" class="nav-cta nav-cta-block">
                            <Icon path=ICON_DOWNLOAD size="16" />
                            "Download APK"
                        </a>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
