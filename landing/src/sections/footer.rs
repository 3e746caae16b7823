use leptos::prelude::*;
use streaks_core::SiteConfig;

use super::icons::{Icon, social_icon};

#[component]
pub fn Footer(site: StoredValue<SiteConfig>) -> impl IntoView {
    let (credit, aside, tech_line, social) = site.with_value(|c| {
        (
            c.site.credit.clone(),
            c.site.credit_aside.clone(),
            c.site.tech_line.clone(),
            c.social.clone(),
        )
    });

    view! {
        <footer id="about" class="footer">
            <div class="container">
                <p class="footer-credit">
                    {credit}" "
                    <span class="footer-credit-aside">{aside}</span>
                </p>
                <div class="footer-links">
                    {social
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener"
                                    class="footer-link"
                                    aria-label=link.label
                                >
                                    <Icon path=social_icon(link.icon) />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="footer-tech">{tech_line}</p>
            </div>
        </footer>
    }
}
