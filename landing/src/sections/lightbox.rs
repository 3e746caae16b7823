use leptos::ev;
use leptos::prelude::*;
use streaks_core::{AssetCatalog, Lightbox};

use super::icons::{ICON_X, Icon};
use super::image::FallbackImage;

/// Full-screen view of the selected screenshot.
///
/// Dismissed by the close button, a click on the backdrop or Escape.
#[component]
pub fn LightboxOverlay(lightbox: RwSignal<Lightbox>, catalog: AssetCatalog) -> impl IntoView {
    let catalog = StoredValue::new(catalog);
    let close = move || {
        lightbox.update(|l| {
            l.close();
        })
    };

    let keys = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && lightbox.with_untracked(Lightbox::is_open) {
            close();
        }
    });
    on_cleanup(move || keys.remove());

    view! {
        <Show when=move || lightbox.with(Lightbox::is_open)>
            <div class="lightbox" role="dialog" aria-modal="true" on:click=move |_| close()>
                <button
                    class="lightbox-close"
                    aria-label="Close preview"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        close();
                    }
                >
                    <Icon path=ICON_X size="28" />
                </button>
                {move || {
                    lightbox
                        .with(Lightbox::current)
                        .map(|id| {
                            let (source, alt) = catalog
                                .with_value(|c| (c.source(id), format!("{} screen", c.label(id))));
                            view! {
                                <div class="lightbox-frame" on:click=|ev| ev.stop_propagation()>
                                    <FallbackImage source=source alt=alt class="lightbox-image" />
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
