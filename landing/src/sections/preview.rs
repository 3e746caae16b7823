//! Screenshot strip with previous/next buttons or pointer dragging.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use streaks_core::{
    CarouselMode, Direction, DragBounds, DragRelease, Lightbox, PreviewCarousel, ScrollSurface,
    SiteConfig,
};

use super::icons::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, Icon};
use super::image::FallbackImage;
use super::lightbox::LightboxOverlay;
use crate::dom::DomStrip;

#[component]
pub fn Preview(site: StoredValue<SiteConfig>) -> impl IntoView {
    let initial = match site.with_value(SiteConfig::carousel) {
        Ok(carousel) => carousel,
        Err(e) => {
            tracing::error!("preview disabled: {e}");
            return ().into_any();
        }
    };
    let (lightbox_enabled, derive_bounds) =
        site.with_value(|c| (c.carousel.lightbox, c.carousel.drag_bounds.is_none()));
    let drag_mode = initial.mode() == CarouselMode::Drag;
    let catalog = initial.catalog().clone();

    let carousel = RwSignal::new(initial);
    let lightbox = RwSignal::new(Lightbox::new());
    let last_release = StoredValue::new(DragRelease { tap: true });
    let strip_ref = NodeRef::<html::Div>::new();
    let track_ref = NodeRef::<html::Div>::new();

    let scroll = move |direction: Direction| {
        let strip = strip_ref.get_untracked();
        let surface = strip.as_deref().map(DomStrip);
        carousel.update(|c| {
            c.scroll_by(surface.as_ref(), direction);
        });
    };

    let sync_scroll = move |_| {
        if let Some(strip) = strip_ref.get_untracked() {
            let metrics = DomStrip(&strip).metrics();
            carousel.update(|c| c.sync(metrics));
        }
    };

    let end_drag = move || {
        if drag_mode && carousel.with_untracked(PreviewCarousel::is_dragging) {
            let release = carousel
                .try_update(PreviewCarousel::end_drag)
                .unwrap_or(DragRelease { tap: true });
            last_release.set_value(release);
        }
    };

    if !drag_mode {
        let measure = move || {
            if let Some(strip) = strip_ref.get_untracked() {
                let metrics = DomStrip(&strip).metrics();
                carousel.update(|c| c.sync(metrics));
            }
        };
        Effect::new(move || {
            if strip_ref.get().is_some() {
                measure();
            }
        });
        let resize = window_event_listener(ev::resize, move |_| measure());
        on_cleanup(move || resize.remove());
    }

    if drag_mode && derive_bounds {
        let fit_bounds = move || {
            let (Some(strip), Some(track)) = (strip_ref.get_untracked(), track_ref.get_untracked())
            else {
                return;
            };
            let bounds = DragBounds::for_content(
                f64::from(track.scroll_width()),
                f64::from(strip.client_width()),
            );
            carousel.update(|c| c.set_drag_bounds(bounds));
        };
        Effect::new(move || {
            if strip_ref.get().is_some() {
                fit_bounds();
            }
        });
        let resize = window_event_listener(ev::resize, move |_| fit_bounds());
        on_cleanup(move || resize.remove());
    }

    let items = catalog
        .ids()
        .map(|id| {
            let source = catalog.source(id);
            let alt = format!("{} screen", catalog.label(id));
            let index = id.index();
            let activate = move |_| {
                if !lightbox_enabled || !last_release.get_value().tap {
                    return;
                }
                if let Some(id) = carousel.with_untracked(|c| c.activate(index)) {
                    lightbox.update(|l| l.open(id));
                }
            };
            view! {
                <figure class="preview-card" class:clickable=lightbox_enabled on:click=activate>
                    <FallbackImage source=source alt=alt class="preview-image" />
                </figure>
            }
        })
        .collect_view();

    let strip_class = if drag_mode {
        "preview-strip preview-strip-drag"
    } else {
        "preview-strip"
    };

    view! {
        <section id="preview" class="preview">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Live App Preview"</h2>
                </div>
            </div>
            <div class="preview-frame">
                {(!drag_mode).then(|| view! {
                    <button
                        class="preview-nav preview-nav-prev"
                        class:dim=move || carousel.with(PreviewCarousel::at_start)
                        aria-label="Previous screenshots"
                        on:click=move |_| scroll(Direction::Previous)
                    >
                        <Icon path=ICON_CHEVRON_LEFT />
                    </button>
                })}

                <div
                    node_ref=strip_ref
                    class=strip_class
                    on:scroll=sync_scroll
                    on:pointerdown=move |ev| {
                        if drag_mode {
                            if let Some(strip) = strip_ref.get_untracked() {
                                if let Err(e) = strip.set_pointer_capture(ev.pointer_id()) {
                                    tracing::debug!("pointer capture unavailable: {e:?}");
                                }
                            }
                            carousel.update(|c| c.begin_drag(f64::from(ev.client_x())));
                        }
                    }
                    on:pointermove=move |ev| {
                        if drag_mode && carousel.with_untracked(PreviewCarousel::is_dragging) {
                            carousel.update(|c| {
                                c.drag_move(f64::from(ev.client_x()));
                            });
                        }
                    }
                    on:pointerup=move |_| end_drag()
                    on:pointercancel=move |_| end_drag()
                    on:lostpointercapture=move |_| end_drag()
                >
                    <div
                        node_ref=track_ref
                        class="preview-track"
                        class:dragging=move || carousel.with(PreviewCarousel::is_dragging)
                        style:transform=move || {
                            if drag_mode {
                                format!("translateX({}px)", carousel.with(PreviewCarousel::offset))
                            } else {
                                "none".to_string()
                            }
                        }
                    >
                        {items}
                    </div>
                </div>

                {(!drag_mode).then(|| view! {
                    <button
                        class="preview-nav preview-nav-next"
                        class:dim=move || carousel.with(PreviewCarousel::at_end)
                        aria-label="Next screenshots"
                        on:click=move |_| scroll(Direction::Next)
                    >
                        <Icon path=ICON_CHEVRON_RIGHT />
                    </button>
                })}
            </div>

            {lightbox_enabled.then(|| view! { <LightboxOverlay lightbox=lightbox catalog=catalog.clone() /> })}
        </section>
    }
    .into_any()
}
