use leptos::prelude::*;
use streaks_core::ImageSource;

/// `<img>` that swaps to the placeholder once if the source fails to load.
#[component]
pub fn FallbackImage(
    source: ImageSource,
    #[prop(into)] alt: String,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let source = RwSignal::new(source);

    view! {
        <img
            src=move || source.with(|s| s.current().to_string())
            alt=alt
            class=class
            loading="lazy"
            draggable="false"
            on:error=move |_| source.update(|s| {
                s.fail();
            })
        />
    }
}
