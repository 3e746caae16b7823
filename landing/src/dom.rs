//! Browser-backed implementations of the core's host traits.

use streaks_core::{MetadataHost, ScrollSurface, SurfaceMetrics};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// The document `<head>` plus the root elements whose overflow is locked.
pub struct DomHead {
    document: Document,
    head: Element,
}

impl DomHead {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let head = document.head()?.into();
        Some(Self { document, head })
    }

    fn roots(&self) -> Vec<HtmlElement> {
        let root = self
            .document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        root.into_iter().chain(self.document.body()).collect()
    }

    fn append(&self, tag: &str, attrs: &[(&str, &str)]) -> Option<Element> {
        let el = self.document.create_element(tag).ok()?;
        for (name, value) in attrs {
            el.set_attribute(name, value).ok()?;
        }
        self.head.append_child(&el).ok()?;
        Some(el)
    }
}

impl MetadataHost for DomHead {
    type Node = Element;
    type OverflowSnapshot = Vec<(HtmlElement, String)>;

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn append_meta(&mut self, name: &str, content: &str) -> Option<Element> {
        self.append("meta", &[("name", name), ("content", content)])
    }

    fn append_link(&mut self, rel: &str, href: &str) -> Option<Element> {
        self.append("link", &[("rel", rel), ("href", href)])
    }

    fn remove(&mut self, node: Element) {
        node.remove();
    }

    fn lock_overflow_x(&mut self) -> Self::OverflowSnapshot {
        self.roots()
            .into_iter()
            .map(|el| {
                let style = el.style();
                let previous = style.get_property_value("overflow-x").unwrap_or_default();
                if let Err(e) = style.set_property("overflow-x", "hidden") {
                    tracing::debug!(?e, "could not lock overflow-x");
                }
                (el, previous)
            })
            .collect()
    }

    fn restore_overflow_x(&mut self, snapshot: Self::OverflowSnapshot) {
        for (el, previous) in snapshot {
            let style = el.style();
            let restored = if previous.is_empty() {
                style.remove_property("overflow-x").map(|_| ())
            } else {
                style.set_property("overflow-x", &previous)
            };
            if let Err(e) = restored {
                tracing::debug!(?e, "could not restore overflow-x");
            }
        }
    }
}

/// The carousel strip element, borrowed for one scroll command.
pub struct DomStrip<'a>(pub &'a HtmlElement);

impl ScrollSurface for DomStrip<'_> {
    fn metrics(&self) -> SurfaceMetrics {
        let window_width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        SurfaceMetrics {
            scroll_left: f64::from(self.0.scroll_left()),
            scroll_width: f64::from(self.0.scroll_width()),
            client_width: f64::from(self.0.client_width()),
            window_width,
        }
    }

    fn scroll_by(&self, delta: f64, animated: bool) {
        let options = ScrollToOptions::new();
        options.set_left(delta);
        options.set_behavior(if animated {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        self.0.scroll_by_with_scroll_to_options(&options);
    }
}
