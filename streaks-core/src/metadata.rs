//! Document head metadata held for the lifetime of the page shell.
//!
//! [`MetadataGuard::acquire`] sets the title, inserts the description and
//! favicon elements and locks horizontal page overflow. Dropping the guard
//! removes exactly what was inserted and restores the previous title and
//! overflow styles.

/// Title, description and favicon of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Resolved favicon URL.
    pub favicon: String,
}

/// Something that owns a document head.
pub trait MetadataHost {
    /// Handle to an inserted head element.
    type Node;
    /// Overflow styles captured before locking, used to restore them.
    type OverflowSnapshot;

    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);

    /// Append `<meta name=.. content=..>`. `None` when the element could not be created.
    fn append_meta(&mut self, name: &str, content: &str) -> Option<Self::Node>;

    /// Append `<link rel=.. href=..>`. `None` when the element could not be created.
    fn append_link(&mut self, rel: &str, href: &str) -> Option<Self::Node>;

    fn remove(&mut self, node: Self::Node);

    /// Hide horizontal overflow on the page, returning what was there before.
    fn lock_overflow_x(&mut self) -> Self::OverflowSnapshot;
    fn restore_overflow_x(&mut self, snapshot: Self::OverflowSnapshot);
}

/// Scoped ownership of the page metadata; released on drop.
pub struct MetadataGuard<H: MetadataHost> {
    host: H,
    previous_title: String,
    inserted: Vec<H::Node>,
    overflow: Option<H::OverflowSnapshot>,
}

impl<H: MetadataHost> MetadataGuard<H> {
    pub fn acquire(mut host: H, metadata: &PageMetadata) -> Self {
        let previous_title = host.title();
        host.set_title(&metadata.title);

        let inserted: Vec<H::Node> = [
            host.append_meta("description", &metadata.description),
            host.append_link("icon", &metadata.favicon),
        ]
        .into_iter()
        .flatten()
        .collect();
        if inserted.len() < 2 {
            tracing::warn!("some head elements could not be inserted");
        }

        let overflow = Some(host.lock_overflow_x());
        tracing::debug!(title = %metadata.title, "page metadata acquired");

        Self {
            host,
            previous_title,
            inserted,
            overflow,
        }
    }

    /// Number of head elements this guard will remove on release.
    pub fn inserted(&self) -> usize {
        self.inserted.len()
    }

    /// Release explicitly; same as dropping the guard.
    pub fn release(self) {}
}

impl<H: MetadataHost> Drop for MetadataGuard<H> {
    fn drop(&mut self) {
        for node in self.inserted.drain(..) {
            self.host.remove(node);
        }
        self.host.set_title(&self.previous_title);
        if let Some(snapshot) = self.overflow.take() {
            self.host.restore_overflow_x(snapshot);
        }
        tracing::debug!("page metadata released");
    }
}
