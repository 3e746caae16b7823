//! Collapsible navigation panel shown on narrow screens.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Collapse the panel, e.g. after one of its links was followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}
