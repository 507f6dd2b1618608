//! Dropdown open/closed state.

/// Which dropdown, if any, is expanded.
///
/// Dropdowns open and close on click: activating a closed dropdown opens
/// it and closes any other, activating the open one closes it, and
/// activation anywhere else closes everything. At most one dropdown is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<String>,
}

impl MenuState {
    /// Create a state with every dropdown closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the dropdown trigger for `id`.
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_owned());
        }
    }

    /// Close whichever dropdown is open.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// True if the dropdown for `id` is expanded.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    /// Id of the expanded dropdown.
    #[must_use]
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}
