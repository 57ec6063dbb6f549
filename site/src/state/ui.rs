//! Cross-component interface state: navigation drawer and transition veil.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Interface flags shared as an `RwSignal<UiState>` context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile navigation drawer visibility.
    pub drawer_open: bool,
    /// Whether the page-transition veil is covering the viewport.
    pub veil_active: bool,
}

impl UiState {
    /// Flip the drawer.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Close the drawer; link activations and route changes go through here.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}
