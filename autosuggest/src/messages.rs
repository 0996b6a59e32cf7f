/// User-facing strings for the widget chrome. Callers swap these out
/// for localized text.
#[derive(Debug, Clone)]
pub struct Messages {
    /// Accessible label of the toggle while the menu is closed.
    pub toggle_open: String,
    /// Accessible label of the toggle while the menu is open.
    pub toggle_close: String,
    /// Screen reader text announced while options are loading.
    pub loading: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            toggle_open: "Open the options menu".to_string(),
            toggle_close: "Close the options menu".to_string(),
            loading: "loading".to_string(),
        }
    }
}
