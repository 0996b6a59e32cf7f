use std::fmt;

/// One selectable entry: a visible label plus an optional callback fired
/// when the entry is chosen.
pub struct SuggestOption {
    pub(crate) label: String,
    pub(crate) on_select: Option<Box<dyn FnMut()>>,
}

impl SuggestOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_select: None,
        }
    }

    /// Attach a callback invoked when this option is chosen, in addition
    /// to the widget-level selection callback.
    pub fn on_select(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for SuggestOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestOption")
            .field("label", &self.label)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl From<&str> for SuggestOption {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for SuggestOption {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}
