//! Spinner widget for loading states.

use glade::{Element, Style};

const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// A braille spinner advanced by the caller's render loop.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next frame. Call once per render tick.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// Build the spinner element. `label` is the screen reader text
    /// rendered next to the glyph.
    pub fn element(&self, id: impl Into<String>, label: &str) -> Element {
        Element::row()
            .id(id)
            .gap(1)
            .data("role", "status")
            .child(Element::text(FRAMES[self.frame].to_string()))
            .child(Element::text(label).style(Style::new().dim()))
    }
}
