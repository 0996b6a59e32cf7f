//! Event handling.

use glade::{is_within, Element, Event, Key, TextInputState};

use crate::state::Autosuggest;

/// What an event meant to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// Event was not aimed at this widget.
    #[default]
    Ignored,
    /// Event was handled but no semantic action occurred.
    Handled,
    /// The input text changed.
    Changed,
    /// An option was chosen from the dropdown.
    Selected,
}

impl WidgetResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }
}

impl Autosuggest {
    /// Feed one processed event through the widget. `root` must be the
    /// tree the event was dispatched against, so containment checks see
    /// the same dropdown the user clicked.
    pub fn handle_event(
        &mut self,
        event: &Event,
        root: &Element,
        inputs: &mut TextInputState,
    ) -> WidgetResult {
        match event {
            Event::Change { target, text } if *target == self.input_id() => {
                self.text_changed(text, inputs);
                WidgetResult::Changed
            }

            Event::Click { target, .. } => match target {
                Some(t) if *t == self.input_id() => {
                    self.input_clicked();
                    WidgetResult::Handled
                }
                Some(t) if *t == self.toggle_id() => {
                    self.toggle_clicked();
                    WidgetResult::Handled
                }
                Some(t) => {
                    if let Some(index) = self.option_index(t) {
                        if self.select_option(index, inputs) {
                            return WidgetResult::Selected;
                        }
                        return WidgetResult::Handled;
                    }
                    if is_within(root, &self.wrapper_id(), t) {
                        // Inside the widget but not on anything actionable
                        return WidgetResult::Ignored;
                    }
                    self.outside_click();
                    WidgetResult::Ignored
                }
                None => {
                    self.outside_click();
                    WidgetResult::Ignored
                }
            },

            Event::Key {
                key: Key::Escape, ..
            } => {
                if self.escape_pressed() {
                    WidgetResult::Handled
                } else {
                    WidgetResult::Ignored
                }
            }

            // Keyboard activation of a focused option row
            Event::Key {
                target: Some(target),
                key: Key::Enter,
                ..
            } => match self.option_index(target) {
                Some(index) => {
                    if self.select_option(index, inputs) {
                        WidgetResult::Selected
                    } else {
                        WidgetResult::Handled
                    }
                }
                None => WidgetResult::Ignored,
            },

            _ => WidgetResult::Ignored,
        }
    }

    /// Feed a batch of processed events through the widget, returning
    /// the non-trivial results in order.
    pub fn handle_events(
        &mut self,
        events: &[Event],
        root: &Element,
        inputs: &mut TextInputState,
    ) -> Vec<WidgetResult> {
        events
            .iter()
            .map(|event| self.handle_event(event, root, inputs))
            .filter(WidgetResult::is_handled)
            .collect()
    }
}
