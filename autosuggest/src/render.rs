//! Element tree construction.

use glade::{Color, Element, FocusState, Size, Style, TextInputData, TextInputState};

use crate::state::Autosuggest;

impl Autosuggest {
    /// Build the widget's element tree: a labeled input with a toggle
    /// affordance, the dropdown region (spinner while loading, matching
    /// options otherwise), and help or error feedback below.
    pub fn element(&self, inputs: &TextInputState, focus: &FocusState) -> Element {
        let input_id = self.input_id();
        let input_focused = focus.focused() == Some(input_id.as_str());
        let input_data = inputs
            .get_data(&input_id)
            .cloned()
            .unwrap_or_else(|| TextInputData::new(self.display_value.clone()));

        let mut input = Element::text_input("")
            .id(&input_id)
            .input_state(&input_data, input_focused)
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .clickable(true)
            .data("aria-expanded", if self.is_open() { "true" } else { "false" })
            .data("aria-owns", self.dropdown_id())
            .data(
                "aria-invalid",
                if self.error.is_some() { "true" } else { "false" },
            );
        if !self.placeholder.is_empty() {
            input = input.placeholder(&self.placeholder);
        }
        if self.read_only {
            input = input.captures_input(false);
        }

        let toggle = Element::text(if self.is_open() { "▴" } else { "▾" })
            .id(self.toggle_id())
            .width(Size::Fixed(1))
            .height(Size::Fixed(1))
            .clickable(true)
            .data(
                "aria-label",
                if self.is_open() {
                    self.messages.toggle_close.clone()
                } else {
                    self.messages.toggle_open.clone()
                },
            );

        let control = Element::row()
            .id(format!("{}-control", self.id))
            .gap(1)
            .height(Size::Fixed(1))
            .width(Size::Fill)
            .child(input)
            .child(toggle);

        // The wrapper itself is clickable so clicks anywhere inside the
        // widget resolve to an element within it; only clicks that miss
        // the wrapper entirely count as outside.
        let mut wrapper = Element::col()
            .id(self.wrapper_id())
            .width(Size::Fill)
            .clickable(true);

        if let Some(label) = &self.floating_label {
            wrapper = wrapper.child(
                Element::text(label)
                    .height(Size::Fixed(1))
                    .style(Style::new().dim()),
            );
        }

        wrapper = wrapper.child(control).child(self.dropdown());

        if let Some(feedback) = self.feedback() {
            wrapper = wrapper.child(feedback);
        }

        wrapper
    }

    fn dropdown(&self) -> Element {
        let dropdown = Element::col()
            .id(self.dropdown_id())
            .width(Size::Fill)
            .data("role", "list");

        if self.loading {
            return dropdown
                .height(Size::Fixed(1))
                .child(self.spinner.element(
                    format!("{}-spinner", self.id),
                    &self.messages.loading,
                ));
        }

        dropdown.children(self.menu.matches().iter().map(|&index| {
            let label = self
                .options
                .get(index)
                .map(|opt| opt.label())
                .unwrap_or_default();
            Element::text(label)
                .id(self.option_id(index))
                .width(Size::Fill)
                .height(Size::Fixed(1))
                .clickable(true)
                .focusable(true)
                .data("role", "option")
        }))
    }

    fn feedback(&self) -> Option<Element> {
        if let Some(error) = &self.error {
            return Some(
                Element::text(error)
                    .id(self.feedback_id())
                    .height(Size::Fixed(1))
                    .style(Style::new().foreground(Color::Red))
                    .data("feedback-for", self.name.clone()),
            );
        }

        if self.help_message.is_empty() {
            return None;
        }

        Some(
            Element::text(&self.help_message)
                .id(self.feedback_id())
                .height(Size::Fixed(1))
                .style(Style::new().dim()),
        )
    }
}
