use std::collections::HashMap;

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};
use crate::layout::LayoutResult;

/// Value and cursor for one text input. The cursor is a byte offset into
/// `text`, always on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = prev_boundary(&self.text, self.cursor);
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = next_boundary(&self.text, self.cursor);
        self.text.replace_range(self.cursor..next, "");
        true
    }

    fn move_left(&mut self) {
        self.cursor = prev_boundary(&self.text, self.cursor);
    }

    fn move_right(&mut self) {
        self.cursor = next_boundary(&self.text, self.cursor);
    }
}

fn prev_boundary(text: &str, from: usize) -> usize {
    text[..from]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(text: &str, from: usize) -> usize {
    text[from..]
        .chars()
        .next()
        .map(|ch| from + ch.len_utf8())
        .unwrap_or(text.len())
}

enum TextEditResult {
    Changed,
    Submitted,
    Handled,
    Ignored,
}

/// Holds the editable state of every text input in the tree, keyed by
/// element ID. Key events targeted at an input become edits here.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of an input, empty if it has never been touched.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    pub fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Overwrite an input's text, cursor at the end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.get_data_mut(id).set_text(text);
    }

    /// Consume key events addressed to text inputs, producing Change and
    /// Submit events. Everything else passes through untouched.
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        _layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut out = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                let is_input = find_element(root, target)
                    .map(|el| el.captures_input && !el.disabled)
                    .unwrap_or(false);

                if is_input {
                    let data = self.get_data_mut(target);
                    match handle_key(data, *key, *modifiers) {
                        TextEditResult::Changed => {
                            let text = data.text.clone();
                            log::debug!("[input] {target} changed to {text:?}");
                            out.push(Event::Change {
                                target: target.clone(),
                                text,
                            });
                            continue;
                        }
                        TextEditResult::Submitted => {
                            out.push(Event::Submit {
                                target: target.clone(),
                            });
                            continue;
                        }
                        TextEditResult::Handled => continue,
                        TextEditResult::Ignored => {}
                    }
                }
            }

            out.push(event.clone());
        }

        out
    }
}

fn handle_key(data: &mut TextInputData, key: Key, modifiers: Modifiers) -> TextEditResult {
    match key {
        Key::Char(ch) if !modifiers.ctrl && !modifiers.alt => {
            data.insert(ch);
            TextEditResult::Changed
        }
        Key::Backspace => {
            if data.backspace() {
                TextEditResult::Changed
            } else {
                TextEditResult::Handled
            }
        }
        Key::Delete => {
            if data.delete() {
                TextEditResult::Changed
            } else {
                TextEditResult::Handled
            }
        }
        Key::Left => {
            data.move_left();
            TextEditResult::Handled
        }
        Key::Right => {
            data.move_right();
            TextEditResult::Handled
        }
        Key::Home => {
            data.cursor = 0;
            TextEditResult::Handled
        }
        Key::End => {
            data.cursor = data.text.len();
            TextEditResult::Handled
        }
        Key::Enter => TextEditResult::Submitted,
        _ => TextEditResult::Ignored,
    }
}
