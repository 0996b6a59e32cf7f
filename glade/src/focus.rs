use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Controls how keyboard traversal walks the focusable elements.
#[derive(Debug, Clone)]
pub struct TraversalOptions {
    /// Restrict traversal to focusable descendants of this element.
    /// When None, the whole tree participates.
    pub scope: Option<String>,
    /// Keys that never move focus and are delivered to the focused
    /// element instead. Left/Right are ignored by default so text
    /// inputs keep cursor movement.
    pub ignored_keys: Vec<Key>,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            scope: None,
            ignored_keys: vec![Key::Left, Key::Right],
        }
    }
}

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    options: TraversalOptions,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TraversalOptions) -> Self {
        Self {
            focused: None,
            options,
        }
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    fn traversal_list(&self, root: &Element) -> Vec<String> {
        let scope_root = self
            .options
            .scope
            .as_deref()
            .and_then(|id| find_element(root, id))
            .unwrap_or(root);
        collect_focusable(scope_root)
    }

    /// Focus the next focusable element (Tab navigation). Wraps.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = self.traversal_list(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                    None => focusable[0].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous focusable element (Shift+Tab navigation). Wraps.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = self.traversal_list(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(0) => focusable[focusable.len() - 1].clone(),
                    Some(i) => focusable[i - 1].clone(),
                    None => focusable[focusable.len() - 1].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Move focus one step along the traversal list without wrapping.
    /// Used for Up/Down arrow traversal.
    fn focus_step(&mut self, root: &Element, forward: bool) -> Option<String> {
        let focusable = self.traversal_list(root);
        if focusable.is_empty() {
            return None;
        }

        let current = self.focused.as_ref()?;
        let idx = focusable.iter().position(|id| id == current)?;

        let new_idx = if forward {
            if idx + 1 >= focusable.len() {
                return None;
            }
            idx + 1
        } else {
            idx.checked_sub(1)?
        };

        let new_focus = focusable[new_idx].clone();
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }

    /// Process raw crossterm events and produce high-level events.
    /// Clicks move focus to the focusable element under the pointer;
    /// clicking empty space blurs.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let Ok(key) = Key::try_from(key_event.code) else {
                        continue;
                    };
                    let modifiers: Modifiers = key_event.modifiers.into();

                    // Tab/BackTab cycle through focusables
                    if key == Key::Tab {
                        if let Some(old) = self.focused.clone() {
                            if let Some(new) = self.focus_next(root) {
                                events.push(Event::Blur { target: old });
                                events.push(Event::Focus { target: new });
                            }
                        } else if let Some(new) = self.focus_next(root) {
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    if key == Key::BackTab {
                        if let Some(old) = self.focused.clone() {
                            if let Some(new) = self.focus_prev(root) {
                                events.push(Event::Blur { target: old });
                                events.push(Event::Focus { target: new });
                            }
                        } else if let Some(new) = self.focus_prev(root) {
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    // Up/Down walk the traversal list unless the key is in
                    // the ignored list. Ignored keys (and Left/Right inside
                    // a text input) go to the focused element untouched.
                    let is_arrow = matches!(key, Key::Up | Key::Down | Key::Left | Key::Right);
                    if is_arrow && modifiers.none() && !self.options.ignored_keys.contains(&key) {
                        let focused_captures_input = self
                            .focused
                            .as_ref()
                            .and_then(|id| find_element(root, id))
                            .map(|el| el.captures_input)
                            .unwrap_or(false);

                        let horizontal = matches!(key, Key::Left | Key::Right);
                        if !(horizontal && focused_captures_input) {
                            let forward = matches!(key, Key::Down | Key::Right);
                            if let Some(old) = self.focused.clone() {
                                if let Some(new) = self.focus_step(root, forward) {
                                    log::debug!("[focus] arrow traversal {old} -> {new}");
                                    events.push(Event::Blur { target: old });
                                    events.push(Event::Focus { target: new });
                                    continue;
                                }
                            }
                        }
                        // No movement: fall through to a plain key event
                    }

                    // Regular key event (Escape included; widgets decide
                    // what closing or blurring means for them)
                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        // Focus follows click
                        match hit_test_focusable(layout, root, x, y) {
                            Some(hit) => {
                                if self.focused.as_ref() != Some(&hit) {
                                    log::debug!(
                                        "[focus] click focus {:?} -> {hit}",
                                        self.focused
                                    );
                                    if let Some(old) = self.focused.take() {
                                        events.push(Event::Blur { target: old });
                                    }
                                    self.focused = Some(hit.clone());
                                    events.push(Event::Focus { target: hit });
                                }
                            }
                            None => {
                                if let Some(old) = self.focused.take() {
                                    log::debug!("[focus] click on empty space blurs {old}");
                                    events.push(Event::Blur { target: old });
                                }
                            }
                        }

                        let target = hit_test(layout, root, x, y);
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Collect all focusable element IDs in tree order. Disabled elements
/// and their subtrees are skipped.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.disabled {
        return;
    }
    if element.focusable {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
