use std::cell::RefCell;
use std::rc::Rc;

use autosuggest::{Autosuggest, SuggestOption, WidgetResult};
use glade::{find_element, Content, Event, FocusState, Key, Modifiers, MouseButton, TextInputState};

fn sample() -> Autosuggest {
    Autosuggest::new([
        "Option 1",
        "Option 2",
        "Learn from more than 160 member universities",
    ])
    .error_message_text("Select an option")
    .help_message("Start typing to search")
}

fn click(target: &str) -> Event {
    Event::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

fn change(target: &str, text: &str) -> Event {
    Event::Change {
        target: target.to_string(),
        text: text.to_string(),
    }
}

fn escape() -> Event {
    Event::Key {
        target: None,
        key: Key::Escape,
        modifiers: Modifiers::default(),
    }
}

/// Dispatch one event against a freshly built tree, the way the render
/// loop would.
fn drive(widget: &mut Autosuggest, inputs: &mut TextInputState, event: Event) -> WidgetResult {
    let focus = FocusState::new();
    let root = widget.element(inputs, &focus);
    widget.handle_event(&event, &root, inputs)
}

#[test]
fn typing_filters_and_opens() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();

    let result = drive(&mut widget, &mut inputs, change(&input_id, "Option 1"));
    assert_eq!(result, WidgetResult::Changed);
    assert!(widget.is_open());
    assert_eq!(widget.matched_labels(), vec!["Option 1"]);

    // "1" also matches the "160" in the long label
    drive(&mut widget, &mut inputs, change(&input_id, "1"));
    assert_eq!(
        widget.matched_labels(),
        vec!["Option 1", "Learn from more than 160 member universities"]
    );
}

#[test]
fn clearing_the_text_closes_the_menu() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();

    drive(&mut widget, &mut inputs, change(&input_id, "opt"));
    assert!(widget.is_open());

    drive(&mut widget, &mut inputs, change(&input_id, ""));
    assert!(!widget.is_open());
    assert!(widget.matched_labels().is_empty());
}

#[test]
fn text_with_no_match_does_not_open() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();

    drive(&mut widget, &mut inputs, change(&input_id, "zzz no match"));
    assert!(!widget.is_open());
}

#[test]
fn typed_text_snaps_to_the_option_spelling() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();

    drive(&mut widget, &mut inputs, change(&input_id, "oPtIoN 2"));
    assert_eq!(widget.display_value(), "Option 2");
    assert_eq!(inputs.get(&input_id), "Option 2");
}

#[test]
fn on_change_fires_on_every_keystroke() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::clone(&seen);
    let mut widget = sample().on_change(move |text| captured.borrow_mut().push(text.to_string()));
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();

    drive(&mut widget, &mut inputs, change(&input_id, "o"));
    drive(&mut widget, &mut inputs, change(&input_id, "op"));
    assert_eq!(*seen.borrow(), vec!["o", "op"]);
}

#[test]
fn toggle_cycles_between_open_and_closed() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();

    drive(&mut widget, &mut inputs, click(&toggle_id));
    assert!(widget.is_open());
    assert_eq!(widget.matched_labels().len(), 3);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    assert!(!widget.is_open());
    assert!(widget.matched_labels().is_empty());

    drive(&mut widget, &mut inputs, click(&toggle_id));
    assert!(widget.is_open());
    assert_eq!(widget.matched_labels().len(), 3);
}

#[test]
fn toggle_filters_by_the_current_display_value() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();
    widget.set_value("Option", &mut inputs);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    assert_eq!(widget.matched_labels(), vec!["Option 1", "Option 2"]);
}

#[test]
fn input_click_opens_only_with_more_than_one_match() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();

    // Empty text: all three options match, so the menu opens
    drive(&mut widget, &mut inputs, click(&input_id));
    assert!(widget.is_open());

    // A single match keeps the menu closed on input click
    let mut widget = sample();
    let input_id = widget.input_id();
    widget.set_value("Option 1", &mut inputs);
    drive(&mut widget, &mut inputs, click(&input_id));
    assert!(!widget.is_open());
    assert!(widget.is_active());
}

#[test]
fn clicking_an_option_selects_it() {
    let selected = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::clone(&selected);
    let mut widget =
        sample().on_selected(move |label| captured.borrow_mut().push(label.to_string()));
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();
    let input_id = widget.input_id();
    let opt1 = widget.option_id(1);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    let result = drive(&mut widget, &mut inputs, click(&opt1));

    assert_eq!(result, WidgetResult::Selected);
    assert!(!widget.is_open());
    assert_eq!(widget.display_value(), "Option 2");
    assert_eq!(inputs.get(&input_id), "Option 2");
    assert_eq!(*selected.borrow(), vec!["Option 2"]);
}

#[test]
fn reselecting_the_same_option_does_not_fire_on_selected() {
    let count = Rc::new(RefCell::new(0));
    let captured = Rc::clone(&count);
    let mut widget = sample().on_selected(move |_| *captured.borrow_mut() += 1);
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();
    let opt0 = widget.option_id(0);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    drive(&mut widget, &mut inputs, click(&opt0));
    assert_eq!(*count.borrow(), 1);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    drive(&mut widget, &mut inputs, click(&opt0));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn option_callback_fires_exactly_once() {
    let count = Rc::new(RefCell::new(0));
    let captured = Rc::clone(&count);
    let mut widget = Autosuggest::new([
        SuggestOption::new("plain"),
        SuggestOption::new("wired").on_select(move || *captured.borrow_mut() += 1),
    ]);
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();
    let opt0 = widget.option_id(0);
    let opt1 = widget.option_id(1);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    drive(&mut widget, &mut inputs, click(&opt0));
    assert_eq!(*count.borrow(), 0);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    drive(&mut widget, &mut inputs, click(&opt1));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn enter_on_a_focused_option_selects_it() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();
    let opt0 = widget.option_id(0);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    let result = drive(
        &mut widget,
        &mut inputs,
        Event::Key {
            target: Some(opt0),
            key: Key::Enter,
            modifiers: Modifiers::default(),
        },
    );

    assert_eq!(result, WidgetResult::Selected);
    assert_eq!(widget.display_value(), "Option 1");
}

#[test]
fn escape_closes_but_keeps_the_widget_engaged() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();

    drive(&mut widget, &mut inputs, click(&input_id));
    assert!(widget.is_open());

    let result = drive(&mut widget, &mut inputs, escape());
    assert_eq!(result, WidgetResult::Handled);
    assert!(!widget.is_open());
    assert!(widget.is_active());

    // The error surfaces once the user clicks away with the field empty
    drive(&mut widget, &mut inputs, click("somewhere-else"));
    assert_eq!(widget.error(), Some("Select an option"));
    assert!(!widget.is_active());
}

#[test]
fn escape_while_not_engaged_is_ignored() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();

    let result = drive(&mut widget, &mut inputs, escape());
    assert_eq!(result, WidgetResult::Ignored);
}

#[test]
fn outside_click_closes_the_menu() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();

    drive(&mut widget, &mut inputs, click(&toggle_id));
    assert!(widget.is_open());

    drive(
        &mut widget,
        &mut inputs,
        Event::Click {
            target: None,
            x: 0,
            y: 0,
            button: MouseButton::Left,
        },
    );
    assert!(!widget.is_open());
    assert!(widget.matched_labels().is_empty());
}

#[test]
fn outside_click_with_text_present_sets_no_error() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let input_id = widget.input_id();
    widget.set_value("Option 1", &mut inputs);

    drive(&mut widget, &mut inputs, click(&input_id));
    drive(&mut widget, &mut inputs, click("somewhere-else"));
    assert_eq!(widget.error(), None);
}

#[test]
fn clicks_on_the_dropdown_are_not_outside() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let toggle_id = widget.toggle_id();
    let dropdown_id = widget.dropdown_id();

    drive(&mut widget, &mut inputs, click(&toggle_id));
    drive(&mut widget, &mut inputs, click(&dropdown_id));

    // Still engaged, no blur validation ran
    assert!(widget.is_active());
    assert_eq!(widget.error(), None);
}

#[test]
fn controlled_value_renders_immediately() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    widget.set_value("Hello", &mut inputs);

    let focus = FocusState::new();
    let root = widget.element(&inputs, &focus);
    let input = find_element(&root, &widget.input_id()).unwrap();
    match &input.content {
        Content::TextInput { value, .. } => assert_eq!(value, "Hello"),
        other => panic!("unexpected input content: {other:?}"),
    }
}

#[test]
fn error_feedback_replaces_the_help_message() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let focus = FocusState::new();
    let input_id = widget.input_id();

    let root = widget.element(&inputs, &focus);
    let feedback = find_element(&root, &widget.feedback_id()).unwrap();
    match &feedback.content {
        Content::Text(text) => assert_eq!(text, "Start typing to search"),
        other => panic!("unexpected feedback content: {other:?}"),
    }

    // Engage, then blur with the field empty
    drive(&mut widget, &mut inputs, click(&input_id));
    drive(&mut widget, &mut inputs, click("somewhere-else"));

    let root = widget.element(&inputs, &focus);
    let feedback = find_element(&root, &widget.feedback_id()).unwrap();
    match &feedback.content {
        Content::Text(text) => assert_eq!(text, "Select an option"),
        other => panic!("unexpected feedback content: {other:?}"),
    }
    let input = find_element(&root, &widget.input_id()).unwrap();
    assert_eq!(
        input.get_data("aria-invalid").map(String::as_str),
        Some("true")
    );
}

#[test]
fn aria_expanded_tracks_the_menu() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let focus = FocusState::new();
    let toggle_id = widget.toggle_id();

    let root = widget.element(&inputs, &focus);
    let input = find_element(&root, &widget.input_id()).unwrap();
    assert_eq!(
        input.get_data("aria-expanded").map(String::as_str),
        Some("false")
    );
    assert_eq!(
        input.get_data("aria-owns").map(String::as_str),
        Some(widget.dropdown_id().as_str())
    );

    drive(&mut widget, &mut inputs, click(&toggle_id));
    let root = widget.element(&inputs, &focus);
    let input = find_element(&root, &widget.input_id()).unwrap();
    assert_eq!(
        input.get_data("aria-expanded").map(String::as_str),
        Some("true")
    );
}

#[test]
fn loading_shows_a_spinner_instead_of_options() {
    let mut widget = sample();
    let mut inputs = TextInputState::new();
    let focus = FocusState::new();
    let toggle_id = widget.toggle_id();
    widget.set_loading(true);

    drive(&mut widget, &mut inputs, click(&toggle_id));
    let root = widget.element(&inputs, &focus);

    assert!(find_element(&root, &format!("{}-spinner", widget.id())).is_some());
    assert!(find_element(&root, &widget.option_id(0)).is_none());
}
