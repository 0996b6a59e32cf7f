//! Interactive demo: a country picker. Run with
//! `cargo run --example countries`. Ctrl+C quits.

use std::io;
use std::time::Duration;

use autosuggest::Autosuggest;
use glade::{Edges, Element, Event, FocusState, Key, Size, Style, Terminal, TextInputState};

const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Belgium",
    "Brazil",
    "Canada",
    "Denmark",
    "France",
    "Germany",
    "Japan",
    "Netherlands",
    "Norway",
    "Portugal",
    "Spain",
    "Sweden",
    "United Kingdom",
    "United States",
];

fn main() -> io::Result<()> {
    glade::logging::init("countries-demo.log", log::LevelFilter::Debug)?;

    let mut picker = Autosuggest::new(COUNTRIES.iter().copied())
        .name("country")
        .floating_label("Country")
        .placeholder("Start typing...")
        .help_message("Pick a country from the list")
        .error_message_text("Country is required")
        .on_selected(|label| log::info!("selected {label}"));

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut inputs = TextInputState::new();

    loop {
        picker.tick();

        let root = Element::col()
            .id("app")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(2))
            .gap(1)
            .child(picker.element(&inputs, &focus))
            .child(
                Element::text("Ctrl+C quits")
                    .height(Size::Fixed(1))
                    .style(Style::new().dim()),
            );
        term.render(&root)?;

        let raw = term.poll(Duration::from_millis(100))?;
        if raw.is_empty() {
            continue;
        }

        let events = focus.process_events(&raw, &root, term.layout());
        let events = inputs.process_events(&events, &root, term.layout());

        for event in &events {
            if let Event::Key {
                key: Key::Char('c'),
                modifiers,
                ..
            } = event
            {
                if modifiers.ctrl {
                    return Ok(());
                }
            }
        }

        picker.handle_events(&events, &root, &mut inputs);
    }
}
