//! Autosuggest widget - text input with a substring-filtered dropdown of
//! selectable options.
//!
//! The widget owns its menu state (closed, or open with the current
//! matches), the display value, and a blur validation message. Options
//! are supplied as an ordered list of [`SuggestOption`] records; filtering
//! is case-insensitive substring matching that preserves the original
//! order.
//!
//! Integration follows the usual pipeline:
//!
//! ```ignore
//! let root = app_tree(widget.element(&inputs, &focus));
//! term.render(&root)?;
//! let raw = term.poll(timeout)?;
//! let events = focus.process_events(&raw, &root, term.layout());
//! let events = inputs.process_events(&events, &root, term.layout());
//! widget.handle_events(&events, &root, &mut inputs);
//! ```

mod events;
mod filter;
mod item;
mod messages;
mod render;
mod spinner;
mod state;

pub use events::WidgetResult;
pub use filter::filter_options;
pub use item::SuggestOption;
pub use messages::Messages;
pub use spinner::Spinner;
pub use state::{Autosuggest, AutosuggestId, MenuState};
