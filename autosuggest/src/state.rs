//! Widget state.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use glade::TextInputState;

use crate::filter::{canonical_label, filter_options};
use crate::item::SuggestOption;
use crate::messages::Messages;
use crate::spinner::Spinner;

/// Unique identifier for an Autosuggest widget instance. Element IDs of
/// the widget's parts are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutosuggestId(usize);

impl AutosuggestId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for AutosuggestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "autosuggest-{}", self.0)
    }
}

/// Menu state. `Open` carries the indices of the currently matching
/// options, which is never empty: a filter pass with no matches closes
/// the menu instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        matches: Vec<usize>,
    },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }

    /// Matching option indices, empty while closed.
    pub fn matches(&self) -> &[usize] {
        match self {
            MenuState::Closed => &[],
            MenuState::Open { matches } => matches,
        }
    }
}

type ChangeCallback = Box<dyn FnMut(&str)>;

/// A text input with a filterable dropdown of selectable options.
///
/// The widget owns the menu state, the display value, and the error
/// message. It plugs into the usual pipeline: build the tree with
/// [`element`](Autosuggest::element), feed the processed events through
/// [`handle_events`](Autosuggest::handle_events).
pub struct Autosuggest {
    pub(crate) id: AutosuggestId,
    pub(crate) options: Vec<SuggestOption>,
    pub(crate) display_value: String,
    pub(crate) menu: MenuState,
    /// Engaged by clicking into the widget; enables outside-click
    /// detection and Escape handling.
    pub(crate) active: bool,
    pub(crate) error: Option<String>,

    // Configuration
    pub(crate) name: String,
    pub(crate) floating_label: Option<String>,
    pub(crate) placeholder: String,
    pub(crate) help_message: String,
    pub(crate) error_message_text: String,
    pub(crate) read_only: bool,
    pub(crate) loading: bool,
    pub(crate) messages: Messages,
    pub(crate) spinner: Spinner,

    pub(crate) on_change: Option<ChangeCallback>,
    pub(crate) on_selected: Option<ChangeCallback>,
}

impl fmt::Debug for Autosuggest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autosuggest")
            .field("id", &self.id)
            .field("options", &self.options.len())
            .field("display_value", &self.display_value)
            .field("menu", &self.menu)
            .field("active", &self.active)
            .field("error", &self.error)
            .field("loading", &self.loading)
            .finish()
    }
}

impl Autosuggest {
    pub fn new<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SuggestOption>,
    {
        Self {
            id: AutosuggestId::new(),
            options: options.into_iter().map(Into::into).collect(),
            display_value: String::new(),
            menu: MenuState::Closed,
            active: false,
            error: None,
            name: "form-autosuggest".to_string(),
            floating_label: None,
            placeholder: String::new(),
            help_message: String::new(),
            error_message_text: String::new(),
            read_only: false,
            loading: false,
            messages: Messages::default(),
            spinner: Spinner::new(),
            on_change: None,
            on_selected: None,
        }
    }

    // -------------------------------------------------------------------
    // Builder configuration
    // -------------------------------------------------------------------

    /// Name used in the feedback element's `feedback-for` association.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Label rendered above the input.
    pub fn floating_label(mut self, label: impl Into<String>) -> Self {
        self.floating_label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Help text shown below the input while no error is present.
    pub fn help_message(mut self, message: impl Into<String>) -> Self {
        self.help_message = message.into();
        self
    }

    /// Error text surfaced when the field is left empty.
    pub fn error_message_text(mut self, message: impl Into<String>) -> Self {
        self.error_message_text = message.into();
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Callback fired on every keystroke with the new text.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Callback fired when a different option is chosen.
    pub fn on_selected(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_selected = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn id(&self) -> AutosuggestId {
        self.id
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Labels of the currently matching options, top to bottom.
    pub fn matched_labels(&self) -> Vec<&str> {
        self.menu
            .matches()
            .iter()
            .filter_map(|&i| self.options.get(i))
            .map(|opt| opt.label())
            .collect()
    }

    // -------------------------------------------------------------------
    // External control
    // -------------------------------------------------------------------

    /// Overwrite the display value from the caller, as a controlled
    /// field would. Menu state is untouched.
    pub fn set_value(&mut self, value: impl Into<String>, inputs: &mut TextInputState) {
        self.display_value = value.into();
        inputs.set(&self.input_id(), self.display_value.clone());
    }

    /// Flip the loading indicator. While loading, the dropdown region
    /// shows a spinner instead of options.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Advance the loading spinner. Call once per render tick.
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner.tick();
        }
    }

    // -------------------------------------------------------------------
    // Element IDs
    // -------------------------------------------------------------------

    pub fn wrapper_id(&self) -> String {
        self.id.to_string()
    }

    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    pub fn toggle_id(&self) -> String {
        format!("{}-toggle", self.id)
    }

    pub fn dropdown_id(&self) -> String {
        format!("{}-dropdown", self.id)
    }

    pub fn feedback_id(&self) -> String {
        format!("{}-feedback", self.id)
    }

    pub fn option_id(&self, index: usize) -> String {
        format!("{}-opt-{index}", self.id)
    }

    /// Option index encoded in an element ID, if the ID names one of
    /// this widget's option rows.
    pub(crate) fn option_index(&self, element_id: &str) -> Option<usize> {
        let prefix = format!("{}-opt-", self.id);
        element_id
            .strip_prefix(&prefix)?
            .parse()
            .ok()
            .filter(|&i| i < self.options.len())
    }

    // -------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------

    /// Open with the given matches, or close when there are none.
    pub(crate) fn open_with(&mut self, matches: Vec<usize>) {
        self.menu = if matches.is_empty() {
            MenuState::Closed
        } else {
            MenuState::Open { matches }
        };
    }

    pub(crate) fn close(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// Clicking into the input engages the widget and opens the menu
    /// only when the current text matches more than one option.
    pub(crate) fn input_clicked(&mut self) {
        self.active = true;
        let matches = filter_options(&self.options, &self.display_value);
        if matches.len() > 1 {
            log::debug!("[{}] input click opens with {} matches", self.id, matches.len());
            self.error = None;
            self.open_with(matches);
        }
    }

    /// The toggle affordance: close when open; open filtered by the
    /// current display value (everything when it is empty) and clear
    /// the error when closed.
    pub(crate) fn toggle_clicked(&mut self) {
        self.active = true;
        if self.menu.is_open() {
            self.close();
        } else {
            self.error = None;
            let matches = filter_options(&self.options, &self.display_value);
            self.open_with(matches);
        }
    }

    /// A keystroke changed the input text. Non-empty text refilters and
    /// opens; empty text closes. Typed text that equals an option label
    /// ignoring case snaps to the option's spelling.
    pub(crate) fn text_changed(&mut self, text: &str, inputs: &mut TextInputState) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(text);
        }

        if text.is_empty() {
            self.close();
        } else {
            self.error = None;
            let matches = filter_options(&self.options, text);
            self.open_with(matches);
        }

        match canonical_label(&self.options, text) {
            Some(canonical) if canonical != text => {
                log::debug!("[{}] snapping {text:?} to {canonical:?}", self.id);
                self.display_value = canonical;
                inputs.set(&self.input_id(), self.display_value.clone());
            }
            _ => self.display_value = text.to_string(),
        }
    }

    /// An option was chosen: the display value becomes its label, the
    /// selection callback fires only when the value actually changed,
    /// the option's own callback always fires, and the menu closes.
    pub(crate) fn select_option(&mut self, index: usize, inputs: &mut TextInputState) -> bool {
        let Some(label) = self.options.get(index).map(|opt| opt.label.clone()) else {
            return false;
        };

        log::debug!("[{}] selected option {index}: {label:?}", self.id);

        if label != self.display_value {
            if let Some(callback) = self.on_selected.as_mut() {
                callback(&label);
            }
        }

        self.display_value = label.clone();
        inputs.set(&self.input_id(), label);
        self.close();

        if let Some(opt) = self.options.get_mut(index) {
            if let Some(callback) = opt.on_select.as_mut() {
                callback();
            }
        }

        true
    }

    /// Escape while engaged closes the menu but keeps the widget
    /// engaged, so a later outside click still runs blur validation.
    pub(crate) fn escape_pressed(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.close();
        true
    }

    /// A click landed outside the widget: close, disengage, and surface
    /// the error message iff the field was left empty.
    pub(crate) fn outside_click(&mut self) {
        if !self.active {
            return;
        }
        log::debug!("[{}] outside click, display={:?}", self.id, self.display_value);
        self.active = false;
        self.close();
        self.error = if self.display_value.is_empty() && !self.error_message_text.is_empty() {
            Some(self.error_message_text.clone())
        } else {
            None
        };
    }
}
