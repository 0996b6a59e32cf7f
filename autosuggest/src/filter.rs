//! Substring filtering over the option list.

use crate::item::SuggestOption;

/// Indices of the options whose label contains `query` as a
/// case-insensitive substring, in original order. The empty query
/// matches everything. Matches are never ranked.
pub fn filter_options(options: &[SuggestOption], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, opt)| opt.label.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// The canonical label for `text`, if some option's label equals it
/// ignoring case. Used to snap typed text onto the option's spelling.
pub(crate) fn canonical_label(options: &[SuggestOption], text: &str) -> Option<String> {
    let normalized = text.to_lowercase();
    options
        .iter()
        .find(|opt| opt.label.to_lowercase() == normalized)
        .map(|opt| opt.label.clone())
}
