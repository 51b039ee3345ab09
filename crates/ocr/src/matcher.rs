use split_core::{Entry, Money};

use crate::types::ClassifiedText;

/// Pair each price with the label printed on the same line.
///
/// A single cursor walks the items top to bottom and never moves back. For
/// each value the cursor consumes items until one shares the value's line;
/// that item becomes the entry's label. Items skipped on the way are gone
/// for good, and once the items run out every remaining value is dropped.
pub fn match_lines(text: &ClassifiedText) -> Vec<Entry> {
    let mut items = text.items.iter();
    let mut entries = Vec::new();

    for value in &text.values {
        if let Some(item) = items.by_ref().find(|item| value.same_line(item)) {
            entries.push(Entry::new(item.text.clone(), Money::parse_lenient(&value.text)));
        }
    }

    tracing::debug!(
        values = text.values.len(),
        entries = entries.len(),
        "matched labels to prices"
    );
    entries
}
