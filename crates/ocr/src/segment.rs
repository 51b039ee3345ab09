use split_core::{Entry, ReceiptData};

use crate::config::ParserConfig;

/// Assign matched entries to items, subtotal, extras and total.
///
/// With fewer than `min_structured_entries` entries everything is an item.
/// Otherwise the last entry is always the total. If some label contains the
/// subtotal keyword, the first such entry is the subtotal, entries before it
/// are items and entries between it and the total are extras. A subtotal in
/// last position is reported as both subtotal and total.
pub fn segment(mut entries: Vec<Entry>, config: &ParserConfig) -> ReceiptData {
    if entries.len() < config.min_structured_entries {
        tracing::debug!(entries = entries.len(), "too few entries to infer totals");
        return ReceiptData::unstructured(entries);
    }

    let keyword = config.subtotal_keyword.to_lowercase();
    let subtotal_index = entries
        .iter()
        .position(|e| e.label.to_lowercase().contains(&keyword));

    let Some(index) = subtotal_index else {
        let total = entries.pop();
        return ReceiptData { items: entries, subtotal: None, extras: Vec::new(), total };
    };

    let mut tail = entries.split_off(index).into_iter();
    let subtotal = tail.next();
    let total = tail.next_back().or_else(|| subtotal.clone());
    let extras = tail.collect();

    ReceiptData { items: entries, subtotal, extras, total }
}
