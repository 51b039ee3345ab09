use crate::types::{RecognizedText, TextFragment};

/// Flatten the block → line tree into fragments, in recognition order.
/// Lines without a bounding box cannot be placed and are dropped.
pub fn collect_fragments(text: RecognizedText) -> Vec<TextFragment> {
    let mut dropped = 0usize;
    let fragments: Vec<TextFragment> = text
        .blocks
        .into_iter()
        .flat_map(|block| block.lines)
        .filter_map(|line| match line.bounds {
            Some(bounds) => Some(TextFragment { text: line.text, bounds }),
            None => {
                dropped += 1;
                None
            }
        })
        .collect();

    tracing::debug!(kept = fragments.len(), dropped, "collected text fragments");
    fragments
}
