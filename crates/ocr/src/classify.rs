use crate::types::{ClassifiedText, TextFragment};

/// Coarse "this could be a price" test.
///
/// True when the text has a dollar sign, or when more than all but four of
/// its characters are digits. Short strings pass trivially and so do codes
/// such as `"ABC123"`; the column cutoff is what keeps them out of the
/// price column.
pub fn is_currency_like(text: &str) -> bool {
    if text.contains('$') {
        return true;
    }
    let digits = text.chars().filter(char::is_ascii_digit).count() as i64;
    let length = text.chars().count() as i64;
    digits > length - 4
}

/// `min + round((max - min) * ratio)`.
pub fn column_cutoff(left_min: i32, left_max: i32, ratio: f64) -> i32 {
    let span = i64::from(left_max) - i64::from(left_min);
    let offset = (span as f64 * ratio).round() as i64;
    (i64::from(left_min) + offset) as i32
}

/// Split fragments into the label column and the price column.
///
/// Fragments are ordered by their top edge (ties keep input order). A
/// fragment is a value when it is currency-like and starts at or right of
/// the cutoff; everything else is an item.
pub fn classify(mut fragments: Vec<TextFragment>, value_column_ratio: f64) -> ClassifiedText {
    fragments.sort_by_key(|f| f.bounds.top);

    let lefts = fragments.iter().map(|f| f.bounds.left);
    let (Some(left_min), Some(left_max)) = (lefts.clone().min(), lefts.max()) else {
        return ClassifiedText::default();
    };
    let cutoff = column_cutoff(left_min, left_max, value_column_ratio);

    let (values, items): (Vec<_>, Vec<_>) = fragments
        .into_iter()
        .partition(|f| is_currency_like(&f.text) && f.bounds.left >= cutoff);

    tracing::debug!(
        left_min,
        left_max,
        cutoff,
        items = items.len(),
        values = values.len(),
        "classified fragments"
    );
    ClassifiedText { items, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;

    fn frag(text: &str, left: i32, top: i32) -> TextFragment {
        TextFragment::new(text, Bounds::new(left, top, left + 60, top + 20))
    }

    // ── Currency heuristic ────────────────────────────────────────────────────

    #[test]
    fn dollar_sign_is_currency() {
        assert!(is_currency_like("$3.99"));
        assert!(is_currency_like("Total $"));
    }

    #[test]
    fn digit_dense_text_is_currency() {
        assert!(is_currency_like("12345"));
        assert!(is_currency_like("3.99"));
    }

    #[test]
    fn short_codes_are_currency() {
        // 3 digits > 6 - 4; expected, not a bug.
        assert!(is_currency_like("ABC123"));
        // Anything under five characters passes.
        assert!(is_currency_like("Tax"));
    }

    #[test]
    fn words_are_not_currency() {
        assert!(!is_currency_like("Subtotal"));
        assert!(!is_currency_like("Bread"));
        assert!(!is_currency_like("ABCD12"));
    }

    // ── Cutoff ────────────────────────────────────────────────────────────────

    #[test]
    fn cutoff_at_sixty_percent() {
        assert_eq!(column_cutoff(10, 210, 0.6), 130);
        assert_eq!(column_cutoff(10, 205, 0.6), 127);
    }

    #[test]
    fn cutoff_rounds_half_away_from_zero() {
        // 5 * 0.5 = 2.5
        assert_eq!(column_cutoff(0, 5, 0.5), 3);
    }

    #[test]
    fn cutoff_degenerate_span() {
        assert_eq!(column_cutoff(42, 42, 0.6), 42);
    }

    // ── Classification ────────────────────────────────────────────────────────

    #[test]
    fn empty_input_yields_empty_columns() {
        let c = classify(vec![], 0.6);
        assert!(c.items.is_empty());
        assert!(c.values.is_empty());
    }

    #[test]
    fn splits_label_and_price_columns() {
        let c = classify(
            vec![
                frag("$3.99", 200, 102),
                frag("Milk", 10, 100),
                frag("Bread", 10, 150),
                frag("$2.50", 205, 151),
            ],
            0.6,
        );
        let items: Vec<&str> = c.items.iter().map(|f| f.text.as_str()).collect();
        let values: Vec<&str> = c.values.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(items, vec!["Milk", "Bread"]);
        assert_eq!(values, vec!["$3.99", "$2.50"]);
    }

    #[test]
    fn currency_in_label_column_stays_an_item() {
        let c = classify(vec![frag("$5 OFF", 10, 100), frag("$1.00", 200, 100)], 0.6);
        assert_eq!(c.items.len(), 1);
        assert_eq!(c.items[0].text, "$5 OFF");
        assert_eq!(c.values.len(), 1);
    }

    #[test]
    fn non_currency_in_price_column_is_an_item() {
        let c = classify(vec![frag("Milk", 10, 100), frag("THANKS", 200, 300)], 0.6);
        assert_eq!(c.items.len(), 2);
        assert!(c.values.is_empty());
    }

    #[test]
    fn same_left_everywhere_makes_all_currency_values() {
        let c = classify(
            vec![frag("$1.00", 50, 10), frag("Bread", 50, 20), frag("999", 50, 30)],
            0.6,
        );
        let values: Vec<&str> = c.values.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(values, vec!["$1.00", "999"]);
        assert_eq!(c.items.len(), 1);
    }

    #[test]
    fn identical_bounds_do_not_panic() {
        let c = classify(vec![frag("a", 5, 5), frag("b", 5, 5)], 0.6);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn partition_is_complete() {
        let input = vec![
            frag("Milk", 10, 100),
            frag("$3.99", 200, 102),
            frag("ABC123", 220, 120),
            frag("Store #42", 90, 5),
            frag("Bread", 10, 150),
            frag("$2.50", 205, 151),
        ];
        let c = classify(input.clone(), 0.6);
        assert_eq!(c.items.len() + c.values.len(), input.len());

        let mut seen: Vec<TextFragment> = c.items.iter().chain(&c.values).cloned().collect();
        let mut expected = input;
        seen.sort_by(|a, b| a.text.cmp(&b.text));
        expected.sort_by(|a, b| a.text.cmp(&b.text));
        assert_eq!(seen, expected);
    }

    #[test]
    fn columns_sorted_by_top() {
        let c = classify(
            vec![frag("C", 10, 300), frag("A", 10, 100), frag("$2", 200, 250), frag("$1", 200, 90)],
            0.6,
        );
        assert!(c.items.windows(2).all(|w| w[0].bounds.top <= w[1].bounds.top));
        assert!(c.values.windows(2).all(|w| w[0].bounds.top <= w[1].bounds.top));
    }

    #[test]
    fn input_order_does_not_change_result() {
        let a = vec![frag("Milk", 10, 100), frag("$3.99", 200, 102), frag("Bread", 10, 150)];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(classify(a, 0.6), classify(b, 0.6));
    }
}
