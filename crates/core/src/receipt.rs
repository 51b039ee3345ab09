use serde::{Deserialize, Serialize};

use super::money::Money;

/// A label paired with the price printed on the same line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub label: String,
    pub amount: Money,
}

impl Entry {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self { label: label.into(), amount }
    }
}

/// The structured ledger read off a receipt.
///
/// `subtotal` and `total` are only populated when there were enough entries
/// to infer structure. When the subtotal line is also the last line the same
/// entry is reported in both slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptData {
    pub items: Vec<Entry>,
    pub subtotal: Option<Entry>,
    pub extras: Vec<Entry>,
    pub total: Option<Entry>,
}

impl ReceiptData {
    /// All entries treated as items; no structure inferred.
    pub fn unstructured(items: Vec<Entry>) -> Self {
        Self { items, ..Self::default() }
    }

    pub fn items_total(&self) -> Money {
        self.items.iter().map(|e| e.amount).sum()
    }

    pub fn extras_total(&self) -> Money {
        self.extras.iter().map(|e| e.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.subtotal.is_none()
            && self.extras.is_empty()
            && self.total.is_none()
    }
}
