use serde::{Deserialize, Serialize};
use split_core::ReceiptData;

/// Axis-aligned pixel rectangle. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Whether `y` lies within `[top, bottom]`.
    pub fn contains_y(&self, y: i32) -> bool {
        (self.top..=self.bottom).contains(&y)
    }

    /// Whether either vertical edge of `other` falls inside this box.
    pub fn contains_edge_of(&self, other: &Bounds) -> bool {
        self.contains_y(other.top) || self.contains_y(other.bottom)
    }
}

/// One recognized line of text with its bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub bounds: Bounds,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, bounds: Bounds) -> Self {
        Self { text: text.into(), bounds }
    }

    /// Vertical ranges overlap, or one sits inside the other.
    pub fn same_line(&self, other: &TextFragment) -> bool {
        self.bounds.contains_edge_of(&other.bounds) || other.bounds.contains_edge_of(&self.bounds)
    }
}

/// Fragments split into the label column and the price column.
/// Both lists are ordered by `bounds.top`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedText {
    pub items: Vec<TextFragment>,
    pub values: Vec<TextFragment>,
}

impl ClassifiedText {
    pub fn len(&self) -> usize {
        self.items.len() + self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.values.is_empty()
    }
}

// ── Recognizer output ─────────────────────────────────────────────────────────

/// A recognized line as reported by the OCR engine. The box is optional
/// because not every engine reports one for every line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
}

/// The full block → line tree produced by one recognition run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedText {
    pub blocks: Vec<TextBlock>,
}

impl RecognizedText {
    /// Load a recorded recognition run.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The outcome of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub text: ClassifiedText,
    pub data: ReceiptData,
}
