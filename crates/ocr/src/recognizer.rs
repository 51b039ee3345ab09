use thiserror::Error;

use crate::types::RecognizedText;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("Tesseract not available: build with `tesseract` feature")]
    NotAvailable,
}

/// Abstraction over an OCR backend.
/// Implementations accept PNG image bytes and return the recognized block →
/// line tree, with boxes in the image's own pixel coordinates.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image_bytes: &[u8]) -> Result<RecognizedText, OcrError>;
}

// ── Mock backend (always available, used for tests and replays) ───────────────

/// Returns a pre-set recognition tree regardless of the image, e.g. one
/// loaded from a recorded run with [`RecognizedText::from_json`].
pub struct MockRecognizer {
    pub text: RecognizedText,
}

impl MockRecognizer {
    pub fn new(text: RecognizedText) -> Self {
        Self { text }
    }
}

impl OcrBackend for MockRecognizer {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<RecognizedText, OcrError> {
        Ok(self.text.clone())
    }
}

/// Stand-in used when no engine was compiled in. Every call fails.
pub struct UnavailableRecognizer;

impl OcrBackend for UnavailableRecognizer {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<RecognizedText, OcrError> {
        Err(OcrError::NotAvailable)
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError};
    use crate::types::{Bounds, RecognizedText, TextBlock, TextLine};
    use leptess::{capi, LepTess};

    pub struct TesseractRecognizer {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractRecognizer {
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self { data_path, lang: lang.to_string() }
        }
    }

    impl OcrBackend for TesseractRecognizer {
        /// Reports every text line as one block; Tesseract's own block
        /// grouping is not needed downstream.
        fn recognize(&self, image_bytes: &[u8]) -> Result<RecognizedText, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;

            let Some(boxes) = lt.get_component_boxes(capi::TessPageIteratorLevel_RIL_TEXTLINE, true)
            else {
                return Ok(RecognizedText::default());
            };

            let mut lines = Vec::new();
            for b in &boxes {
                lt.set_rectangle_from_box(&b);
                let text = lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))?;
                let g = b.get_geometry();
                lines.push(TextLine {
                    text: text.trim().to_string(),
                    bounds: Some(Bounds::new(g.x, g.y, g.x + g.w, g.y + g.h)),
                });
            }
            Ok(RecognizedText { blocks: vec![TextBlock { lines }] })
        }
    }
}
