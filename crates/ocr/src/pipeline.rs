use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::classify::classify;
use crate::collect::collect_fragments;
use crate::config::ParserConfig;
use crate::matcher::match_lines;
use crate::preprocess::{self, PreprocessError};
use crate::recognizer::{OcrBackend, OcrError};
use crate::segment::segment;
use crate::types::{RecognizedText, ScanResult, TextFragment};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("Recognition task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Classify → match → segment. Pure; safe to call from any thread.
pub fn parse_fragments(fragments: Vec<TextFragment>, config: &ParserConfig) -> ScanResult {
    let text = classify(fragments, config.value_column_ratio);
    let entries = match_lines(&text);
    let data = segment(entries, config);
    ScanResult { text, data }
}

/// Orchestrates: read → preprocess → OCR → collect → classify → match → segment.
pub struct ReceiptPipeline<R: OcrBackend> {
    recognizer: Arc<R>,
    config: ParserConfig,
}

impl<R: OcrBackend + 'static> ReceiptPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self::with_config(recognizer, ParserConfig::default())
    }

    pub fn with_config(recognizer: R, config: ParserConfig) -> Self {
        Self { recognizer: Arc::new(recognizer), config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an already recognized tree.
    pub fn parse(&self, text: RecognizedText) -> ScanResult {
        parse_fragments(collect_fragments(text), &self.config)
    }

    /// Decode the image and run the backend on the blocking pool.
    pub async fn recognize_bytes(&self, data: Vec<u8>) -> Result<RecognizedText, PipelineError> {
        let recognizer = Arc::clone(&self.recognizer);
        let text = tokio::task::spawn_blocking(move || -> Result<RecognizedText, PipelineError> {
            let image = preprocess::prepare_for_ocr(&data)?;
            tracing::debug!(width = image.width, height = image.height, "image prepared for OCR");
            Ok(recognizer.recognize(&image.png)?)
        })
        .await??;
        Ok(text)
    }

    /// Process raw bytes (from camera capture or file read).
    pub async fn process_bytes(&self, data: Vec<u8>) -> Result<ScanResult, PipelineError> {
        let text = self.recognize_bytes(data).await?;
        Ok(self.parse(text))
    }

    /// Process a file on disk.
    pub async fn process_file(&self, path: &Path) -> Result<ScanResult, PipelineError> {
        let bytes = tokio::fs::read(path).await?;
        self.process_bytes(bytes).await
    }

    /// Like [`process_file`](Self::process_file), but any failure becomes
    /// "no result". The error is logged, never returned.
    pub async fn scan_file(&self, path: &Path) -> Option<ScanResult> {
        match self.process_file(path).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "receipt scan produced no result");
                None
            }
        }
    }

    pub async fn scan_bytes(&self, data: Vec<u8>) -> Option<ScanResult> {
        match self.process_bytes(data).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(error = %e, "receipt scan produced no result");
                None
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
