use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use split_ocr::{ParserConfig, ReceiptPipeline, RecognizedText, ScanResult, UnavailableRecognizer};

mod state;

use state::{ScanSession, ScanState};

const USAGE: &str = "usage: split <receipt image | recorded OCR .json> [config.toml]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON ledger.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let input = args.next().map(PathBuf::from);
    let config = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            ParserConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => ParserConfig::default(),
    };

    let mut session = ScanSession::new();
    session.select(input.filter(|p| p.is_file()));

    let source = match session.state() {
        ScanState::Loading { source } => source.clone(),
        ScanState::Error { message } => bail!("{message}\n{USAGE}"),
        ScanState::NoImage | ScanState::Parsed { .. } => bail!(USAGE),
    };

    let outcome = scan(&source, config).await;
    session.finish(outcome);

    match session.state() {
        ScanState::Parsed { result, .. } => {
            println!("{}", serde_json::to_string_pretty(&result.data)?);
            Ok(())
        }
        ScanState::Error { message } => bail!("{message}"),
        ScanState::NoImage | ScanState::Loading { .. } => bail!("scan did not complete"),
    }
}

/// Recorded `.json` runs are replayed without an engine; anything else is
/// treated as an image.
async fn scan(source: &Path, config: ParserConfig) -> Option<ScanResult> {
    let is_recording = source
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_recording {
        let pipeline = ReceiptPipeline::with_config(UnavailableRecognizer, config);
        return match load_recording(source).await {
            Ok(text) => Some(pipeline.parse(text)),
            Err(e) => {
                tracing::warn!(path = %source.display(), error = %e, "receipt scan produced no result");
                None
            }
        };
    }

    ReceiptPipeline::with_config(recognizer(), config)
        .scan_file(source)
        .await
}

async fn load_recording(path: &Path) -> anyhow::Result<RecognizedText> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(RecognizedText::from_json(&json)?)
}

#[cfg(feature = "tesseract")]
fn recognizer() -> split_ocr::recognizer::tesseract_backend::TesseractRecognizer {
    let data_path = std::env::var("TESSDATA_PREFIX").ok();
    split_ocr::recognizer::tesseract_backend::TesseractRecognizer::new(data_path, "eng")
}

#[cfg(not(feature = "tesseract"))]
fn recognizer() -> UnavailableRecognizer {
    UnavailableRecognizer
}
