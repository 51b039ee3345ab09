pub mod classify;
pub mod collect;
pub mod config;
pub mod matcher;
pub mod pipeline;
pub mod preprocess;
pub mod recognizer;
pub mod segment;
pub mod types;

pub use classify::{classify, is_currency_like};
pub use collect::collect_fragments;
pub use config::{ConfigError, ParserConfig};
pub use matcher::match_lines;
pub use pipeline::{parse_fragments, PipelineError, ReceiptPipeline};
pub use preprocess::{prepare_for_ocr, PreparedImage, PreprocessError};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError, UnavailableRecognizer};
pub use segment::segment;
pub use types::{
    Bounds, ClassifiedText, RecognizedText, ScanResult, TextBlock, TextFragment, TextLine,
};
