use std::path::PathBuf;

use split_ocr::ScanResult;

pub const NOT_FOUND: &str = "Not found";
pub const COULD_NOT_LOAD: &str = "could not load data";

/// Where the user is in the select → read → review flow.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    NoImage,
    Loading { source: PathBuf },
    Parsed { source: PathBuf, result: ScanResult },
    Error { message: String },
}

/// Holds the current [`ScanState`]. The pipeline never sees this; the
/// caller feeds it pipeline outcomes.
#[derive(Debug)]
pub struct ScanSession {
    state: ScanState,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    pub fn new() -> Self {
        Self { state: ScanState::NoImage }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// The picker returned; `None` means the user backed out or the file is gone.
    pub fn select(&mut self, picked: Option<PathBuf>) {
        self.state = match picked {
            Some(source) => ScanState::Loading { source },
            None => ScanState::Error { message: NOT_FOUND.to_string() },
        };
        tracing::info!(state = %self.headline(), "scan state changed");
    }

    /// Record the outcome of reading the selected image. Ignored unless a
    /// read is in flight.
    pub fn finish(&mut self, outcome: Option<ScanResult>) {
        let ScanState::Loading { source } = &self.state else {
            tracing::warn!(state = %self.headline(), "dropping scan outcome with no read in flight");
            return;
        };
        let source = source.clone();
        self.state = match outcome {
            Some(result) => ScanState::Parsed { source, result },
            None => ScanState::Error { message: COULD_NOT_LOAD.to_string() },
        };
        tracing::info!(state = %self.headline(), "scan state changed");
    }

    /// Back to the start, e.g. on a back gesture.
    pub fn reset(&mut self) {
        self.state = ScanState::NoImage;
    }

    pub fn headline(&self) -> String {
        match &self.state {
            ScanState::NoImage => "Select Image".to_string(),
            ScanState::Loading { source } => format!("Reading {}", source.display()),
            ScanState::Parsed { result, .. } => {
                let data = &result.data;
                match &data.total {
                    Some(total) => format!("{} items, total {}", data.items.len(), total.amount),
                    None => format!("{} items", data.items.len()),
                }
            }
            ScanState::Error { message } => message.clone(),
        }
    }
}
