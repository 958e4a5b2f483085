// Per-file verdicts — pairing a path with what the service said about it.

use std::fmt;
use std::path::{Path, PathBuf};

use super::traits::ModerationOutcome;
use super::types::ModerationResult;

/// The flagged/safe verdict for one input file.
#[derive(Debug, Clone)]
pub struct FileVerdict {
    pub path: PathBuf,
    pub flagged: bool,
    /// The service's result for this file, when it returned one.
    pub result: Option<ModerationResult>,
    /// Raw response body for reporting. Shared verbatim across a batch.
    pub raw: Option<serde_json::Value>,
}

impl FileVerdict {
    /// Build a verdict from the result at `index` in an outcome.
    ///
    /// A response with no result at that index (missing, empty, or
    /// malformed `results`) yields an unflagged verdict with no result
    /// attached. Absence of a verdict is never treated as a violation.
    pub fn from_outcome(path: &Path, outcome: &ModerationOutcome, index: usize) -> Self {
        let result = outcome.result_at(index).cloned();
        Self {
            path: path.to_path_buf(),
            flagged: result.as_ref().map(|r| r.flagged).unwrap_or(false),
            result,
            raw: Some(outcome.raw.clone()),
        }
    }

    /// The API call itself failed; there is nothing to report but the path.
    pub fn unavailable(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            flagged: false,
            result: None,
            raw: None,
        }
    }

    /// Whether the service actually returned a verdict for this file.
    pub fn has_response(&self) -> bool {
        self.result.is_some()
    }
}

impl fmt::Display for FileVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if !self.has_response() {
            "no response"
        } else if self.flagged {
            "flagged"
        } else {
            "safe"
        };
        write!(f, "{}: {}", self.path.display(), verdict)
    }
}

/// Pair a batch outcome with the files that were submitted, by index.
///
/// If the service returned fewer results than inputs, the unmatched tail
/// gets "no response" verdicts rather than borrowing a neighbor's result.
pub fn pair_with_outcome(paths: &[PathBuf], outcome: &ModerationOutcome) -> Vec<FileVerdict> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| FileVerdict::from_outcome(path, outcome, i))
        .collect()
}
