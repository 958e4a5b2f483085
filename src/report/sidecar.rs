// Sidecar reports — persisting verdicts next to the files they describe.
//
// `check --save` writes `<stem>.txt` alongside each input file: a timestamp,
// the verdict line, and the raw JSON response. `batch --save <file>` writes
// one combined report instead, since batch inputs may span directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::moderation::verdict::FileVerdict;

/// Where the sidecar for `input` goes: same directory, same stem, `.txt`.
///
/// A `.txt` input would collide with its own sidecar, so those get a
/// `.litmus.txt` suffix instead of being overwritten.
pub fn sidecar_path(input: &Path) -> PathBuf {
    let candidate = input.with_extension("txt");
    if candidate == input {
        input.with_extension("litmus.txt")
    } else {
        candidate
    }
}

/// Render one verdict as report text.
fn render(verdict: &FileVerdict) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Checked: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("{verdict}\n"));
    match &verdict.raw {
        Some(raw) => {
            let json = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
            out.push_str(&json);
            out.push('\n');
        }
        None => out.push_str("No API response.\n"),
    }
    out
}

/// Write a per-file sidecar report. Returns the path written.
pub fn write_sidecar(verdict: &FileVerdict) -> Result<PathBuf> {
    let path = sidecar_path(&verdict.path);
    fs::write(&path, render(verdict))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(path)
}

/// Write one combined report for a batch run.
///
/// Verdict lines come first; the raw response body is shared by the whole
/// batch, so it is embedded once at the end.
pub fn write_batch_report(verdicts: &[FileVerdict], path: &Path) -> Result<()> {
    let mut out = String::new();
    out.push_str(&format!(
        "Checked: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    for verdict in verdicts {
        out.push_str(&format!("{verdict}\n"));
    }
    match verdicts.iter().find_map(|v| v.raw.as_ref()) {
        Some(raw) => {
            let json = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
            out.push('\n');
            out.push_str(&json);
            out.push('\n');
        }
        None => out.push_str("\nNo API response.\n"),
    }
    fs::write(path, &out)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_sits_next_to_the_input() {
        assert_eq!(
            sidecar_path(Path::new("shots/photo.png")),
            PathBuf::from("shots/photo.txt")
        );
    }

    #[test]
    fn text_input_gets_a_distinct_sidecar() {
        assert_eq!(
            sidecar_path(Path::new("notes.txt")),
            PathBuf::from("notes.litmus.txt")
        );
    }
}
