// Colored terminal output for verdicts.
//
// All terminal-specific formatting lives here: verdict lines, category
// breakdowns, the closing summary. main.rs delegates display to this module.

use colored::Colorize;

use crate::moderation::types::ContentItem;
use crate::moderation::verdict::FileVerdict;

/// Display a single file's verdict line, with a category breakdown
/// for flagged files.
pub fn display_verdict(verdict: &FileVerdict) {
    let label = if !verdict.has_response() {
        "no response".yellow().to_string()
    } else if verdict.flagged {
        "FLAGGED".red().bold().to_string()
    } else {
        "safe".green().to_string()
    };

    println!("  {:<48} {}", verdict.path.display().to_string(), label);

    if verdict.flagged {
        if let Some(result) = &verdict.result {
            for (category, score) in result.flagged_categories() {
                println!("      {} {:.3}", format!("{category}:").dimmed(), score);
            }
        }
    }
}

/// Show a short preview of what was submitted. Images are self-describing
/// (the path is already on screen), so only text content gets a preview.
pub fn display_item_preview(item: &ContentItem) {
    if let ContentItem::Text { text } = item {
        println!("      {}", format!("\"{}\"", super::preview(text, 72)).dimmed());
    }
}

/// Pretty-print a raw response body, dimmed so verdict lines stand out.
pub fn display_raw(raw: &serde_json::Value) {
    match serde_json::to_string_pretty(raw) {
        Ok(json) => println!("{}", json.dimmed()),
        Err(_) => println!("{}", raw.to_string().dimmed()),
    }
}

/// Display the closing count summary for a run.
pub fn display_summary(verdicts: &[FileVerdict]) {
    let flagged = verdicts.iter().filter(|v| v.flagged).count();
    let missing = verdicts.iter().filter(|v| !v.has_response()).count();
    let safe = verdicts.len() - flagged - missing;

    println!(
        "\n{}",
        format!("=== {} file(s) checked ===", verdicts.len()).bold()
    );
    if flagged > 0 {
        println!("  {} {} flagged", "!!".red().bold(), flagged);
    }
    println!("  {} {} safe", "ok".green(), safe);
    if missing > 0 {
        println!("  {} {} without a response", "?".yellow(), missing);
    }
}
