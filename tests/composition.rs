// Composition tests — verifying that the stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   resolve -> encode -> request payload -> verdict pairing -> reports
// without any network calls (report writers only touch a temp directory).

use std::fs;
use std::path::PathBuf;

use litmus::input::encode::content_item;
use litmus::input::resolve::resolve_args;
use litmus::moderation::traits::ModerationOutcome;
use litmus::moderation::types::{ContentItem, ModerationRequest};
use litmus::moderation::verdict::{pair_with_outcome, FileVerdict};
use litmus::report::preview;
use litmus::report::sidecar::{sidecar_path, write_batch_report, write_sidecar};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("litmus-composition-{}", std::process::id()))
        .join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================
// Chain: resolve -> encode -> request payload
// ============================================================

#[test]
fn resolved_files_encode_into_a_wire_ready_payload() {
    let dir = scratch_dir("payload");
    fs::write(dir.join("a.png"), b"\x89PNG").unwrap();
    fs::write(dir.join("b.txt"), b"some words").unwrap();

    // a quoted wildcard argument, the way a pasted shell string arrives
    let arg = format!("'{}'", dir.join("*").to_string_lossy());
    let files = resolve_args(&[arg]);
    assert_eq!(files.len(), 2);

    let items: Vec<ContentItem> = files
        .iter()
        .map(|f| content_item(f).unwrap())
        .collect();

    let request = ModerationRequest {
        model: "omni-moderation-latest",
        input: &items,
    };
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["model"], "omni-moderation-latest");
    let input = json["input"].as_array().unwrap();
    assert_eq!(input.len(), 2);
    // glob yields a.png before b.txt
    assert_eq!(input[0]["type"], "image_url");
    assert!(input[0]["image_url"]["url"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert_eq!(input[1]["type"], "text");
    assert_eq!(input[1]["text"], "some words");

    fs::remove_dir_all(&dir).ok();
}

// ============================================================
// Chain: response -> verdicts -> reports
// ============================================================

#[test]
fn batch_response_pairs_and_persists() {
    let dir = scratch_dir("batch-report");
    let paths = vec![dir.join("a.png"), dir.join("b.png")];

    let outcome = ModerationOutcome::from_raw(serde_json::json!({
        "id": "modr-compose",
        "results": [
            {"flagged": true, "categories": {"violence": true}, "category_scores": {"violence": 0.9}},
            {"flagged": false, "categories": {}, "category_scores": {}}
        ]
    }));

    let verdicts = pair_with_outcome(&paths, &outcome);
    assert!(verdicts[0].flagged);
    assert!(!verdicts[1].flagged);

    let report_path = dir.join("report.txt");
    write_batch_report(&verdicts, &report_path).unwrap();

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains(&format!("{}: flagged", paths[0].display())));
    assert!(report.contains(&format!("{}: safe", paths[1].display())));
    // the raw body is embedded once
    assert_eq!(report.matches("modr-compose").count(), 1);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn sidecar_lands_next_to_the_input_with_the_raw_body() {
    let dir = scratch_dir("sidecar");
    let input = dir.join("photo.png");
    fs::write(&input, b"\x89PNG").unwrap();

    let outcome = ModerationOutcome::from_raw(serde_json::json!({
        "id": "modr-sidecar",
        "results": [{"flagged": false, "categories": {}, "category_scores": {}}]
    }));
    let verdict = FileVerdict::from_outcome(&input, &outcome, 0);

    let written = write_sidecar(&verdict).unwrap();
    assert_eq!(written, sidecar_path(&input));
    assert_eq!(written, dir.join("photo.txt"));

    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.starts_with("Checked: "));
    assert!(contents.contains(&format!("{}: safe", input.display())));
    assert!(contents.contains("modr-sidecar"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn failed_call_sidecar_records_the_absence() {
    let dir = scratch_dir("sidecar-missing");
    let input = dir.join("photo.png");
    fs::write(&input, b"\x89PNG").unwrap();

    let verdict = FileVerdict::unavailable(&input);
    let written = write_sidecar(&verdict).unwrap();

    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.contains(&format!("{}: no response", input.display())));
    assert!(contents.contains("No API response."));

    fs::remove_dir_all(&dir).ok();
}

// ============================================================
// Preview helper
// ============================================================

#[test]
fn preview_collapses_whitespace_and_truncates() {
    assert_eq!(preview("a  b\n\tc", 10), "a b c");
    assert_eq!(preview("abcdef", 3), "abc...");
    // counts characters, not bytes
    assert_eq!(preview("日本語のテキスト", 4), "日本語の...");
}
