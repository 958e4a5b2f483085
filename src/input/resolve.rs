// Path argument resolution — quote stripping, separator and home directory
// normalization, wildcard expansion.
//
// CLI arguments often arrive mangled: wrapped in quotes from a copy-pasted
// shell string, using the wrong separator for the platform, or carrying a
// wildcard pattern the shell didn't expand. Everything downstream assumes
// a concrete list of file paths, so all of that is untangled here.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

/// Characters stripped from the ends of a raw argument. Wrapping quotes
/// come from copy-pasted shell strings, stray brackets from pasted lists.
const WRAPPER_CHARS: &[char] = &['"', '\'', '[', ']'];

/// Trim whitespace and strip quoting artifacts from a raw CLI argument.
pub fn clean_raw_arg(raw: &str) -> String {
    raw.trim().trim_matches(WRAPPER_CHARS).to_string()
}

/// Rewrite both `/` and `\` to the platform separator.
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

/// Expand a leading `~` to the user's home directory.
///
/// Call after `normalize_separators`; the prefix check uses the platform
/// separator. Anything other than `~` or `~<sep>...` passes through.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path
            .strip_prefix('~')
            .and_then(|r| r.strip_prefix(MAIN_SEPARATOR))
        {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Lexical path normalization: drop `.` components and cancel `..` against
/// the preceding component. Purely textual: nothing is resolved on disk,
/// so symlinked parents are not followed.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                // `a/b/..` cancels to `a`
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` stays at the root
                Some(Component::RootDir) => {}
                // leading `..` has nothing to cancel against
                _ => parts.push(comp),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Expand a wildcard pattern against the filesystem.
///
/// A pattern with no matches (or one that isn't valid glob syntax) falls
/// back to the literal path, so the downstream read error names the file
/// the user actually typed.
fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    match glob::glob(pattern) {
        Ok(paths) => {
            let matches: Vec<PathBuf> = paths.filter_map(|p| p.ok()).collect();
            if matches.is_empty() {
                vec![PathBuf::from(pattern)]
            } else {
                matches
            }
        }
        Err(e) => {
            debug!(pattern = pattern, error = %e, "Not a valid glob pattern, using literally");
            vec![PathBuf::from(pattern)]
        }
    }
}

/// Resolve every CLI argument into concrete file paths:
/// clean → separators → home expansion → wildcard expansion → normalize.
///
/// Arguments that are empty after cleaning are dropped. Wildcard matches
/// arrive in the alphabetical order the glob walk yields them.
pub fn resolve_args(args: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for raw in args {
        let cleaned = clean_raw_arg(raw);
        if cleaned.is_empty() {
            debug!(raw = %raw, "Dropping argument that is empty after cleaning");
            continue;
        }
        let separated = normalize_separators(&cleaned);
        let expanded = expand_home(&separated);
        for path in expand_pattern(&expanded.to_string_lossy()) {
            files.push(normalize(&path));
        }
    }
    files
}
