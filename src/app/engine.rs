use crate::app::models::{FileReport, IndentKind, Outcome, RuntimeConfig, SanitizeStats};
use std::fs;
use std::path::Path;

/// Files larger than this are never touched.
const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Path segments that belong to version-control internals.
const VCS_SEGMENTS: &[&str] = &[".git", ".hg", ".svn", ".CVS"];

/// Name fragments for files where whitespace is semantically significant.
/// Matched as plain substrings of the path, so `MyMakefile.txt` is also
/// left alone.
const PROTECTED_FRAGMENTS: &[&str] = &["Makefile", "BSDmakefile", "GNUmakefile", "Gemfile.lock"];

/// Non-configurable name-based exclusion.
pub fn should_ignore(path: &Path) -> bool {
    if path
        .components()
        .any(|c| VCS_SEGMENTS.iter().any(|s| c.as_os_str() == *s))
    {
        return true;
    }
    let path_str = path.to_string_lossy();
    PROTECTED_FRAGMENTS.iter().any(|f| path_str.contains(f))
}

/// Runs the full per-file pipeline: gates, sanitize pass, conditional
/// write-back. I/O failures become part of the report, never errors.
pub fn process(path: &Path, config: &RuntimeConfig) -> FileReport {
    if should_ignore(path) {
        return FileReport::skipped(Outcome::SkippedIgnored);
    }

    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) => return FileReport::skipped(Outcome::ReadError(err)),
    };
    if size == 0 {
        return FileReport::skipped(Outcome::SkippedEmpty);
    }
    if size > MAX_FILE_SIZE {
        return FileReport::skipped(Outcome::SkippedTooLarge);
    }

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => return FileReport::skipped(Outcome::ReadError(err)),
    };
    if data.contains(&0) {
        return FileReport::skipped(Outcome::SkippedBinary);
    }

    let (sanitized, stats) = sanitize(&data, config);
    if sanitized == data {
        return FileReport {
            outcome: Outcome::Unchanged,
            stats,
        };
    }

    match fs::write(path, &sanitized) {
        Ok(()) => FileReport {
            outcome: Outcome::Rewritten,
            stats,
        },
        Err(err) => FileReport {
            outcome: Outcome::WriteError(err),
            stats,
        },
    }
}

/// The pure transformation pass: splits on LF, then per line drops a
/// trailing CR, trims trailing whitespace, converts leading indentation
/// units, and caps runs of blank lines. Guarantees the result ends with
/// exactly one LF.
pub fn sanitize(data: &[u8], config: &RuntimeConfig) -> (Vec<u8>, SanitizeStats) {
    let (find, replace): (Vec<u8>, Vec<u8>) = match config.indent_kind {
        IndentKind::Tabs => (vec![b' '; config.indent_width], vec![b'\t']),
        IndentKind::Spaces => (vec![b'\t'], vec![b' '; config.indent_width]),
    };

    let mut stats = SanitizeStats::default();
    let mut kept: Vec<Vec<u8>> = Vec::new();
    let mut consecutive_blank = 0usize;

    for raw in data.split(|&b| b == b'\n') {
        let mut line = raw;

        if line.last() == Some(&b'\r') {
            stats.was_dos = true;
            line = &line[..line.len() - 1];
        }

        let trimmed = trim_trailing(line);
        if trimmed.len() != line.len() {
            stats.trimmed_lines += 1;
        }
        line = trimmed;

        // Count whole leading indent units against the immutable remainder,
        // then build the converted prefix in one go.
        let mut units = 0usize;
        let mut rest = line;
        while rest.starts_with(&find[..]) {
            units += 1;
            rest = &rest[find.len()..];
        }
        let out = if units > 0 {
            stats.fixed_indent = true;
            let mut converted = Vec::with_capacity(units * replace.len() + rest.len());
            for _ in 0..units {
                converted.extend_from_slice(&replace);
            }
            converted.extend_from_slice(rest);
            converted
        } else {
            line.to_vec()
        };

        if out.is_empty() {
            consecutive_blank += 1;
        } else {
            consecutive_blank = 0;
        }
        if consecutive_blank > config.max_blank_lines {
            stats.trimmed_blank_lines += 1;
        } else {
            kept.push(out);
        }
    }

    // A trailing empty line is what makes the joined output end in LF.
    if kept.last().map_or(true, |last| !last.is_empty()) {
        stats.appended_newline = true;
        kept.push(Vec::new());
    }

    (kept.join(&b'\n'), stats)
}

/// Strips trailing spaces and tabs; any trailing CR was already removed.
fn trim_trailing(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && matches!(line[end - 1], b' ' | b'\t') {
        end -= 1;
    }
    &line[..end]
}
