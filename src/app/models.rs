use std::io;

/// Indentation style the engine converts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentKind {
    Tabs,
    Spaces,
}

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub indent_kind: IndentKind,
    pub indent_width: usize,
    pub max_blank_lines: usize,
    pub exclude: Vec<String>,
    pub verbose: bool,
}

/// Terminal classification of processing one file.
#[derive(Debug)]
pub enum Outcome {
    Unchanged,
    Rewritten,
    SkippedBinary,
    SkippedTooLarge,
    SkippedIgnored,
    SkippedEmpty,
    ReadError(io::Error),
    WriteError(io::Error),
}

/// What the sanitize pass actually did to a file's content.
#[derive(Debug, Default)]
pub struct SanitizeStats {
    pub was_dos: bool,
    pub fixed_indent: bool,
    pub trimmed_lines: usize,
    pub trimmed_blank_lines: usize,
    pub appended_newline: bool,
}

/// Per-file result handed back to the orchestrator for reporting.
#[derive(Debug)]
pub struct FileReport {
    pub outcome: Outcome,
    pub stats: SanitizeStats,
}

impl FileReport {
    /// A report for a file the engine never transformed.
    pub fn skipped(outcome: Outcome) -> Self {
        Self {
            outcome,
            stats: SanitizeStats::default(),
        }
    }
}
