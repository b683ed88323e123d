use crate::app::engine;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};

/// Walks root paths and yields the files the engine should look at.
pub struct Scanner {
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            exclude_set: build_globset(&config.exclude)?,
        })
    }

    /// Expands one root into candidate files, in traversal order.
    ///
    /// A root that is itself a file is included directly; a directory is
    /// walked depth-first. Exclude globs match the path relative to the
    /// root being walked (for a file root, its file name).
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        // Anything that is not a directory goes straight to the engine; a
        // path that no longer exists then surfaces as a per-file read error.
        if !root.is_dir() {
            let name = root.file_name().map(PathBuf::from).unwrap_or_default();
            if self.exclude_set.is_match(&name) {
                log::debug!("Excluding {}", root.display());
            } else {
                files.push(root.to_path_buf());
            }
            return files;
        }

        // Every regular file is a candidate: gitignore and hidden-file
        // filtering stay off. VCS directories are pruned during the walk.
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .map_or(true, |name| !matches!(name, ".git" | ".hg" | ".svn" | ".CVS"))
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Error walking entry: {}", err);
                    continue;
                }
            };
            // Symlinks are followed one hop: one that resolves to a regular
            // file is a candidate, one that doesn't is skipped. Directories
            // fall through here too.
            let is_file = match entry.file_type() {
                Some(t) if t.is_file() => true,
                Some(t) if t.is_symlink() => match entry.path().metadata() {
                    Ok(meta) => meta.is_file(),
                    Err(_) => {
                        log::debug!("{} is unresolvable, skipping", entry.path().display());
                        false
                    }
                },
                _ => false,
            };
            if !is_file {
                continue;
            }

            let path = entry.path();
            if engine::should_ignore(path) {
                log::debug!("Ignoring {}", path.display());
                continue;
            }
            let relative = diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
            if self.exclude_set.is_match(&relative) {
                log::debug!("Excluding {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}
