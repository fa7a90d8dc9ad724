//! Source resolution: turn user-supplied specifiers into candidate pools.
//!
//! Resolution only reads the filesystem. Missing paths degrade to empty pools
//! so one bad specifier never aborts a run.
use crate::util::expand_home;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions (lowercase, without the dot) accepted during directory scans.
pub const AUDIO_EXTENSIONS: [&str; 5] = ["wav", "flac", "mp3", "ogg", "m4a"];

/// How a specifier resolved on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Directory,
    Missing,
}

/// Candidate files resolved from one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePool {
    pub source: String,
    pub kind: SourceKind,
    pub files: Vec<PathBuf>,
}

impl SourcePool {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Pools for one label, in specifier input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSources {
    pools: Vec<SourcePool>,
}

impl ResolvedSources {
    pub fn from_pools(pools: Vec<SourcePool>) -> Self {
        Self { pools }
    }

    pub fn pools(&self) -> &[SourcePool] {
        &self.pools
    }

    /// Candidate count per specifier, in input order.
    pub fn candidate_counts(&self) -> Vec<(String, usize)> {
        self.pools
            .iter()
            .map(|pool| (pool.source.clone(), pool.len()))
            .collect()
    }

    pub fn total_candidates(&self) -> usize {
        self.pools.iter().map(SourcePool::len).sum()
    }
}

/// Split a comma-separated specifier list, trimming and dropping empty entries.
pub fn parse_source_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|spec| !spec.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve every specifier into a pool, preserving first-occurrence order.
pub fn resolve_sources(specs: &[String]) -> ResolvedSources {
    let mut seen = HashSet::new();
    let mut pools = Vec::new();
    for spec in specs {
        if !seen.insert(spec.as_str()) {
            tracing::debug!(source = %spec, "skipping repeated source specifier");
            continue;
        }
        let pool = resolve_source(spec);
        tracing::info!(
            source = %pool.source,
            kind = ?pool.kind,
            candidates = pool.len(),
            "resolved source"
        );
        pools.push(pool);
    }
    ResolvedSources::from_pools(pools)
}

/// Resolve a single specifier.
pub fn resolve_source(spec: &str) -> SourcePool {
    let path = expand_home(spec);
    let (kind, files) = if path.is_file() {
        (SourceKind::File, vec![path])
    } else if path.is_dir() {
        (SourceKind::Directory, scan_audio_files(&path))
    } else {
        tracing::warn!(source = %spec, "source is neither a file nor a directory; using an empty pool");
        (SourceKind::Missing, Vec::new())
    };
    SourcePool {
        source: spec.to_string(),
        kind,
        files,
    }
}

/// Whether a path carries one of the recognized audio extensions.
pub fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn scan_audio_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    // walkdir reports symlink loops as entry errors instead of descending forever.
    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() || !has_audio_extension(entry.path()) {
                    continue;
                }
                // Manifest entries are UTF-8 text; a lossy name would point at no file.
                if entry.path().to_str().is_none() {
                    tracing::warn!(
                        path = %entry.path().display(),
                        "skipping file whose path is not valid UTF-8"
                    );
                    continue;
                }
                files.push(entry.into_path());
            }
            Err(err) => {
                tracing::warn!(root = %root.display(), "skipping unreadable entry: {err}");
            }
        }
    }
    files
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
