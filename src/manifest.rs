//! Dataset manifest model and on-disk artifacts.
//!
//! `dataset.json` is the index downstream training tooling reads; the two
//! list files carry the same selections one path per line.
use crate::sources::ResolvedSources;
use crate::util::{display_path, render_lines};
use anyhow::{Context, Result};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "dataset.json";
pub const POSITIVES_FILE: &str = "positives.txt";
pub const NEGATIVES_FILE: &str = "negatives.txt";

/// Candidate counts keyed by source specifier, serialized in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCounts(pub Vec<(String, usize)>);

impl From<&ResolvedSources> for SourceCounts {
    fn from(sources: &ResolvedSources) -> Self {
        Self(sources.candidate_counts())
    }
}

impl Serialize for SourceCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (source, count) in &self.0 {
            map.serialize_entry(source, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    pub positive_sources: SourceCounts,
    pub negative_sources: SourceCounts,
    pub selected_positives: usize,
    pub selected_negatives: usize,
    pub min_per_source: usize,
    pub max_positives: Option<usize>,
    pub max_negatives: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetManifest {
    pub wake_phrase: String,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
    pub summary: ManifestSummary,
}

/// Inputs needed to assemble a manifest for one run.
pub struct ManifestInputs<'a> {
    pub wake_phrase: &'a str,
    pub positive_sources: &'a ResolvedSources,
    pub negative_sources: &'a ResolvedSources,
    pub positives: &'a [PathBuf],
    pub negatives: &'a [PathBuf],
    pub min_per_source: usize,
    pub max_positives: Option<usize>,
    pub max_negatives: Option<usize>,
}

impl DatasetManifest {
    pub fn build(inputs: &ManifestInputs<'_>) -> Self {
        let positives: Vec<String> = inputs.positives.iter().map(|p| display_path(p)).collect();
        let negatives: Vec<String> = inputs.negatives.iter().map(|p| display_path(p)).collect();
        let summary = ManifestSummary {
            positive_sources: SourceCounts::from(inputs.positive_sources),
            negative_sources: SourceCounts::from(inputs.negative_sources),
            selected_positives: positives.len(),
            selected_negatives: negatives.len(),
            min_per_source: inputs.min_per_source,
            max_positives: inputs.max_positives,
            max_negatives: inputs.max_negatives,
        };
        Self {
            wake_phrase: inputs.wake_phrase.to_string(),
            positives,
            negatives,
            summary,
        }
    }
}

/// Paths of the artifacts written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetArtifacts {
    pub manifest: PathBuf,
    pub positives: PathBuf,
    pub negatives: PathBuf,
}

impl DatasetArtifacts {
    pub fn under(output_dir: &Path) -> Self {
        Self {
            manifest: output_dir.join(MANIFEST_FILE),
            positives: output_dir.join(POSITIVES_FILE),
            negatives: output_dir.join(NEGATIVES_FILE),
        }
    }
}

/// Write the manifest and both list files, replacing any previous run.
///
/// Files are written one after another; if a later write fails the earlier
/// artifacts stay on disk.
pub fn write_dataset(output_dir: &Path, manifest: &DatasetManifest) -> Result<DatasetArtifacts> {
    let artifacts = DatasetArtifacts::under(output_dir);
    let mut json = serde_json::to_string_pretty(manifest).context("serialize dataset manifest")?;
    json.push('\n');
    write_text(&artifacts.manifest, &json)?;
    write_text(&artifacts.positives, &render_lines(&manifest.positives))?;
    write_text(&artifacts.negatives, &render_lines(&manifest.negatives))?;
    tracing::info!(
        output_dir = %output_dir.display(),
        positives = manifest.positives.len(),
        negatives = manifest.negatives.len(),
        "wrote dataset artifacts"
    );
    Ok(artifacts)
}

/// Pretty JSON rendering of the summary block, as printed for the caller.
pub fn summary_json(summary: &ManifestSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("serialize manifest summary")
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
