//! One end-to-end run: resolve, select, write.
use crate::config::Settings;
use crate::manifest::{write_dataset, DatasetArtifacts, DatasetManifest, ManifestInputs};
use crate::select::select_diverse;
use crate::sources::resolve_sources;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of a completed run.
pub struct GenerateOutcome {
    pub manifest: DatasetManifest,
    pub artifacts: DatasetArtifacts,
}

/// Build and persist the dataset manifest described by `settings`.
///
/// One generator drives both labels, positives first, so a seed fixes the
/// whole run.
pub fn run_generate(settings: &Settings) -> Result<GenerateOutcome> {
    let positive_sources = resolve_sources(&settings.positive_sources);
    let negative_sources = resolve_sources(&settings.negative_sources);

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let positives = select_diverse(&positive_sources, &settings.positive_params(), &mut rng);
    let negatives = select_diverse(&negative_sources, &settings.negative_params(), &mut rng);

    let manifest = DatasetManifest::build(&ManifestInputs {
        wake_phrase: &settings.wake_phrase,
        positive_sources: &positive_sources,
        negative_sources: &negative_sources,
        positives: &positives,
        negatives: &negatives,
        min_per_source: settings.min_per_source,
        max_positives: settings.max_positives,
        max_negatives: settings.max_negatives,
    });
    let artifacts = write_dataset(&settings.output_dir, &manifest)?;
    Ok(GenerateOutcome {
        manifest,
        artifacts,
    })
}
