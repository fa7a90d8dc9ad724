//! CLI argument parsing for dataset manifest generation.
//!
//! Every flag also reads an environment variable so launcher scripts can pass
//! settings through unchanged. Numeric flags are kept as raw strings here; an
//! empty value means "not provided" and validation happens in `config`.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "wakeword-dataset",
    version,
    about = "Generate a diversified dataset manifest for wakeword training",
    after_help = "Outputs (under --output-dir):\n  dataset.json    manifest with selections and per-source summary\n  positives.txt   selected positive clips, one path per line\n  negatives.txt   selected negative clips, one path per line\n\nExamples:\n  wakeword-dataset --output-dir run/dataset --wake-phrase \"hey computer\" \\\n    --positive-sources data/pos,data/tts --negative-sources data/neg \\\n    --max-positives 500 --min-per-source 20 --seed 7"
)]
pub struct Cli {
    /// Directory that receives dataset.json, positives.txt and negatives.txt
    #[arg(long, value_name = "DIR", env = "DATASET_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Wake phrase recorded in the manifest
    #[arg(long, value_name = "TEXT", env = "WAKE_PHRASE")]
    pub wake_phrase: Option<String>,

    /// Comma-separated files or directories with positive examples
    #[arg(long, value_name = "LIST", env = "POSITIVE_SOURCES")]
    pub positive_sources: Option<String>,

    /// Comma-separated files or directories with negative examples
    #[arg(long, value_name = "LIST", env = "NEGATIVE_SOURCES")]
    pub negative_sources: Option<String>,

    /// Maximum number of positives to select (empty for no limit)
    #[arg(
        long,
        value_name = "N",
        env = "MAX_POSITIVE_SAMPLES",
        allow_hyphen_values = true
    )]
    pub max_positives: Option<String>,

    /// Maximum number of negatives to select (empty for no limit)
    #[arg(
        long,
        value_name = "N",
        env = "MAX_NEGATIVE_SAMPLES",
        allow_hyphen_values = true
    )]
    pub max_negatives: Option<String>,

    /// Minimum items taken from every non-empty source (empty for 0)
    #[arg(
        long,
        value_name = "N",
        env = "MIN_PER_SOURCE",
        allow_hyphen_values = true
    )]
    pub min_per_source: Option<String>,

    /// Seed for the per-source shuffles (default 42)
    #[arg(
        long,
        value_name = "INT",
        env = "DATASET_SEED",
        allow_hyphen_values = true
    )]
    pub seed: Option<String>,

    /// Optional JSON config providing defaults for any flag above; a blank
    /// source list on the command line falls back to the config's list
    #[arg(long, value_name = "PATH", env = "DATASET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit debug logs on stderr
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn numeric_flags_accept_raw_values() {
        let cli = Cli::try_parse_from([
            "wakeword-dataset",
            "--output-dir",
            "out",
            "--wake-phrase",
            "hey",
            "--positive-sources",
            "p",
            "--negative-sources",
            "n",
            "--max-positives",
            "-3",
            "--min-per-source",
            "",
        ])
        .expect("parse args");

        assert_eq!(cli.max_positives.as_deref(), Some("-3"));
        assert_eq!(cli.min_per_source.as_deref(), Some(""));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    }
}
