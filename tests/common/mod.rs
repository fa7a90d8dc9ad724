//! Shared test infrastructure for integration tests.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables the binary falls back to; cleared so the host
/// environment cannot leak into a test run.
const FALLBACK_ENV: [&str; 9] = [
    "DATASET_DIR",
    "WAKE_PHRASE",
    "POSITIVE_SOURCES",
    "NEGATIVE_SOURCES",
    "MAX_POSITIVE_SAMPLES",
    "MAX_NEGATIVE_SAMPLES",
    "MIN_PER_SOURCE",
    "DATASET_SEED",
    "DATASET_CONFIG",
];

/// Temporary workspace holding audio fixtures and run outputs.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn create() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create `count` clips named `clip_<n>.wav` under `rel`.
    pub fn audio_dir(&self, rel: &str, count: usize) -> String {
        let dir = self.path(rel);
        std::fs::create_dir_all(&dir).expect("create fixture dir");
        for idx in 0..count {
            std::fs::write(dir.join(format!("clip_{idx}.wav")), b"RIFF").expect("write clip");
        }
        dir.display().to_string()
    }

    pub fn file(&self, rel: &str) -> String {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directory");
        }
        std::fs::write(&path, b"data").expect("write file");
        path.display().to_string()
    }
}

pub fn command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wakeword-dataset"));
    for key in FALLBACK_ENV {
        cmd.env_remove(key);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run(args: &[&str]) -> Output {
    command().args(args).output().expect("run wakeword-dataset")
}

pub fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read JSON");
    serde_json::from_str(&text).expect("parse JSON")
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read list")
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item.as_str().expect("string item").to_string())
        .collect()
}
