//! Shared helpers for writer specs

pub use std::path::{Path, PathBuf};
pub use std::time::Duration;
pub use sw_adapters::{FakeProducer, NoOpProducer, PauseGate, ProducerCall};
pub use sw_core::{Config, SinkConfig, WriterConfig};
pub use sw_writer::AppendWriter;

/// A destination file inside a private temp directory
pub struct Destination {
    // Keeps the directory alive for the whole test
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl Destination {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        Self { _dir: dir, path }
    }

    /// A path whose parent directory does not exist
    pub fn unreachable() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("records.jsonl");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn seed(&self, content: &str) {
        std::fs::write(&self.path, content).unwrap();
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }

    /// Assert the file holds exactly `expected`, with a line diff on failure
    pub fn assert_contents(&self, expected: &str) {
        similar_asserts::assert_eq!(self.contents().as_str(), expected);
    }
}

/// Config with a tiny buffer so most writes saturate the sink
pub fn tight_config(max_bytes: u64, high_water_mark: usize) -> Config {
    Config {
        writer: WriterConfig::with_max_bytes(max_bytes),
        sink: SinkConfig { high_water_mark },
    }
}
