// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tonal::ResourcePaths;

pub const LEXICON: &str = "abandon\t-2\nbad\t-3\ngood\t3\nhappy\t3\nlove\t3\nsad\t-2\nterrible\t-3\n";
pub const NEGATIONS: &str = "not\nnever\n\nno\n";
pub const DICTIONARY: &str = "i\nam\nhappy\nsad\nnot\nvery\ngood\nday\nit\nwas\na\nbad\nterrible\nlove\nthis\n2nd\ncan't\n";

/// Test fixture helper for creating temporary resource files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a file with given content
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write the three resource files and return their paths
    pub fn create_resources(&self, lexicon: &str, negations: &str, dictionary: &str) -> ResourcePaths {
        ResourcePaths {
            lexicon: self.create_file("lexicon.txt", lexicon),
            negations: self.create_file("negations.txt", negations),
            dictionary: self.create_file("dictionary.txt", dictionary),
        }
    }

    /// Write the default test resources
    pub fn create_default_resources(&self) -> ResourcePaths {
        self.create_resources(LEXICON, NEGATIONS, DICTIONARY)
    }
}
