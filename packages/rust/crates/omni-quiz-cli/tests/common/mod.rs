//! Shared test helpers for omni-quiz-cli.

#![allow(dead_code)]

use std::path::Path;

/// Write `content` to `dir/name`, returning the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}

/// Data directory with two questions and two catalogs.
pub fn quiz_data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_file(
        dir.path(),
        "questions.txt",
        "I like to make plans. C:1\nI enjoy big parties. E:1\n",
    );
    write_file(
        dir.path(),
        "Vegetables.people",
        "Carrot. C:2 E:-1\nCorn. E:3 C:-1\n",
    );
    write_file(dir.path(), "Animals.people", "Owl. C:1 E:1\nCat. E:-2\n");
    write_file(dir.path(), "notes.txt", "not a catalog\n");
    dir
}
