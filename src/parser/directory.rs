use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::parser::filter::is_json_file;

/// Find JSON files in a directory, sorted by path so load order is stable.
/// If recursive is true, use walkdir; otherwise list the directory itself.
pub fn find_json_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if is_json_file(path) {
                json_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_json_file(&path) {
                json_files.push(path);
            }
        }
    }

    json_files.sort();
    Ok(json_files)
}
