// src/input.rs
//
// Input collection: one transcription text file per specimen item,
// produced upstream by whatever transcription service is in use.

use std::error::Error;
use std::fs;
use std::path::Path;

/// One specimen's worth of input. `id` is the file stem; it seeds the
/// default catalog number when the transcription doesn't supply one.
#[derive(Clone, Debug)]
pub struct InputItem {
    pub id: String,
    pub raw_text: String,
}

/// Collect `*.txt` items from `dir`, sorted by file name so output order
/// is stable across runs.
pub fn collect_items(dir: &Path) -> Result<Vec<InputItem>, Box<dyn Error>> {
    if !dir.is_dir() {
        return Err(format!("Input path is not a directory: {}", dir.display()).into());
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    paths.sort();

    let mut items = Vec::with_capacity(paths.len());
    for path in paths {
        let raw_text = fs::read_to_string(&path)?;
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        items.push(InputItem { id, raw_text });
    }
    Ok(items)
}
