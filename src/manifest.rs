//! Manifest generation - scan a directory and emit the JSON asset index.
//!
//! One entry per strategy file, in lexicographic filename order, serialized
//! as a JSON array with 2-space indentation. Nothing but the manifest is
//! written to stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::paytable::{self, STRATEGY_EXT, STRATEGY_PREFIX};

/// Manifest entry describing one strategy file.
#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub family: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
}

/// Generate the manifest for `dir` and write it to stdout, or to `output`
/// if given.
pub fn execute(dir: &Path, output: Option<&Path>) -> Result<()> {
    let entries = scan(dir)?;
    let json = serde_json::to_string_pretty(&entries)?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
            println!("Wrote {} entries to {}", entries.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Collect one [`ManifestEntry`] per strategy file in `dir`, sorted by
/// filename.
///
/// Subdirectories and files outside the `strategy_*.vpstrat2` convention are
/// silently skipped. Any filesystem error aborts the whole scan.
pub fn scan(dir: &Path) -> Result<Vec<ManifestEntry>> {
    let mut filenames = Vec::new();

    let listing = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in listing {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        // Non-UTF-8 names cannot match the ASCII naming convention.
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(STRATEGY_PREFIX) && name.ends_with(STRATEGY_EXT) {
            filenames.push(name.to_string());
        }
    }
    filenames.sort();

    let mut entries = Vec::with_capacity(filenames.len());
    for filename in filenames {
        let path = dir.join(&filename);
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        let id = paytable::paytable_id(&filename);
        entries.push(ManifestEntry {
            name: paytable::display_name(&id),
            family: paytable::game_family(&id).to_string(),
            file_size: metadata.len(),
            id,
        });
    }

    Ok(entries)
}
