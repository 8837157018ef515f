//! Backfills the `id` of listings declared in each source's `source.json`.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::Context;
use fancy_regex::Regex;
use serde_json::Value;
use walkdir::WalkDir;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

pub fn slugify(text: &str) -> String {
    let slug = NON_WORD.replace_all(text, "").trim().to_lowercase();
    SEPARATORS.replace_all(&slug, "-").into_owned()
}

/// Adds missing ids in place, returns how many were added
pub fn fix_listings(source: &mut Value) -> usize {
    let Some(listings) = source.get_mut("listings").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut added = 0;
    for listing in listings.iter_mut().filter_map(Value::as_object_mut) {
        if listing.contains_key("id") {
            continue;
        }

        let Some(name) = listing.get("name").and_then(Value::as_str) else {
            continue;
        };

        let id = slugify(name);
        info!("  Added ID '{}' for listing '{}'", id, name);
        listing.insert("id".to_string(), Value::String(id));
        added += 1;
    }

    added
}

/// Returns whether the file was rewritten
pub fn fix_file(path: &Path) -> Result<bool, anyhow::Error> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut source: Value = serde_json::from_str(&content)?;

    if fix_listings(&mut source) == 0 {
        debug!("  No changes needed: {}", path.display());
        return Ok(false);
    }

    std::fs::write(path, serde_json::to_string_pretty(&source)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("  Updated: {}", path.display());

    Ok(true)
}

fn source_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != "target")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == "source.json")
        .map(|entry| entry.into_path())
        .collect()
}

pub fn fix_all(root: &Path) -> Result<(), anyhow::Error> {
    let files = source_files(root);
    info!("Found {} source.json files", files.len());

    let mut updated = 0;
    for path in files {
        info!("Processing: {}", path.display());
        match fix_file(&path) {
            Ok(true) => updated += 1,
            Ok(false) => {}
            Err(e) => error!("  Error processing {}: {}", path.display(), e),
        }
    }

    info!("Completed fixing listing IDs, {} files updated", updated);

    Ok(())
}
