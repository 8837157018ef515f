use std::collections::{BTreeMap, BTreeSet};

use anyhow::bail;
use catalog_lib::prelude::{Classification, Renderer, SourceDescriptor};

use crate::manifest;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// ids listed more than once
    pub duplicates: Vec<String>,
    /// ids that will render as `Unknown`
    pub untyped: Vec<String>,
    /// offline ids that are no longer in the manifest
    pub stale_offline: Vec<String>,
}

impl Report {
    pub fn new(sources: &[SourceDescriptor], classification: &Classification) -> Self {
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for source in sources {
            *seen.entry(source.id.as_str()).or_default() += 1;
        }

        let duplicates = seen
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(id, _)| id.to_string())
            .collect();

        let untyped = seen
            .keys()
            .filter(|id| !classification.has_type(id))
            .map(|id| id.to_string())
            .collect();

        let ids: BTreeSet<&str> = seen.keys().copied().collect();
        let stale_offline = classification
            .offline_ids()
            .filter(|id| !ids.contains(id))
            .map(str::to_string)
            .collect();

        Self {
            duplicates,
            untyped,
            stale_offline,
        }
    }
}

pub async fn run(renderer: &Renderer, location: &str) -> Result<(), anyhow::Error> {
    let manifest = manifest::load(location).await?;
    let report = Report::new(manifest.sources(), renderer.classification());

    for id in &report.untyped {
        warn!("{} has no source type, it will show as Unknown", id);
    }
    for id in &report.stale_offline {
        warn!("{} is marked offline but is not in the manifest", id);
    }
    for id in &report.duplicates {
        error!("{} is listed more than once", id);
    }

    if !report.duplicates.is_empty() {
        bail!("{} duplicated source ids", report.duplicates.len());
    }

    info!("{} sources checked", manifest.sources().len());

    Ok(())
}
