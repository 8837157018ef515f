use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::Error;

pub const UNKNOWN_TYPE: &str = "Unknown";

const OFFLINE_SOURCES: &[&str] = &[
    "fr.reaperscans",
    "fr.mangascan",
    "fr.legacyscans",
    "fr.sushiscan",
];

const SOURCE_TYPES: &[(&str, &str)] = &[
    ("fr.astralmanga", "Madara"),
    ("fr.mangascantrad", "Madara"),
    ("fr.mangasorigines", "Madara"),
    ("fr.reaperscans", "Madara"),
    ("fr.lelmanga", "MangaThemesia"),
    ("fr.sushiscan", "MangaStream"),
    ("fr.sushiscans", "MangaStream"),
    ("fr.mangascan", "MMRCMS"),
    ("fr.animesama", "Custom"),
    ("fr.fmteam", "Custom"),
    ("fr.lelscanfr", "Custom"),
    ("fr.phenixscans", "Custom"),
    ("fr.poseidonscans", "Custom"),
    ("fr.legacyscans", "Custom"),
];

/// Hand-maintained tables telling which sources are down and which template
/// each one is built on. Nothing here is derived from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Classification {
    #[serde(default)]
    offline: BTreeSet<String>,
    #[serde(default)]
    types: BTreeMap<String, String>,
}

impl Default for Classification {
    fn default() -> Self {
        Self::new(
            OFFLINE_SOURCES.iter().copied(),
            SOURCE_TYPES.iter().copied(),
        )
    }
}

impl Classification {
    pub fn new<'a, O, T>(offline: O, types: T) -> Self
    where
        O: IntoIterator<Item = &'a str>,
        T: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            offline: offline.into_iter().map(str::to_string).collect(),
            types: types
                .into_iter()
                .map(|(id, ty)| (id.to_string(), ty.to_string()))
                .collect(),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, Error> {
        serde_yml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn is_offline(&self, id: &str) -> bool {
        self.offline.contains(id)
    }

    pub fn type_label(&self, id: &str) -> &str {
        self.types.get(id).map(String::as_str).unwrap_or(UNKNOWN_TYPE)
    }

    pub fn has_type(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    pub fn offline_ids(&self) -> impl Iterator<Item = &str> {
        self.offline.iter().map(String::as_str)
    }
}
