use serde::Deserialize;

use super::SourceDescriptor;
use crate::error::Error;

/// The sources manifest, either wrapped in an object or the legacy bare array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Manifest {
    Wrapped { sources: Vec<SourceDescriptor> },
    Bare(Vec<SourceDescriptor>),
}

impl Manifest {
    pub fn from_json(body: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        match self {
            Manifest::Wrapped { sources } | Manifest::Bare(sources) => sources,
        }
    }

    pub fn into_sources(self) -> Vec<SourceDescriptor> {
        match self {
            Manifest::Wrapped { sources } | Manifest::Bare(sources) => sources,
        }
    }
}

impl From<Vec<SourceDescriptor>> for Manifest {
    fn from(sources: Vec<SourceDescriptor>) -> Self {
        Manifest::Bare(sources)
    }
}
