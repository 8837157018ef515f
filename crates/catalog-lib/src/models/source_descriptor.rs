use serde::Deserialize;

use super::Version;

/// A type represent one entry of the sources manifest
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceDescriptor {
    pub id: String,
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub nsfw: i64,
    #[serde(rename = "iconURL", default)]
    pub icon_url: Option<String>,
}

impl SourceDescriptor {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn is_nsfw(&self) -> bool {
        self.nsfw == 1
    }

    /// `iconURL` when set, otherwise the conventional `./icons/<id>.png`
    pub fn icon(&self) -> String {
        match self.icon_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("./icons/{}.png", self.id),
        }
    }
}
