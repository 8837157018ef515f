use serde::Deserialize;

/// Display-only version tag, published either as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Version {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Version {
    fn default() -> Self {
        Self::Number(1.into())
    }
}

impl From<u64> for Version {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Version::Number(n) => write!(f, "{n}"),
            Version::Text(s) => f.write_str(s),
        }
    }
}
