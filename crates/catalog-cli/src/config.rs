use std::path::Path;

use anyhow::Context;
use catalog_lib::classification::Classification;

pub fn load_classification(path: Option<&Path>) -> Result<Classification, anyhow::Error> {
    let Some(path) = path else {
        debug!("using built-in classification");
        return Ok(Classification::default());
    };

    info!("Open classification from {:?}", path);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(Classification::from_yaml(&content)?)
}
