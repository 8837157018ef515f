use catalog_lib::{error::Error, models::Manifest};

use crate::utils::resolve_url;

pub const MANIFEST_PATH: &str = "./index.json";

pub async fn fetch_manifest() -> Result<Manifest, Error> {
    let url = resolve_url(MANIFEST_PATH)?;

    let res = reqwest::get(url)
        .await
        .map_err(|e| Error::Request(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            status: status.as_u16(),
        });
    }

    let body = res.text().await.map_err(|e| Error::Request(e.to_string()))?;
    Manifest::from_json(&body)
}
