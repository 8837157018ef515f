use catalog_lib::{error::Error, models::Manifest};

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Reads a manifest from a local file or downloads it
pub async fn load(location: &str) -> Result<Manifest, Error> {
    load_with(&reqwest::Client::new(), location).await
}

pub async fn load_with(client: &reqwest::Client, location: &str) -> Result<Manifest, Error> {
    let body = if is_remote(location) {
        debug!("fetching manifest from {}", location);
        let res = client
            .get(location)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                status: status.as_u16(),
            });
        }

        res.text().await.map_err(|e| Error::Request(e.to_string()))?
    } else {
        debug!("reading manifest from {}", location);
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| Error::Request(format!("error read {}: {}", location, e)))?
    };

    Manifest::from_json(&body)
}
