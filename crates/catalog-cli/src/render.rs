use std::{future::Future, path::Path};

use anyhow::Context;
use catalog_lib::{error::Error, html::StaticPage, models::Manifest, surface::Renderer};

use crate::manifest;

/// Writes the page only when the manifest loaded
pub async fn render<Fut>(renderer: &Renderer, manifest: Fut, output: &Path) -> Result<(), anyhow::Error>
where
    Fut: Future<Output = Result<Manifest, Error>>,
{
    let mut page = StaticPage::new();
    let summary = renderer.load_and_render(&mut page, manifest).await?;

    std::fs::write(output, page.into_html())
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!("{} written, {}", output.display(), summary.description());

    Ok(())
}

pub async fn stats(renderer: &Renderer, location: &str) -> Result<(), anyhow::Error> {
    let (cards, summary) = renderer.prepare(manifest::load(location).await?);

    for card in cards {
        println!(
            "{:<24} {:<28} {:<14} {}",
            card.id,
            card.name,
            card.type_label,
            card.status_badge()
        );
    }
    println!("{}", summary.description());

    Ok(())
}
