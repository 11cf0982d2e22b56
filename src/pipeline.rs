use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::output::{encode_snapshot, read_snapshot, replace_file};
use crate::render::render_markdown;
use crate::scraper::WechatDocScraper;

#[derive(Debug)]
pub struct ScrapeSummary {
    pub entries: usize,
    pub output: PathBuf,
}

/// Scrape the whole site, then render and write the Markdown reference.
///
/// Nothing is written until every page has been fetched, so a failed request
/// leaves any earlier output untouched. The snapshot is written before the
/// Markdown, so a failed snapshot write also leaves the Markdown untouched.
pub async fn run_scrape(config: &ScrapeConfig) -> Result<ScrapeSummary> {
    let scraper = WechatDocScraper::new(config)?;
    let documentation = scraper.scrape().await?;

    let markdown = render_markdown(&documentation.entries);
    let snapshot = match &config.snapshot {
        Some(path) => Some((path, encode_snapshot(&documentation)?)),
        None => None,
    };

    if let Some((snapshot, json)) = &snapshot {
        replace_file(snapshot, json)?;
        info!(path = %snapshot.display(), "Snapshot saved");
    }

    replace_file(&config.output, &markdown)?;
    info!(path = %config.output.display(), entries = documentation.entries.len(), "Documentation saved");

    Ok(ScrapeSummary {
        entries: documentation.entries.len(),
        output: config.output.clone(),
    })
}

/// Re-render a saved snapshot without touching the network.
pub fn run_render(snapshot: &Path, output: &Path) -> Result<ScrapeSummary> {
    let documentation = read_snapshot(snapshot)?;
    info!(
        base_url = %documentation.base_url,
        scraped_at = %documentation.scraped_at,
        "Rendering snapshot"
    );

    replace_file(output, &render_markdown(&documentation.entries))?;
    info!(path = %output.display(), entries = documentation.entries.len(), "Documentation saved");

    Ok(ScrapeSummary {
        entries: documentation.entries.len(),
        output: output.to_path_buf(),
    })
}
