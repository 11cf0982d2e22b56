use scraper::Selector;
use tracing::info;

use super::client::DocClient;
use super::endpoint::extract_entries;
use super::navigation::{extract_nav_links, parse_selector};
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::models::ScrapedDocumentation;

pub struct WechatDocScraper {
    base_url: String,
    nav_selector: Selector,
    client: DocClient,
}

impl WechatDocScraper {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.clone(),
            nav_selector: parse_selector(&config.nav_selector)?,
            client: DocClient::new(&config.user_agent, config.timeout)?,
        })
    }

    /// Walk the navigation panel and extract every category page in order.
    /// The first failed request ends the walk.
    pub async fn scrape(&self) -> Result<ScrapedDocumentation> {
        info!(url = %self.base_url, "Scraping navigation");
        let index_html = self.client.get_text(&self.base_url).await?;
        let links = extract_nav_links(&index_html, &self.nav_selector, &self.base_url);
        info!("Found {} navigation links", links.len());

        let mut entries = Vec::new();
        for link in links {
            info!(category = %link.category, url = %link.url, "Scraping category");
            let html_content = self.client.get_text(&link.url).await?;
            let found = extract_entries(&link.category, &html_content);
            info!(category = %link.category, "Found {} endpoints", found.len());
            entries.extend(found);
        }

        Ok(ScrapedDocumentation {
            base_url: self.base_url.clone(),
            entries,
            scraped_at: chrono::Utc::now(),
        })
    }
}
