use std::path::PathBuf;
use std::time::Duration;

/// Root of the Mini Program server-side API reference.
pub const DEFAULT_BASE_URL: &str = "https://developers.weixin.qq.com/miniprogram/dev/OpenApiDoc/";
/// Links in the left-hand navigation menu.
pub const DEFAULT_NAV_SELECTOR: &str = ".markdown_nav a";
pub const DEFAULT_OUTPUT_PATH: &str = ".cursor/docs/wechat-miniprogram-server-api.mdc";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub nav_selector: String,
    pub output: PathBuf,
    /// Where to also dump the scraped records as JSON, if anywhere.
    pub snapshot: Option<PathBuf>,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            nav_selector: DEFAULT_NAV_SELECTOR.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            snapshot: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}
