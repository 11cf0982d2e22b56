mod client;
mod dom;
mod endpoint;
mod navigation;
mod wechat_scraper;

pub use wechat_scraper::WechatDocScraper;
