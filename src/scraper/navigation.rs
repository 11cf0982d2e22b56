use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// A documentation category linked from the navigation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub category: String,
    pub url: String,
}

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Collect the navigation links of the root page, in page order.
///
/// The link URL is `base_url` followed by the raw `href`, with no
/// normalisation. Anchors without an `href`, or with an empty one, are skipped.
pub fn extract_nav_links(html: &str, selector: &Selector, base_url: &str) -> Vec<NavLink> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for anchor in document.select(selector) {
        let category = anchor.text().collect::<String>().trim().to_string();
        match anchor.value().attr("href") {
            Some(href) if !href.is_empty() => links.push(NavLink {
                category,
                url: format!("{}{}", base_url, href),
            }),
            _ => debug!(%category, "Skipping navigation entry without href"),
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://developers.weixin.qq.com/miniprogram/dev/OpenApiDoc/";

    #[test]
    fn test_extract_nav_links_concatenates_href() {
        let html = r#"<div class="markdown_nav">
            <a href="user-login/code2Session.html"> 小程序登录 </a>
            <a href="qrcode-link/qr-code/getQRCode.html">获取小程序码</a>
        </div>
        <a href="outside.html">not in nav</a>"#;
        let selector = parse_selector(".markdown_nav a").unwrap();

        let links = extract_nav_links(html, &selector, BASE);
        assert_eq!(
            links,
            vec![
                NavLink {
                    category: "小程序登录".to_string(),
                    url: format!("{BASE}user-login/code2Session.html"),
                },
                NavLink {
                    category: "获取小程序码".to_string(),
                    url: format!("{BASE}qrcode-link/qr-code/getQRCode.html"),
                },
            ]
        );
    }

    #[test]
    fn test_extract_nav_links_keeps_malformed_urls() {
        let html = r#"<div class="markdown_nav"><a href="/absolute/path.html">abs</a></div>"#;
        let selector = parse_selector(".markdown_nav a").unwrap();

        let links = extract_nav_links(html, &selector, BASE);
        assert_eq!(links[0].url, format!("{BASE}/absolute/path.html"));
    }

    #[test]
    fn test_extract_nav_links_skips_missing_href() {
        let html = r#"<div class="markdown_nav"><a>group</a><a href="">empty</a><a href="x.html">x</a></div>"#;
        let selector = parse_selector(".markdown_nav a").unwrap();

        let links = extract_nav_links(html, &selector, BASE);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].category, "x");
    }

    #[test]
    fn test_parse_selector_rejects_garbage() {
        let result = parse_selector("a[");
        assert!(matches!(result, Err(ScrapeError::InvalidSelector { .. })));
    }
}
