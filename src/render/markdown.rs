use std::sync::LazyLock;

use regex::Regex;

use crate::models::ApiDocEntry;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// Render entries into the Markdown reference, in list order.
///
/// Output depends only on `entries`; the same list always renders to the
/// same bytes.
pub fn render_markdown(entries: &[ApiDocEntry]) -> String {
    let mut markdown = String::new();

    for entry in entries {
        markdown.push_str(&format!("## {}\n", entry.category));
        markdown.push_str(&format!("### {}\n", entry.name));
        markdown.push_str(&format!("**Description:** {}\n", entry.description));
        markdown.push_str(&format!("**Request Method:** {}\n", entry.request_method));
        markdown.push_str(&format!("**Request URL:** {}\n", entry.request_url));

        markdown.push_str("**Request Parameters:**\n");
        markdown.push_str("| Parameter | Type | Required | Description |\n");
        markdown.push_str("|-----------|------|----------|-------------|\n");
        for param in &entry.request_parameters {
            markdown.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                table_cell(&param.name),
                table_cell(&param.param_type),
                table_cell(&param.required),
                table_cell(&param.description)
            ));
        }

        markdown.push_str("**Response Parameters:**\n");
        markdown.push_str("| Parameter | Type | Description |\n");
        markdown.push_str("|-----------|------|-------------|\n");
        for param in &entry.response_parameters {
            markdown.push_str(&format!(
                "| {} | {} | {} |\n",
                table_cell(&param.name),
                table_cell(&param.param_type),
                table_cell(&param.description)
            ));
        }

        markdown.push_str("**Successful Response Example:**\n");
        markdown.push_str(&format!("```json\n{}\n```\n", entry.success_response));
        markdown.push_str("**Failed Response Example:**\n");
        markdown.push_str(&format!("```json\n{}\n```\n", entry.error_response));
    }

    markdown
}

/// Keep a value on one table line and stop `|` from opening a new column.
fn table_cell(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RequestParameter, ResponseParameter};

    fn sample_entry() -> ApiDocEntry {
        ApiDocEntry {
            category: "订阅消息".to_string(),
            name: "sendMessage".to_string(),
            description: "发送订阅消息".to_string(),
            request_method: "POST".to_string(),
            request_url: "https://api.weixin.qq.com/cgi-bin/message/subscribe/send".to_string(),
            request_parameters: vec![RequestParameter {
                name: "touser".to_string(),
                param_type: "string".to_string(),
                required: "是".to_string(),
                description: "接收者的 openid".to_string(),
            }],
            response_parameters: vec![ResponseParameter {
                name: "errcode".to_string(),
                param_type: "number".to_string(),
                description: "错误码".to_string(),
            }],
            success_response: r#"{"errcode": 0}"#.to_string(),
            error_response: r#"{"errcode": 40003}"#.to_string(),
        }
    }

    #[test]
    fn test_render_single_entry_layout() {
        let expected = concat!(
            "## 订阅消息\n",
            "### sendMessage\n",
            "**Description:** 发送订阅消息\n",
            "**Request Method:** POST\n",
            "**Request URL:** https://api.weixin.qq.com/cgi-bin/message/subscribe/send\n",
            "**Request Parameters:**\n",
            "| Parameter | Type | Required | Description |\n",
            "|-----------|------|----------|-------------|\n",
            "| touser | string | 是 | 接收者的 openid |\n",
            "**Response Parameters:**\n",
            "| Parameter | Type | Description |\n",
            "|-----------|------|-------------|\n",
            "| errcode | number | 错误码 |\n",
            "**Successful Response Example:**\n",
            "```json\n{\"errcode\": 0}\n```\n",
            "**Failed Response Example:**\n",
            "```json\n{\"errcode\": 40003}\n```\n",
        );
        assert_eq!(render_markdown(&[sample_entry()]), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut second = sample_entry();
        second.name = "getTemplateList".to_string();
        second.request_parameters.clear();
        let entries = vec![sample_entry(), second];

        let first_pass = render_markdown(&entries);
        assert_eq!(first_pass, render_markdown(&entries.clone()));
        assert!(first_pass.find("### sendMessage").unwrap() < first_pass.find("### getTemplateList").unwrap());
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_markdown(&[]), "");
    }

    #[test]
    fn test_table_cell_escaping() {
        assert_eq!(table_cell("a | b"), "a \\| b");
        assert_eq!(table_cell("  line one\n\t line two "), "line one line two");
    }
}
