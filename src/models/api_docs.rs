use serde::{Deserialize, Serialize};

/// One endpoint scraped from a documentation category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDocEntry {
    pub category: String,
    pub name: String,
    pub description: String,
    pub request_method: String,
    pub request_url: String,
    pub request_parameters: Vec<RequestParameter>,
    pub response_parameters: Vec<ResponseParameter>,
    pub success_response: String,
    pub error_response: String,
}

/// A four-cell parameter table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParameter {
    pub name: String,
    pub param_type: String,
    /// Raw cell text, e.g. `是` / `否`.
    pub required: String,
    pub description: String,
}

/// A three-cell parameter table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameter {
    pub name: String,
    pub param_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedDocumentation {
    pub base_url: String,
    pub entries: Vec<ApiDocEntry>,
    pub scraped_at: chrono::DateTime<chrono::Utc>,
}
