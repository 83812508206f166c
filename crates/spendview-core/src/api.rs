//! HTTP client for the categorization backend.
//!
//! Three endpoints, all JSON except the multipart upload:
//! - `POST /upload`: spreadsheet in, `Vec<LineItem>` out
//! - `POST /chat`:   item context + running history in, `{reply}` out
//! - `POST /search`: `{query}` in, `{results}` out (missing = empty)

use serde::{Deserialize, Serialize};

use crate::config::CoreConfig;
use crate::error::ApiError;
use crate::models::{ChatMessage, LineItem, OriginalFields, SearchHit};

/// Body of `POST /chat`. The backend needs the item's original fields and
/// the AI's existing reasoning to ground its replies, plus the full running
/// history so the conversation stays multi-turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub supplier: String,
    pub material: String,
    pub description: String,
    pub amount: f64,
    pub reasoning: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(original: &OriginalFields, reasoning: &str, messages: Vec<ChatMessage>) -> Self {
        Self {
            supplier: original.supplier.clone(),
            material: original.material.clone(),
            description: original.description.clone(),
            amount: original.amount,
            reasoning: reasoning.to_string(),
            messages,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Client for the review backend. Cheap to clone; every in-flight request
/// task holds its own copy.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload a spreadsheet and decode the categorized rows.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<LineItem>, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<Vec<LineItem>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Ask the backend about one item's categorization.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.url("/chat"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.reply)
    }

    /// Run a web search for supplier/material terms.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ApiError> {
        let response = self
            .client
            .post(self.url("/search"))
            .json(&SearchRequest { query })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;

    #[test]
    fn chat_request_wire_shape() {
        let original = OriginalFields {
            supplier: "Acme".into(),
            material: "Bolt".into(),
            description: "M6 steel bolt".into(),
            amount: 120.0,
        };
        let request = ChatRequest::new(
            &original,
            "Matches catalog code",
            vec![ChatMessage::user("why not Hardware?")],
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["supplier"], "Acme");
        assert_eq!(json["material"], "Bolt");
        assert_eq!(json["description"], "M6 steel bolt");
        assert_eq!(json["amount"], 120.0);
        assert_eq!(json["reasoning"], "Matches catalog code");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "why not Hardware?");
    }

    #[test]
    fn chat_response_decodes_reply() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"reply":"Reconsidering: could also be Hardware."}"#).unwrap();
        assert_eq!(body.reply, "Reconsidering: could also be Hardware.");
    }

    #[test]
    fn search_response_missing_results_is_empty() {
        let body: SearchResponse = serde_json::from_str(r#"{"error":"timeout"}"#).unwrap();
        assert!(body.results.is_empty());

        let body: SearchResponse = serde_json::from_str(
            r#"{"results":[{"title":"Acme Corp","body":"Industrial fasteners","href":"https://acme.example"}]}"#,
        )
        .unwrap();
        assert_eq!(body.results.len(), 1);
        assert_eq!(body.results[0].href, "https://acme.example");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new(&CoreConfig::new("http://localhost:8000/"));
        assert_eq!(client.url("/search"), "http://localhost:8000/search");
    }
}
