//! Output types for endpoint detail tools
//!
//! These types are used as the return values from details tool methods.
//! They are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Dialect;

/// Fully expanded view of one operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedEndpoint {
    pub path: String,
    /// Uppercased HTTP method
    pub method: String,
    pub summary: String,
    pub description: String,
    pub operation_id: String,
    pub tags: Vec<String>,
    pub parameters: Vec<ParameterInfo>,
    pub request_body: Option<RequestBodyInfo>,
    /// Keyed by status code in declared order
    pub responses: IndexMap<String, ResponseInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub description: String,
    /// Inline type, else `schema.type`, else `"unknown"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Passed through without reference resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestBodyInfo {
    pub required: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Passed through without reference resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// Output from get_api_info operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfoOutput {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dialect: Dialect,
    pub path_count: usize,
    pub operation_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_uses_camel_case_field_names() {
        let endpoint = ExpandedEndpoint {
            path: "/users/{id}".to_string(),
            method: "GET".to_string(),
            summary: String::new(),
            description: String::new(),
            operation_id: "getUser".to_string(),
            tags: vec![],
            parameters: vec![ParameterInfo {
                name: "id".to_string(),
                location: "path".to_string(),
                required: true,
                description: String::new(),
                kind: "integer".to_string(),
                schema: None,
            }],
            request_body: None,
            responses: IndexMap::from([(
                "204".to_string(),
                ResponseInfo {
                    description: Some("No content".to_string()),
                    content_type: None,
                    schema: None,
                },
            )]),
        };

        let value = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(value["operationId"], "getUser");
        assert_eq!(value["requestBody"], Value::Null);
        assert_eq!(value["parameters"][0]["in"], "path");
        assert_eq!(value["parameters"][0]["type"], "integer");
        assert_eq!(value["responses"]["204"], json!({"description": "No content"}));
    }
}
