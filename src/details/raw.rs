//! Typed projections of the operation objects found in a document.
//!
//! Every field is optional so that both API dialects deserialize into the
//! same shapes. A field of the wrong JSON kind reads as absent, so one odd
//! entry never hides the rest of an operation. Key order of maps follows
//! the document.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::util::{
    deserialize_bool_from_anything, deserialize_lenient, deserialize_lenient_map,
    deserialize_lenient_vec,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperation {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub operation_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub parameters: Option<Vec<RawParameter>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub request_body: Option<RawRequestBody>,
    #[serde(default, deserialize_with = "deserialize_lenient_map")]
    pub responses: Option<IndexMap<String, RawResponse>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawParameter {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub name: Option<String>,
    #[serde(rename = "in", default, deserialize_with = "deserialize_lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_required")]
    pub required: bool,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub description: Option<String>,
    /// Swagger 2.0 inline type; a string or, in newer documents, a list of strings
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub schema: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRequestBody {
    #[serde(default, deserialize_with = "deserialize_lenient_required")]
    pub required: bool,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_map")]
    pub content: Option<IndexMap<String, RawMediaType>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMediaType {
    pub schema: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_map")]
    pub content: Option<IndexMap<String, RawMediaType>>,
    /// Swagger 2.0 inline schema
    pub schema: Option<Value>,
}

// Arrays and objects in a `required` slot read as `false`.
fn deserialize_lenient_required<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(deserialize_bool_from_anything(value).unwrap_or(false))
}

/// First declared media type and its schema
pub fn first_media_type(
    content: &IndexMap<String, RawMediaType>,
) -> (Option<String>, Option<&Value>) {
    match content.first() {
        Some((content_type, media)) => (Some(content_type.clone()), media.schema.as_ref()),
        None => (None, None),
    }
}
