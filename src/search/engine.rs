use serde_json::Value;

use crate::document::{ApiDocument, OperationRef};
use crate::search::outputs::SearchResult;
use crate::search::tokenizer::QueryMatcher;

/// Find operations whose searchable text matches `keyword`.
///
/// Results come back in document order. There is no scoring.
pub fn search(document: &ApiDocument, keyword: &str) -> Vec<SearchResult> {
    let matcher = QueryMatcher::new(keyword);

    document
        .operations()
        .filter(|op| matcher.matches(&searchable_text(op)))
        .map(|op| SearchResult {
            path: op.path.to_string(),
            method: op.method.to_string(),
            summary: text_field(&op, "summary").to_string(),
            description: text_field(&op, "description").to_string(),
        })
        .collect()
}

/// Lowercased `path summary description operationId tags`
pub fn searchable_text(op: &OperationRef<'_>) -> String {
    let tags = op
        .operation
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    format!(
        "{} {} {} {} {}",
        op.path,
        text_field(op, "summary"),
        text_field(op, "description"),
        text_field(op, "operationId"),
        tags
    )
    .to_lowercase()
}

fn text_field<'a>(op: &OperationRef<'a>, name: &str) -> &'a str {
    op.operation
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
}
