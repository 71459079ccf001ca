use serde_json::{Map, Value};

use crate::document::ApiDocument;

/// Deepest level that is still expanded. Fragments below it are returned as-is.
pub const MAX_RESOLVE_DEPTH: usize = 5;

/// Inlines internal `$ref` pointers of a schema fragment.
///
/// Only `items` of arrays, `properties` of objects and `allOf` members are
/// descended into. `anyOf` and `oneOf` keep their inner references. Pointers
/// that cannot be followed, including external ones, are left in place.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'a> {
    document: &'a ApiDocument,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(document: &'a ApiDocument) -> Self {
        Self { document }
    }

    /// Resolve a fragment starting from depth 0
    pub fn resolve(&self, fragment: &Value) -> Value {
        self.resolve_at(fragment, 0)
    }

    pub fn resolve_at(&self, fragment: &Value, depth: usize) -> Value {
        if fragment.is_null() || depth > MAX_RESOLVE_DEPTH {
            return fragment.clone();
        }
        let Some(node) = fragment.as_object() else {
            return fragment.clone();
        };

        if let Some(pointer) = node.get("$ref").and_then(Value::as_str) {
            return match self.lookup(pointer) {
                Some(target) => self.resolve_at(target, depth + 1),
                None => {
                    tracing::debug!("Leaving unresolved reference {}", pointer);
                    fragment.clone()
                }
            };
        }

        let kind = node.get("type").and_then(Value::as_str);

        if kind == Some("array") {
            if let Some(items) = node.get("items") {
                let mut resolved = node.clone();
                resolved.insert("items".to_string(), self.resolve_at(items, depth + 1));
                return Value::Object(resolved);
            }
        }

        if kind == Some("object") {
            if let Some(properties) = node.get("properties").and_then(Value::as_object) {
                let properties: Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), self.resolve_at(schema, depth + 1)))
                    .collect();
                let mut resolved = node.clone();
                resolved.insert("properties".to_string(), Value::Object(properties));
                return Value::Object(resolved);
            }
        }

        if let Some(members) = node.get("allOf").and_then(Value::as_array) {
            let members = members
                .iter()
                .map(|member| self.resolve_at(member, depth + 1))
                .collect();
            let mut resolved = node.clone();
            resolved.insert("allOf".to_string(), Value::Array(members));
            return Value::Object(resolved);
        }

        fragment.clone()
    }

    /// Walk a `#/a/b/c` pointer from the document root
    fn lookup(&self, pointer: &str) -> Option<&'a Value> {
        let path = pointer.strip_prefix('#').unwrap_or(pointer);
        let path = path.strip_prefix('/').unwrap_or(path);

        let mut current = self.document.root();
        for segment in path.split('/') {
            let segment = segment.replace("~1", "/").replace("~0", "~");
            current = match current {
                Value::Object(map) => map.get(&segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
            if current.is_null() {
                return None;
            }
        }
        Some(current)
    }
}
