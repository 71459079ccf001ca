use indexmap::IndexMap;
use serde_json::Value;

use crate::details::outputs::{ExpandedEndpoint, ParameterInfo, RequestBodyInfo, ResponseInfo};
use crate::details::raw::{
    RawOperation, RawParameter, RawRequestBody, RawResponse, first_media_type,
};
use crate::document::ApiDocument;
use crate::schema::SchemaResolver;

/// Expand one operation into its caller-facing form.
///
/// Returns `None` only when the path or method does not exist. Fields of
/// an unexpected shape degrade to their defaults.
pub fn expand(document: &ApiDocument, path: &str, method: &str) -> Option<ExpandedEndpoint> {
    let op = document.operation(path, method)?;

    let raw: RawOperation = serde_json::from_value(Value::Object(op.operation.clone()))
        .unwrap_or_else(|e| {
            tracing::warn!("Reading operation {} {} with defaults: {}", op.method, op.path, e);
            RawOperation::default()
        });

    let resolver = SchemaResolver::new(document);

    Some(ExpandedEndpoint {
        path: op.path.to_string(),
        method: method.to_uppercase(),
        summary: raw.summary.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        operation_id: raw.operation_id.unwrap_or_default(),
        tags: raw.tags.unwrap_or_default(),
        parameters: raw
            .parameters
            .unwrap_or_default()
            .into_iter()
            .map(normalize_parameter)
            .collect(),
        request_body: raw.request_body.map(normalize_request_body),
        responses: normalize_responses(&resolver, raw.responses.unwrap_or_default()),
    })
}

fn normalize_parameter(param: RawParameter) -> ParameterInfo {
    let kind = param
        .kind
        .as_ref()
        .and_then(type_name)
        .or_else(|| {
            param
                .schema
                .as_ref()
                .and_then(|schema| schema.get("type"))
                .and_then(type_name)
        })
        .unwrap_or_else(|| "unknown".to_string());

    ParameterInfo {
        name: param.name.unwrap_or_default(),
        location: param.location.unwrap_or_default(),
        required: param.required,
        description: param.description.unwrap_or_default(),
        kind,
        schema: param.schema,
    }
}

// A `type` is either one name or a list of names, joined as `a | b`.
fn type_name(kind: &Value) -> Option<String> {
    let name = match kind {
        Value::String(name) => name.clone(),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        _ => return None,
    };
    (!name.is_empty()).then_some(name)
}

// Request bodies keep their schema as declared; only responses are resolved.
fn normalize_request_body(body: RawRequestBody) -> RequestBodyInfo {
    let (content_type, schema) = body
        .content
        .as_ref()
        .map(first_media_type)
        .unwrap_or((None, None));

    RequestBodyInfo {
        required: body.required,
        description: body.description.unwrap_or_default(),
        content_type,
        schema: schema.cloned(),
    }
}

fn normalize_responses(
    resolver: &SchemaResolver<'_>,
    responses: IndexMap<String, RawResponse>,
) -> IndexMap<String, ResponseInfo> {
    responses
        .into_iter()
        .map(|(status, response)| {
            let info = if let Some(content) = &response.content {
                let (content_type, schema) = first_media_type(content);
                ResponseInfo {
                    description: response.description,
                    content_type,
                    schema: schema.map(|schema| resolver.resolve(schema)),
                }
            } else if let Some(schema) = &response.schema {
                ResponseInfo {
                    schema: Some(resolver.resolve(schema)),
                    description: response.description,
                    content_type: None,
                }
            } else {
                ResponseInfo {
                    description: response.description,
                    content_type: None,
                    schema: None,
                }
            };
            (status, info)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn openapi3() -> ApiDocument {
        ApiDocument::from_value(json!({
            "openapi": "3.0.0",
            "paths": {
                "/foos/{id}": {
                    "get": {
                        "summary": "Get a foo",
                        "operationId": "getFoo",
                        "tags": ["foo"],
                        "parameters": [
                            {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}},
                            {"name": "fields", "in": "query", "schema": {"$ref": "#/components/schemas/Fields"}},
                            {"name": "X-Trace", "in": "header", "description": "trace id"}
                        ],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "application/json": {"schema": {"$ref": "#/components/schemas/Foo"}},
                                    "application/xml": {"schema": {"type": "string"}}
                                }
                            },
                            "404": {"description": "Not found"}
                        }
                    },
                    "put": {
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {"schema": {"$ref": "#/components/schemas/Foo"}},
                                "text/plain": {"schema": {"type": "string"}}
                            }
                        },
                        "responses": {"204": {"description": "Updated"}}
                    },
                    "delete": {
                        "tags": "not-a-list",
                        "operationId": 12,
                        "parameters": [7, {"name": "force", "in": "query", "required": [], "schema": {"type": ["boolean", "null"]}}],
                        "requestBody": "none",
                        "responses": {"204": {"description": "Deleted"}}
                    }
                }
            },
            "components": {
                "schemas": {
                    "Foo": {"type": "object", "properties": {"id": {"type": "integer"}}},
                    "Fields": {"type": "string"}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_response_schema_dereferenced() {
        let endpoint = expand(&openapi3(), "/foos/{id}", "get").unwrap();

        let ok = &endpoint.responses["200"];
        assert_eq!(ok.content_type.as_deref(), Some("application/json"));
        assert_eq!(ok.description.as_deref(), Some("OK"));
        let schema = ok.schema.as_ref().unwrap();
        assert_eq!(schema["properties"]["id"]["type"], "integer");
        assert!(schema.get("$ref").is_none());

        let missing = &endpoint.responses["404"];
        assert_eq!(missing.schema, None);
        assert_eq!(missing.content_type, None);
    }

    #[test]
    fn test_parameters_normalized_without_resolution() {
        let endpoint = expand(&openapi3(), "/foos/{id}", "get").unwrap();
        let params = &endpoint.parameters;

        assert_eq!(params[0].kind, "integer");
        assert!(params[0].required);

        assert_eq!(params[1].kind, "unknown");
        assert!(!params[1].required);
        assert_eq!(params[1].schema, Some(json!({"$ref": "#/components/schemas/Fields"})));

        assert_eq!(params[2].kind, "unknown");
        assert_eq!(params[2].description, "trace id");
        assert_eq!(params[2].schema, None);
    }

    #[test]
    fn test_request_body_uses_first_content_type_unresolved() {
        let endpoint = expand(&openapi3(), "/foos/{id}", "PUT").unwrap();
        let body = endpoint.request_body.unwrap();

        assert!(body.required);
        assert_eq!(body.description, "");
        assert_eq!(body.content_type.as_deref(), Some("application/json"));
        assert_eq!(body.schema, Some(json!({"$ref": "#/components/schemas/Foo"})));
    }

    #[test]
    fn test_defaults_and_method_case() {
        let doc = openapi3();
        let lower = expand(&doc, "/foos/{id}", "put").unwrap();
        let upper = expand(&doc, "/foos/{id}", "PUT").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.method, "PUT");
        assert_eq!(lower.summary, "");
        assert_eq!(lower.operation_id, "");
        assert!(lower.tags.is_empty());
        assert!(lower.parameters.is_empty());
        assert!(expand(&doc, "/foos/{id}", "get").unwrap().request_body.is_none());
    }

    #[test]
    fn test_not_found() {
        let doc = openapi3();
        assert!(expand(&doc, "/bars", "get").is_none());
        assert!(expand(&doc, "/foos/{id}", "post").is_none());
    }

    #[test]
    fn test_wrong_kinds_degrade_to_defaults() {
        let endpoint = expand(&openapi3(), "/foos/{id}", "delete").unwrap();

        assert_eq!(endpoint.method, "DELETE");
        assert!(endpoint.tags.is_empty());
        assert_eq!(endpoint.operation_id, "");
        assert!(endpoint.request_body.is_none());

        assert_eq!(endpoint.parameters.len(), 1);
        let force = &endpoint.parameters[0];
        assert_eq!(force.name, "force");
        assert!(!force.required);
        assert_eq!(force.kind, "boolean | null");

        assert_eq!(endpoint.responses["204"].description.as_deref(), Some("Deleted"));
    }

    #[test]
    fn test_legacy_response_schema() {
        let doc = ApiDocument::from_value(json!({
            "swagger": "2.0",
            "paths": {
                "/pets": {
                    "get": {
                        "parameters": [{"name": "limit", "in": "query", "type": "integer", "required": "true"}],
                        "responses": {
                            "200": {
                                "description": "pets",
                                "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}}
                            },
                            "default": {"description": "error"}
                        }
                    }
                }
            },
            "definitions": {
                "Pet": {"type": "object", "properties": {"name": {"type": "string"}}}
            }
        }))
        .unwrap();

        let endpoint = expand(&doc, "/pets", "get").unwrap();
        assert_eq!(endpoint.parameters[0].kind, "integer");
        assert!(endpoint.parameters[0].required);

        let ok = &endpoint.responses["200"];
        assert_eq!(ok.content_type, None);
        assert_eq!(
            ok.schema.as_ref().unwrap()["items"]["properties"]["name"]["type"],
            "string"
        );

        let statuses: Vec<_> = endpoint.responses.keys().map(String::as_str).collect();
        assert_eq!(statuses, vec!["200", "default"]);
    }

    #[test]
    fn test_vendor_extensions_keep_endpoint() {
        let doc = ApiDocument::from_value(json!({
            "openapi": "3.0.0",
            "paths": {
                "/limits": {
                    "get": {
                        "x-internal": true,
                        "x-codegen": {"name": 3},
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Limit"}}}
                            },
                            "x-rate-limited": true
                        }
                    }
                }
            },
            "components": {
                "schemas": {"Limit": {"type": "object", "properties": {"max": {"type": "integer"}}}}
            }
        }))
        .unwrap();

        let endpoint = expand(&doc, "/limits", "get").unwrap();
        let ok = &endpoint.responses["200"];
        assert_eq!(ok.description.as_deref(), Some("OK"));
        assert_eq!(ok.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            ok.schema.as_ref().unwrap()["properties"]["max"]["type"],
            "integer"
        );

        let extension = &endpoint.responses["x-rate-limited"];
        assert_eq!(extension.description, None);
        assert_eq!(extension.schema, None);
    }
}
