//! API documentation served at `GET /v1/docs`.
//!
//! The document is an explicitly constructed value handed to the router at
//! startup — no process-wide registration, no mutable singleton.

use serde_json::{json, Value};

/// Builds the OpenAPI description of the gateway's surface.
pub fn openapi() -> Value {
    let envelope = json!({
        "type": "object",
        "properties": {
            "message": { "type": "string" },
            "data": {}
        }
    });
    let error = json!({
        "type": "object",
        "properties": {
            "error": { "type": "string" }
        }
    });
    let list_parameters = json!([
        { "name": "offset", "in": "query", "required": false, "schema": { "type": "integer" } },
        { "name": "limit", "in": "query", "required": false, "schema": { "type": "integer" } },
        { "name": "search", "in": "query", "required": false, "schema": { "type": "string" } }
    ]);
    let id_parameter = json!([
        { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }
    ]);

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Blogpost Gateway",
            "description": "REST facade over the author, article, and authorization backend services",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/v1/article": {
                "get": { "summary": "List articles", "tags": ["articles"], "parameters": list_parameters },
                "post": { "summary": "Create article", "tags": ["articles"] },
                "put": { "summary": "Update article", "tags": ["articles"] }
            },
            "/v1/article/{id}": {
                "get": { "summary": "Get article by id", "tags": ["articles"], "parameters": id_parameter },
                "delete": { "summary": "Delete article by id", "tags": ["articles"], "parameters": id_parameter }
            },
            "/v1/author": {
                "get": { "summary": "List authors", "tags": ["authors"], "parameters": list_parameters },
                "post": { "summary": "Create author", "tags": ["authors"] },
                "put": { "summary": "Update author", "tags": ["authors"] }
            },
            "/v1/author/{id}": {
                "get": { "summary": "Get author by id", "tags": ["authors"], "parameters": id_parameter },
                "delete": { "summary": "Delete author by id", "tags": ["authors"], "parameters": id_parameter }
            },
            "/v1/login": {
                "post": { "summary": "Login", "tags": ["auth"] }
            }
        },
        "components": {
            "schemas": {
                "JsonResponse": envelope,
                "JsonErrorResponse": error
            },
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer" }
            }
        }
    })
}
