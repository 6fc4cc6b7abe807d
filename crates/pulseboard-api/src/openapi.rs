// SPDX-License-Identifier: Apache-2.0

use serde_json::{json, Value};

/// Canonical sha256 of the served document; bumped whenever the surface
/// changes so contract drift fails a test instead of shipping silently.
pub const OPENAPI_PINNED_SHA256: &str =
    "6f01a2dad3770b645ee7ec81d2b929531910be1b34e355f19c128bd3d7d8b4eb";

#[must_use]
pub fn openapi_spec() -> Value {
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "pulseboard API",
        "version": "v1"
      },
      "paths": {
        "/healthz": {"get": {"responses": {"200": {"description": "ok"}}}},
        "/readyz": {"get": {"responses": {"200": {"description": "ready"}}}},
        "/metrics": {"get": {"responses": {"200": {"description": "prometheus metrics"}}}},
        "/api/version": {"get": {"responses": {"200": {"description": "server version"}}}},
        "/api/services": {
          "get": {
            "parameters": [
              {"name": "serviceName", "in": "query", "schema": {"type": "string", "description": "case-insensitive substring match on the service name"}},
              {"name": "director", "in": "query", "schema": {"type": "string", "description": "case-insensitive substring match on the director name"}}
            ],
            "responses": {
              "200": {"description": "service list"},
              "304": {"description": "not modified"},
              "400": {"description": "invalid query", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}}
            }
          }
        },
        "/api/services/{id}": {
          "get": {
            "parameters": [
              {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
            ],
            "responses": {
              "200": {"description": "service record"},
              "404": {"description": "service not found", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}}
            }
          }
        },
        "/api/services/{id}/quality": {
          "get": {
            "parameters": [
              {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
            ],
            "responses": {
              "200": {"description": "service plus shared quality report"},
              "404": {"description": "service not found", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}}
            }
          }
        },
        "/api/services/{id}/health": {
          "get": {
            "parameters": [
              {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
            ],
            "responses": {
              "200": {"description": "service plus shared health report"},
              "404": {"description": "service not found", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}}
            }
          }
        },
        "/api/services/{id}/release-readiness": {
          "get": {
            "parameters": [
              {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
            ],
            "responses": {
              "200": {"description": "quality gates, deployment metrics, readiness score"},
              "404": {"description": "service not found", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}}
            }
          }
        },
        "/api/directors": {
          "get": {
            "responses": {
              "200": {"description": "distinct director names"},
              "304": {"description": "not modified"}
            }
          }
        },
        "/api/overview": {
          "get": {
            "responses": {
              "200": {"description": "top services by coverage plus fleet summary"},
              "304": {"description": "not modified"}
            }
          }
        },
        "/api/openapi.json": {"get": {"responses": {"200": {"description": "this document"}}}}
      },
      "components": {
        "schemas": {
          "Error": {
            "type": "object",
            "required": ["error"],
            "properties": {
              "error": {"type": "string"}
            }
          }
        }
      }
    })
}
