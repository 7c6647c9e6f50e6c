//! OpenAPI document describing the catalog and demo routes.
//!
//! The document is built once and cloned per request so the server list
//! can be patched for callers on localhost.

use std::sync::LazyLock;

use axum::http::{header, uri::Authority, HeaderMap, Uri};
use serde_json::{json, Map, Value};

static DOCUMENT: LazyLock<Value> = LazyLock::new(build_document);

/// The document as built at start-up, without any server entries.
pub fn document() -> &'static Value {
    &DOCUMENT
}

/// `{scheme}://{host}` of the incoming request, honouring `X-Forwarded-Proto`.
///
/// HTTP/2 requests carry the host in the URI authority rather than a `Host`
/// header, so the URI is used when the header is missing.
pub fn request_origin(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(Authority::as_str))
        .unwrap_or_default();
    format!("{scheme}://{host}")
}

/// The document as served to a caller at `origin`.
pub fn document_for(origin: &str, local_server_url: &str) -> Value {
    let mut doc = document().clone();
    if origin.contains("localhost") {
        if let Some(servers) = doc.get_mut("servers").and_then(Value::as_array_mut) {
            servers.insert(
                0,
                json!({
                    "url": local_server_url,
                    "description": "Local development server",
                }),
            );
        }
    }
    doc
}

// ─── Resources ──────────────────────────────────────────────────────────

struct ResourceDoc {
    tag: &'static str,
    /// "Artist", also the schema name.
    name: &'static str,
    /// "artist", as used in prose.
    singular: &'static str,
    /// Indefinite article for `singular`.
    article: &'static str,
    /// Path segment and list key, e.g. "artists".
    plural: &'static str,
    example_id: u64,
    list_description: &'static str,
    create_description: &'static str,
    update_description: &'static str,
    delete_description: &'static str,
}

const ARTISTS: ResourceDoc = ResourceDoc {
    tag: "Artists",
    name: "Artist",
    singular: "artist",
    article: "an",
    plural: "artists",
    example_id: 1,
    list_description: "Retrieve the list of artists. Can be filtered by genre (case-insensitive) to find artists of a specific musical style.",
    create_description: "Add a new artist to the music library with their basic information and biography.",
    update_description: "Modify an existing artist's information. Fields present in the request override the stored values, absent fields are kept and `null` clears an optional field.",
    delete_description: "Remove an artist from the library. Their albums and songs are kept.",
};

const ALBUMS: ResourceDoc = ResourceDoc {
    tag: "Albums",
    name: "Album",
    singular: "album",
    article: "an",
    plural: "albums",
    example_id: 1,
    list_description: "Retrieve the list of albums. Can be filtered by artist ID and/or release year.",
    create_description: "Add a new album to the library, associated with an artist.",
    update_description: "Modify an existing album's information. Fields present in the request override the stored values, absent fields are kept and `null` clears an optional field.",
    delete_description: "Remove an album from the library. Songs on the album are kept.",
};

const SONGS: ResourceDoc = ResourceDoc {
    tag: "Songs",
    name: "Song",
    singular: "song",
    article: "a",
    plural: "songs",
    example_id: 1,
    list_description: "Retrieve the list of songs. Can be filtered by album ID to get all songs from a specific album.",
    create_description: "Add a new song to the library, associated with an album. A placeholder audio URL is assigned.",
    update_description: "Modify an existing song's information. Fields present in the request override the stored values, absent fields are kept and `null` clears an optional field.",
    delete_description: "Remove a song from the library.",
};

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_body(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn error_response(description: String) -> Value {
    json!({ "description": description, "content": json_body(schema_ref("Error")) })
}

fn query_param(name: &str, description: &str, kind: &str) -> Value {
    json!({
        "name": name,
        "in": "query",
        "description": description,
        "required": false,
        "schema": { "type": kind },
    })
}

fn id_param(resource: &ResourceDoc) -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": format!("ID of the {}", resource.singular),
        "schema": { "type": "integer" },
        "example": resource.example_id,
    })
}

fn list_filters(resource: &ResourceDoc) -> Vec<Value> {
    match resource.plural {
        "artists" => vec![query_param("genre", "Filter artists by genre", "string")],
        "albums" => vec![
            query_param("artistId", "Filter albums by artist ID", "integer"),
            query_param("year", "Filter albums by release year", "integer"),
        ],
        _ => vec![query_param("albumId", "Filter songs by album ID", "integer")],
    }
}

fn collection_path(resource: &ResourceDoc) -> Value {
    let list_schema = json!({
        "type": "object",
        "properties": {
            resource.plural: { "type": "array", "items": schema_ref(resource.name) }
        }
    });

    json!({
        "get": {
            "tags": [resource.tag],
            "summary": format!("List {}", resource.plural),
            "description": resource.list_description,
            "parameters": list_filters(resource),
            "responses": {
                "200": {
                    "description": format!("List of {}", resource.plural),
                    "content": json_body(list_schema),
                },
                "400": error_response("Invalid query parameter".to_string()),
            }
        },
        "post": {
            "tags": [resource.tag],
            "summary": format!("Create a new {}", resource.singular),
            "description": resource.create_description,
            "requestBody": {
                "required": true,
                "content": json_body(schema_ref(&format!("New{}", resource.name))),
            },
            "responses": {
                "201": {
                    "description": format!("{} created", resource.name),
                    "content": json_body(schema_ref(resource.name)),
                },
                "400": error_response("Malformed request body".to_string()),
                "422": error_response("Request body failed validation".to_string()),
            }
        }
    })
}

fn item_path(resource: &ResourceDoc) -> Value {
    let not_found = error_response(format!("{} not found", resource.name));
    let deleted_schema = json!({
        "type": "object",
        "properties": {
            "message": {
                "type": "string",
                "example": format!("{} deleted successfully", resource.name),
            }
        }
    });

    json!({
        "parameters": [id_param(resource)],
        "get": {
            "tags": [resource.tag],
            "summary": format!("Get a single {}", resource.singular),
            "responses": {
                "200": {
                    "description": format!("The {}", resource.singular),
                    "content": json_body(schema_ref(resource.name)),
                },
                "404": not_found.clone(),
            }
        },
        "put": {
            "tags": [resource.tag],
            "summary": format!("Update {} {}", resource.article, resource.singular),
            "description": resource.update_description,
            "requestBody": {
                "required": true,
                "content": json_body(schema_ref(&format!("{}Update", resource.name))),
            },
            "responses": {
                "200": {
                    "description": format!("{} updated", resource.name),
                    "content": json_body(schema_ref(resource.name)),
                },
                "404": not_found.clone(),
                "422": error_response("Request body failed validation".to_string()),
            }
        },
        "delete": {
            "tags": [resource.tag],
            "summary": format!("Delete {} {}", resource.article, resource.singular),
            "description": resource.delete_description,
            "responses": {
                "200": {
                    "description": format!("{} deleted", resource.name),
                    "content": json_body(deleted_schema),
                },
                "404": not_found,
            }
        }
    })
}

fn audio_path() -> Value {
    let upload_body = json!({
        "multipart/form-data": {
            "schema": {
                "type": "object",
                "properties": {
                    "file": {
                        "type": "string",
                        "format": "binary",
                        "description": "Audio file (MP3, WAV, etc.)",
                    }
                }
            }
        }
    });
    let uploaded_schema = json!({
        "type": "object",
        "properties": {
            "message": { "type": "string", "example": "Audio file uploaded successfully" },
            "audioUrl": { "type": "string", "example": "https://example.com/audio/123.mp3" },
        }
    });

    json!({
        "post": {
            "tags": ["Songs"],
            "summary": "Upload song audio file",
            "description": "Upload an audio file (MP3, WAV) for an existing song. Will replace any existing audio file.",
            "parameters": [id_param(&SONGS)],
            "requestBody": { "required": true, "content": upload_body },
            "responses": {
                "200": {
                    "description": "Audio file uploaded successfully",
                    "content": json_body(uploaded_schema),
                },
                "404": error_response("Song not found".to_string()),
            }
        }
    })
}

fn auth_path(summary: &str, description: &str, scheme: &str, scopes: &[&str], denied: Option<&str>) -> Value {
    let mut responses = Map::new();
    responses.insert("200".into(), json!({ "description": "OK" }));
    if let Some(denied) = denied {
        responses.insert("401".into(), json!({ "description": denied }));
    }

    json!({
        "get": {
            "tags": ["Misc"],
            "summary": summary,
            "description": description,
            "security": [{ scheme: scopes }],
            "responses": responses,
        }
    })
}

fn paths() -> Value {
    let mut paths = Map::new();
    for resource in [&ARTISTS, &ALBUMS, &SONGS] {
        paths.insert(format!("/api/{}", resource.plural), collection_path(resource));
        paths.insert(format!("/api/{}/{{id}}", resource.plural), item_path(resource));
    }
    paths.insert("/api/songs/{id}/audio".into(), audio_path());
    paths.insert(
        "/api/auth/basic".into(),
        auth_path(
            "Basic Auth route",
            "Route with Basic Authentication",
            "BasicAuth",
            &[],
            Some("No Basic Auth header provided"),
        ),
    );
    paths.insert(
        "/api/auth/bearer".into(),
        auth_path(
            "Bearer Auth route",
            "Route with Bearer Authentication",
            "BearerAuth",
            &[],
            Some("No Bearer Auth header provided"),
        ),
    );
    paths.insert(
        "/api/auth/key".into(),
        auth_path(
            "API Key Auth route",
            "Route with API Key Authentication",
            "ApiKeyAuth",
            &[],
            Some("No API Key header provided"),
        ),
    );
    paths.insert(
        "/api/auth/google".into(),
        auth_path(
            "Google Auth route",
            "Route with Google OpenIdConnect Authentication",
            "GoogleOpenIdAuth",
            &["read"],
            None,
        ),
    );
    Value::Object(paths)
}

// ─── Components ─────────────────────────────────────────────────────────

fn security_schemes() -> Value {
    json!({
        "BasicAuth": { "type": "http", "scheme": "basic" },
        "BearerAuth": { "type": "http", "scheme": "bearer" },
        "ApiKeyAuth": { "type": "apiKey", "in": "header", "name": "X-API-Key" },
        "GoogleOpenIdAuth": {
            "type": "openIdConnect",
            "openIdConnectUrl": "https://accounts.google.com/.well-known/openid-configuration",
        }
    })
}

fn artist_properties() -> Value {
    json!({
        "name": { "type": "string", "example": "The Beatles" },
        "genre": { "type": "string", "example": "Rock" },
        "country": { "type": "string", "example": "United Kingdom" },
        "biography": { "type": "string" },
    })
}

fn album_properties() -> Value {
    json!({
        "title": { "type": "string", "example": "Abbey Road" },
        "artistId": { "type": "integer", "example": 1 },
        "releaseYear": { "type": "integer", "example": 1969 },
        "genre": { "type": "string", "example": "Rock" },
    })
}

fn song_properties() -> Value {
    json!({
        "title": { "type": "string", "example": "Come Together" },
        "albumId": { "type": "integer", "example": 1 },
        "duration": {
            "type": "integer",
            "minimum": 1,
            "description": "Duration in seconds",
            "example": 259,
        },
        "trackNumber": { "type": "integer", "example": 1 },
    })
}

/// New{name}, {name}Update and {name} for one resource.
fn resource_schemas(
    schemas: &mut Map<String, Value>,
    name: &str,
    properties: Value,
    required: &[&str],
    extra: Value,
) {
    schemas.insert(
        format!("New{name}"),
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": required,
            "properties": properties.clone(),
        }),
    );
    schemas.insert(
        format!("{name}Update"),
        json!({
            "type": "object",
            "additionalProperties": false,
            "properties": properties,
        }),
    );

    let mut own = json!({
        "id": { "type": "integer", "example": 1 },
        "createdAt": { "type": "string", "format": "date-time" },
    });
    if let (Some(own), Value::Object(extra)) = (own.as_object_mut(), extra) {
        own.extend(extra);
    }
    schemas.insert(
        name.to_string(),
        json!({
            "allOf": [
                schema_ref(&format!("New{name}")),
                { "type": "object", "required": ["id", "createdAt"], "properties": own },
            ]
        }),
    );
}

fn schemas() -> Value {
    let mut schemas = Map::new();
    resource_schemas(
        &mut schemas,
        "Artist",
        artist_properties(),
        &["name", "genre"],
        json!({}),
    );
    resource_schemas(
        &mut schemas,
        "Album",
        album_properties(),
        &["title", "artistId", "releaseYear"],
        json!({}),
    );
    resource_schemas(
        &mut schemas,
        "Song",
        song_properties(),
        &["title", "albumId", "duration"],
        json!({
            "audioUrl": {
                "type": "string",
                "nullable": true,
                "example": "https://example.com/audio/123.mp3",
            }
        }),
    );
    schemas.insert(
        "Error".into(),
        json!({
            "type": "object",
            "properties": {
                "error": { "type": "string", "example": "Resource not found" }
            }
        }),
    );
    Value::Object(schemas)
}

fn build_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Music Library API",
            "description": "API for managing a music library with artists, albums, and songs",
            "version": "1.0.0",
        },
        "tags": [
            { "name": "Artists", "description": "Operations about artists" },
            { "name": "Albums", "description": "Operations about albums" },
            { "name": "Songs", "description": "Operations about songs" },
            { "name": "Misc", "description": "Auth demo routes" },
        ],
        "servers": [],
        "paths": paths(),
        "components": {
            "securitySchemes": security_schemes(),
            "schemas": schemas(),
        }
    })
}
