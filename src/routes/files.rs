//! File endpoints.
//!
//! - GET /files?dirId=
//!   Lists the regular files of a folder (root when omitted) as fresh
//!   descriptors.
//!
//! - POST /files (multipart, `folderId` header)
//!   Uploads a batch of files into one folder. Any name collision makes
//!   the whole batch respond 409 `"error"`; otherwise 200 `"success"`.
//!   Per-file stream errors are logged and skipped, never fatal.
//!
//! - PUT /files { id, bounds? }
//!   Optionally crops the file in place, then returns its descriptor.
//!
//! - DELETE /files?id=
//!   Unlinks a single file.

use axum::{
    extract::{Multipart, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{CropBounds, FileDescriptor};
use crate::storage::{SharedStore, UploadDisposition};

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/files",
            get(list_files)
                .post(upload_files)
                .put(update_file)
                .delete(delete_file),
        )
        .with_state(store)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    dir_id: Option<String>,
}

async fn list_files(
    State(store): State<SharedStore>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FileDescriptor>>> {
    let files = store.list_files(params.dir_id.as_deref().unwrap_or(""))?;
    Ok(Json(files))
}

/// Receives a multipart batch. The destination folder arrives in the
/// `folderId` header because one batch shares a single target folder.
async fn upload_files(
    State(store): State<SharedStore>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let folder = headers
        .get("folderId")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let mut conflicted = false;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let Some(name) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        warn!("upload stream error for {name}: {err}");
                        continue;
                    }
                };
                match store.store_upload(folder.as_deref(), &name, &bytes).await {
                    Ok(UploadDisposition::Stored(id)) => debug!("stored upload {id}"),
                    Ok(UploadDisposition::Conflict(name)) => {
                        warn!("upload conflict: {name} already exists");
                        conflicted = true;
                    }
                    Err(err) => warn!("failed to store {name}: {err}"),
                }
            }
            Ok(None) => break,
            Err(err) => {
                warn!("multipart error: {err}");
                break;
            }
        }
    }

    if conflicted {
        (StatusCode::CONFLICT, "error").into_response()
    } else {
        (StatusCode::OK, "success").into_response()
    }
}

#[derive(Debug, Deserialize)]
struct UpdateRequest {
    id: String,
    bounds: Option<CropBounds>,
}

async fn update_file(
    State(store): State<SharedStore>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<FileDescriptor>> {
    let descriptor = store.describe_file(&request.id, request.bounds)?;
    Ok(Json(descriptor))
}

#[derive(Debug, Deserialize)]
struct DeleteParams {
    id: String,
}

async fn delete_file(
    State(store): State<SharedStore>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Value>> {
    let success = store.delete_file(&params.id)?;
    Ok(Json(json!({ "success": success })))
}
