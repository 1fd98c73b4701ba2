//! Folder tree endpoints.
//!
//! - GET /folders?nodeId=
//!   Lists the immediate subfolders of a node (root when omitted).
//!   Used by: FolderTree on initial load and lazy node expansion
//!
//! - POST /folders { node: { name }, parentNodeId }
//!   Creates a folder under the parent, 403 if it already exists.
//!
//! - PUT /folders { id, name }
//!   Renames a folder in place; the response carries its new id.
//!
//! - DELETE /folders { nodeId }
//!   Removes an empty folder; non-empty folders are refused.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::models::FolderNode;
use crate::storage::SharedStore;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/folders",
            get(list_folders)
                .post(create_folder)
                .put(rename_folder)
                .delete(remove_folder),
        )
        .with_state(store)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    node_id: Option<String>,
}

async fn list_folders(
    State(store): State<SharedStore>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FolderNode>>> {
    let nodes = store.list_children(params.node_id.as_deref().unwrap_or(""))?;
    Ok(Json(nodes))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequest {
    node: NewFolder,
    parent_node_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewFolder {
    name: String,
}

async fn create_folder(
    State(store): State<SharedStore>,
    Json(request): Json<CreateRequest>,
) -> Result<Json<FolderNode>> {
    let parent = request.parent_node_id.as_deref().unwrap_or("");
    let node = store.create_folder(parent, &request.node.name)?;
    Ok(Json(node))
}

#[derive(Debug, Deserialize)]
struct RenameRequest {
    id: String,
    name: String,
}

async fn rename_folder(
    State(store): State<SharedStore>,
    Json(request): Json<RenameRequest>,
) -> Result<Json<FolderNode>> {
    let node = store.rename_folder(&request.id, &request.name)?;
    Ok(Json(node))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveRequest {
    node_id: String,
}

async fn remove_folder(
    State(store): State<SharedStore>,
    Json(request): Json<RemoveRequest>,
) -> Result<Json<Value>> {
    let success = store.remove_folder(&request.node_id)?;
    Ok(Json(json!({ "success": success })))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::storage::FileStore;

    fn app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("photos")).expect("mkdir");
        let store = Arc::new(FileStore::open(dir.path()).expect("store"));
        let router = routes(store);
        (dir, router)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn get_lists_folder_nodes() {
        let (_dir, app) = app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/folders")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["id"], "/photos");
        assert_eq!(body[0]["name"], "photos");
        assert_eq!(body[0]["children"], json!([]));
    }

    #[tokio::test]
    async fn post_duplicate_folder_is_403_with_msg() {
        let (_dir, app) = app();

        let request = || {
            Request::builder()
                .method("POST")
                .uri("/folders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "node": { "name": "photos" }, "parentNodeId": null }).to_string(),
                ))
                .expect("request")
        };

        let response = app.oneshot(request()).await.expect("response");

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = json_body(response).await;
        assert!(body["msg"].as_str().expect("msg").contains("/photos"));
    }

    #[tokio::test]
    async fn delete_empty_folder_reports_success() {
        let (dir, app) = app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/folders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "nodeId": "/photos" }).to_string()))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], json!(true));
        assert!(!dir.path().join("photos").exists());
    }

    #[tokio::test]
    async fn rename_returns_the_new_id() {
        let (_dir, app) = app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/folders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "id": "/photos", "name": "albums" }).to_string(),
                    ))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], "/albums");
        assert_eq!(body["name"], "albums");
    }
}
