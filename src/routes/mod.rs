//! API route handlers - maps HTTP endpoints to store operations.
//!
//! Each submodule defines routes for a feature area:
//! - `folders`: Folder tree CRUD (GET/POST/PUT/DELETE /folders)
//! - `files`: File listing, multipart upload, crop, delete
//!   (GET/POST/PUT/DELETE /files)

pub mod files;
pub mod folders;

use axum::Router;

use crate::storage::SharedStore;

pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .merge(folders::routes(store.clone()))
        .merge(files::routes(store))
}
