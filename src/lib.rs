//! filedeck - a self-contained web file manager.
//!
//! The server half maps folder/file identifiers (root-relative path
//! strings) onto one managed directory and exposes CRUD plus multipart
//! upload over a small HTTP API. The client half is a set of pure view
//! stores that keep a lazy folder tree, a file list, search/type
//! filtering, and multi-selection mutually consistent.

pub mod client;
pub mod error;
pub mod models;
pub mod routes;
pub mod storage;
