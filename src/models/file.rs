//! File DTOs.
//!
//! - `FileDescriptor`: Snapshot metadata for a single file (FileList view),
//!   rebuilt on every listing/describe call, never cached server-side
//! - `CropBounds`: Crop rectangle accepted by PUT /files
//!
//! `width`/`height` are non-zero only for `image/*` mimes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub url: String,
    pub mime: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CropBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
