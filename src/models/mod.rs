//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption.
//! - `folder`: FolderNode for tree listings and folder CRUD responses
//! - `file`: FileDescriptor for file listings, CropBounds for PUT /files

pub mod file;
pub mod folder;

pub use file::*;
pub use folder::*;
