//! Identifier-to-path resolution confined under the managed root.
//!
//! Identifiers are root-relative path strings (`/photos/2021`). `resolve`
//! validates them once at this boundary: only plain path segments are
//! accepted, so `..` and absolute components can never escape the root.
//! The type probes (`is_directory`, `is_file`) treat non-existence as a
//! normal outcome and return `false` instead of erroring.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, Result};

pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Canonicalizes `root` and fails unless it is an existing directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = fs::canonicalize(root.as_ref())?;
        if !root.is_dir() {
            return Err(AppError::NotFound(root.to_string_lossy().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps an identifier to an absolute path strictly inside the root.
    pub fn resolve(&self, id: &str) -> Result<PathBuf> {
        let mut resolved = self.root.clone();
        for component in Path::new(id.trim_start_matches('/')).components() {
            match component {
                Component::Normal(segment) => resolved.push(segment),
                Component::CurDir => {}
                _ => return Err(AppError::InvalidPath(id.to_string())),
            }
        }
        Ok(resolved)
    }

    pub fn is_directory(&self, id: &str) -> bool {
        self.resolve(id)
            .map(|path| path.is_dir())
            .unwrap_or(false)
    }

    pub fn is_file(&self, id: &str) -> bool {
        self.resolve(id)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> (tempfile::TempDir, PathResolver) {
        let dir = tempfile::tempdir().expect("tempdir");
        let resolver = PathResolver::new(dir.path()).expect("resolver");
        (dir, resolver)
    }

    #[test]
    fn resolve_stays_under_root() {
        let (_dir, resolver) = resolver();
        let path = resolver.resolve("/photos/2021").expect("resolve");
        assert!(path.starts_with(resolver.root()));
        assert!(path.ends_with("photos/2021"));
    }

    #[test]
    fn resolve_rejects_parent_traversal() {
        let (_dir, resolver) = resolver();
        assert!(matches!(
            resolver.resolve("/photos/../../etc/passwd"),
            Err(AppError::InvalidPath(_))
        ));
    }

    #[test]
    fn resolve_rejects_bare_parent_id() {
        let (_dir, resolver) = resolver();
        assert!(matches!(
            resolver.resolve("/.."),
            Err(AppError::InvalidPath(_))
        ));
    }

    #[test]
    fn probes_return_false_for_missing_paths() {
        let (_dir, resolver) = resolver();
        assert!(!resolver.is_directory("/nope"));
        assert!(!resolver.is_file("/nope"));
    }

    #[test]
    fn probes_distinguish_files_from_directories() {
        let (dir, resolver) = resolver();
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        std::fs::write(dir.path().join("note.txt"), b"hi").expect("write");

        assert!(resolver.is_directory("/sub"));
        assert!(!resolver.is_file("/sub"));
        assert!(resolver.is_file("/note.txt"));
        assert!(!resolver.is_directory("/note.txt"));
    }

    #[test]
    fn empty_id_resolves_to_root() {
        let (_dir, resolver) = resolver();
        assert_eq!(resolver.resolve("").expect("resolve"), resolver.root());
        assert!(resolver.is_directory(""));
    }
}
