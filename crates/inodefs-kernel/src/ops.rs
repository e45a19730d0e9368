//! Namespace operations trait.
//!
//! This is the whole surface a driver sees: path strings in, snapshots or
//! a typed failure out. Implementors never print and never panic on
//! missing paths.

use crate::error::NsResult;
use crate::types::{DirEntry, InodeAttr, Permissions};

/// Core namespace operations.
///
/// Every call is a complete transaction against the tree; there are no
/// handles to open or close. Paths are `/`-separated and root-anchored.
pub trait NamespaceOps {
    // ========================================================================
    // Reading
    // ========================================================================

    /// Read a file's payload.
    fn read(&self, path: &str) -> NsResult<Vec<u8>>;

    /// Current permission string of a file.
    fn show_permissions(&self, path: &str) -> NsResult<Permissions>;

    /// File metadata snapshot.
    fn stat(&self, path: &str) -> NsResult<InodeAttr>;

    /// Entries of a directory, sorted by name.
    fn list(&self, dir_path: &str) -> NsResult<Vec<DirEntry>>;

    // ========================================================================
    // Writing
    // ========================================================================

    /// Create a file, replacing any file already stored under the same name.
    ///
    /// Only the parent directory has to exist.
    fn create(&mut self, path: &str, data: &[u8], permissions: Permissions)
    -> NsResult<InodeAttr>;

    /// Replace an existing file's payload.
    fn write(&mut self, path: &str, data: &[u8]) -> NsResult<InodeAttr>;

    /// Remove a file.
    fn delete(&mut self, path: &str) -> NsResult<()>;

    /// Copy payload and permissions into a fresh inode at `dest`.
    ///
    /// `dest` is replaced if it already names a file.
    fn copy(&mut self, src: &str, dest: &str) -> NsResult<InodeAttr>;

    /// Rename a file within its directory.
    ///
    /// `new_name` is a single entry name, not a path.
    fn rename(&mut self, path: &str, new_name: &str) -> NsResult<InodeAttr>;

    /// Overwrite a file's permission string.
    fn change_permissions(&mut self, path: &str, permissions: Permissions)
    -> NsResult<InodeAttr>;

    // ========================================================================
    // Convenience methods (default implementations)
    // ========================================================================

    /// Check if a file exists.
    fn exists(&self, path: &str) -> bool {
        self.stat(path).is_ok()
    }

    /// Create an empty file with default permissions.
    fn create_empty(&mut self, path: &str) -> NsResult<InodeAttr> {
        self.create(path, b"", Permissions::default())
    }
}
