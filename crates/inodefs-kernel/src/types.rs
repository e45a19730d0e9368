//! Value types handed across the operation boundary.
//!
//! These are snapshots: nothing here borrows from the tree, so callers can
//! hold them while the namespace keeps changing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// Permission string used when a caller does not supply one.
pub const DEFAULT_PERMISSIONS: &str = "rw";

/// Symbolic permission string (e.g. `"r"`, `"rw"`, `"rwx"`).
///
/// Stored as typed. Nothing in the namespace checks it before acting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(String);

impl Permissions {
    /// Wrap a symbolic permission string.
    pub fn new(perms: impl Into<String>) -> Self {
        Self(perms.into())
    }

    /// The string as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric rendering for display: `r`=4, `w`=2, `x`=1, summed.
    pub fn octal(&self) -> u8 {
        let mut value = 0;
        if self.0.contains('r') {
            value += 4;
        }
        if self.0.contains('w') {
            value += 2;
        }
        if self.0.contains('x') {
            value += 1;
        }
        value
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::new(DEFAULT_PERMISSIONS)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permissions {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Permissions {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Inode holding data.
    File,
    /// Nested directory.
    Directory,
}

impl EntryKind {
    /// Returns true if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Inode metadata snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InodeAttr {
    /// Entry name (not full path).
    pub name: String,
    /// Payload size in bytes.
    pub size: u64,
    /// Symbolic permissions.
    pub permissions: Permissions,
    /// Set once at construction.
    pub created_at: SystemTime,
    /// Refreshed on every successful write.
    pub updated_at: SystemTime,
}

/// Directory listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name (not full path).
    pub name: String,
    /// Entry type.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Create a new directory entry.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::File)
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Directory)
    }
}
