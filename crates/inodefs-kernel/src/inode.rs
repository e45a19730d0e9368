//! File inode: named payload plus metadata.

use std::time::{Duration, SystemTime};

use crate::types::{InodeAttr, Permissions};

/// A single file's data and metadata.
///
/// Owned by exactly one [`Directory`](crate::Directory) entry at a time.
#[derive(Debug, Clone)]
pub struct Inode {
    name: String,
    data: Vec<u8>,
    permissions: Permissions,
    created_at: SystemTime,
    updated_at: SystemTime,
}

impl Inode {
    /// Create a new inode stamped with the current time.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>, permissions: Permissions) -> Self {
        let now = SystemTime::now();
        Self {
            name: name.into(),
            data: data.into(),
            permissions,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    /// Replace the payload and advance `updated_at`.
    pub fn write(&mut self, data: impl Into<Vec<u8>>) {
        self.data = data.into();
        self.touch();
    }

    /// Overwrite the permission string. Timestamps are left alone.
    pub fn set_permissions(&mut self, permissions: Permissions) {
        self.permissions = permissions;
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Metadata snapshot.
    pub fn attr(&self) -> InodeAttr {
        InodeAttr {
            name: self.name.clone(),
            size: self.data.len() as u64,
            permissions: self.permissions.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // A coarse clock can return the same reading twice; updated_at must
    // still move forward on every write.
    fn touch(&mut self) {
        let now = SystemTime::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::from_nanos(1)
        };
    }
}
