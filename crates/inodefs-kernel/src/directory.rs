//! Directory: a name → entry map.

use std::collections::BTreeMap;

use crate::error::{NsError, NsResult};
use crate::inode::Inode;
use crate::types::{DirEntry, EntryKind};

/// Entry in a directory.
#[derive(Debug, Clone)]
pub enum Entry {
    File(Inode),
    Directory(Directory),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Directory(_) => EntryKind::Directory,
        }
    }

    pub fn as_file(&self) -> Option<&Inode> {
        match self {
            Entry::File(inode) => Some(inode),
            Entry::Directory(_) => None,
        }
    }

    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }
}

/// Named-entry container.
///
/// Names are unique within one directory; inserting under an existing name
/// replaces the previous entry.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: BTreeMap<String, Entry>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the entry previously stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(name.into(), entry)
    }

    /// Insert or replace a file, keyed by the inode's own name.
    pub fn insert_file(&mut self, inode: Inode) -> Option<Entry> {
        self.entries.insert(inode.name().to_string(), Entry::File(inode))
    }

    /// Remove by name. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a file entry.
    ///
    /// `path` is only used to label the error.
    pub fn file(&self, name: &str, path: &str) -> NsResult<&Inode> {
        match self.entries.get(name) {
            Some(Entry::File(inode)) => Ok(inode),
            Some(Entry::Directory(_)) => Err(NsError::is_a_directory(path)),
            None => Err(NsError::not_found(path)),
        }
    }

    /// Mutable variant of [`Directory::file`].
    pub fn file_mut(&mut self, name: &str, path: &str) -> NsResult<&mut Inode> {
        match self.entries.get_mut(name) {
            Some(Entry::File(inode)) => Ok(inode),
            Some(Entry::Directory(_)) => Err(NsError::is_a_directory(path)),
            None => Err(NsError::not_found(path)),
        }
    }

    /// Child directory used for traversal.
    pub fn subdirectory(&self, name: &str) -> Option<&Directory> {
        self.entries.get(name).and_then(Entry::as_dir)
    }

    /// Get or create a child directory.
    ///
    /// Fails if a file already occupies `name`.
    pub fn ensure_subdirectory(&mut self, name: &str) -> NsResult<&mut Directory> {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| Entry::Directory(Directory::new()));
        match entry {
            Entry::Directory(dir) => Ok(dir),
            Entry::File(_) => Err(NsError::not_a_directory(name)),
        }
    }

    /// Listing sorted by name.
    pub fn list(&self) -> Vec<DirEntry> {
        self.entries
            .iter()
            .map(|(name, entry)| DirEntry::new(name.clone(), entry.kind()))
            .collect()
    }
}
