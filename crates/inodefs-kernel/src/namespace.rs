//! The namespace: one root directory plus path-based operations.

use tracing::{debug, trace};

use crate::directory::{Directory, Entry};
use crate::error::{NsError, NsResult};
use crate::inode::Inode;
use crate::ops::NamespaceOps;
use crate::path::{self, ROOT};
use crate::types::{DirEntry, InodeAttr, Permissions};

/// Owns the root directory and everything reachable from it.
///
/// Not synchronized; wrap it in [`SharedNamespace`](crate::SharedNamespace)
/// to use it from several threads.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    root: Directory,
}

impl Namespace {
    /// Create a namespace with an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a namespace with pre-existing directories.
    ///
    /// Each path is walked from the root and any missing directory along
    /// it is created. Fails if a path runs into a file.
    pub fn with_directories<I, S>(dirs: I) -> NsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ns = Self::new();
        for dir in dirs {
            ns.seed_directory(dir.as_ref())?;
        }
        Ok(ns)
    }

    fn seed_directory(&mut self, dir_path: &str) -> NsResult<()> {
        let mut current = &mut self.root;
        for segment in path::segments(dir_path).filter(|s| !s.is_empty()) {
            current = current
                .ensure_subdirectory(segment)
                .map_err(|_| NsError::not_a_directory(dir_path))?;
        }
        debug!(path = dir_path, "seeded directory");
        Ok(())
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Resolve a directory path to the directory it names.
    ///
    /// `"/"` and `""` are the root. Any other path has its first segment
    /// treated as the root anchor and the rest walked one directory at a
    /// time.
    pub fn resolve(&self, dir_path: &str) -> NsResult<&Directory> {
        if dir_path == ROOT {
            return Ok(&self.root);
        }
        let mut current = &self.root;
        for segment in path::segments(dir_path) {
            trace!(path = dir_path, segment, "resolve");
            current = match current.get(segment) {
                Some(Entry::Directory(dir)) => dir,
                Some(Entry::File(_)) => return Err(NsError::not_a_directory(dir_path)),
                None => return Err(NsError::not_found(dir_path)),
            };
        }
        Ok(current)
    }

    /// Mutable variant of [`Namespace::resolve`].
    pub fn resolve_mut(&mut self, dir_path: &str) -> NsResult<&mut Directory> {
        if dir_path == ROOT {
            return Ok(&mut self.root);
        }
        let mut current = &mut self.root;
        for segment in path::segments(dir_path) {
            trace!(path = dir_path, segment, "resolve");
            current = match current.get_mut(segment) {
                Some(Entry::Directory(dir)) => dir,
                Some(Entry::File(_)) => return Err(NsError::not_a_directory(dir_path)),
                None => return Err(NsError::not_found(dir_path)),
            };
        }
        Ok(current)
    }

    /// Containing directory and leaf name of `path`.
    fn parent<'p>(&self, path: &'p str) -> NsResult<(&Directory, &'p str)> {
        let (parent, leaf) = path::split(path);
        if leaf.is_empty() {
            return Err(NsError::not_found(path));
        }
        Ok((self.resolve(parent)?, leaf))
    }

    fn parent_mut<'p>(&mut self, path: &'p str) -> NsResult<(&mut Directory, &'p str)> {
        let (parent, leaf) = path::split(path);
        if leaf.is_empty() {
            return Err(NsError::not_found(path));
        }
        Ok((self.resolve_mut(parent)?, leaf))
    }

    fn file(&self, path: &str) -> NsResult<&Inode> {
        let (dir, leaf) = self.parent(path)?;
        dir.file(leaf, path)
    }

    fn file_mut(&mut self, path: &str) -> NsResult<&mut Inode> {
        let (dir, leaf) = self.parent_mut(path)?;
        dir.file_mut(leaf, path)
    }

    /// Insert a file, refusing to replace a subdirectory.
    fn place(dir: &mut Directory, path: &str, inode: Inode) -> NsResult<InodeAttr> {
        if let Some(Entry::Directory(_)) = dir.get(inode.name()) {
            return Err(NsError::is_a_directory(path));
        }
        let attr = inode.attr();
        let replaced = dir.insert_file(inode).is_some();
        debug!(path, replaced, size = attr.size, "placed file");
        Ok(attr)
    }
}

impl NamespaceOps for Namespace {
    fn read(&self, path: &str) -> NsResult<Vec<u8>> {
        Ok(self.file(path)?.data().to_vec())
    }

    fn show_permissions(&self, path: &str) -> NsResult<Permissions> {
        Ok(self.file(path)?.permissions().clone())
    }

    fn stat(&self, path: &str) -> NsResult<InodeAttr> {
        Ok(self.file(path)?.attr())
    }

    fn list(&self, dir_path: &str) -> NsResult<Vec<DirEntry>> {
        Ok(self.resolve(dir_path)?.list())
    }

    fn create(
        &mut self,
        path: &str,
        data: &[u8],
        permissions: Permissions,
    ) -> NsResult<InodeAttr> {
        let (dir, leaf) = self.parent_mut(path)?;
        Self::place(dir, path, Inode::new(leaf, data, permissions))
    }

    fn write(&mut self, path: &str, data: &[u8]) -> NsResult<InodeAttr> {
        let inode = self.file_mut(path)?;
        inode.write(data);
        debug!(path, size = data.len(), "wrote file");
        Ok(inode.attr())
    }

    fn delete(&mut self, path: &str) -> NsResult<()> {
        let (dir, leaf) = self.parent_mut(path)?;
        dir.file(leaf, path)?;
        dir.remove(leaf);
        debug!(path, "deleted file");
        Ok(())
    }

    fn copy(&mut self, src: &str, dest: &str) -> NsResult<InodeAttr> {
        let source = self.file(src)?;
        let (data, permissions) = (source.data().to_vec(), source.permissions().clone());

        let (dir, leaf) = self.parent_mut(dest)?;
        let attr = Self::place(dir, dest, Inode::new(leaf, data, permissions))?;
        debug!(src, dest, "copied file");
        Ok(attr)
    }

    fn rename(&mut self, path: &str, new_name: &str) -> NsResult<InodeAttr> {
        if !path::is_valid_name(new_name) {
            return Err(NsError::invalid_name(new_name));
        }
        let target = path::join(path::split(path).0, new_name);
        let (dir, leaf) = self.parent_mut(path)?;

        let current = dir.file(leaf, path)?.attr();
        if leaf == new_name {
            return Ok(current);
        }
        if let Some(Entry::Directory(_)) = dir.get(new_name) {
            return Err(NsError::is_a_directory(target));
        }

        let Some(Entry::File(mut inode)) = dir.remove(leaf) else {
            return Err(NsError::not_found(path));
        };
        inode.set_name(new_name);
        let attr = inode.attr();
        dir.insert_file(inode);
        debug!(from = path, to = %target, "renamed file");
        Ok(attr)
    }

    fn change_permissions(
        &mut self,
        path: &str,
        permissions: Permissions,
    ) -> NsResult<InodeAttr> {
        let inode = self.file_mut(path)?;
        inode.set_permissions(permissions);
        debug!(path, permissions = %inode.permissions(), "changed permissions");
        Ok(inode.attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Namespace {
        Namespace::with_directories(["/home/user", "/tmp"]).unwrap()
    }

    #[test]
    fn test_resolve_root() {
        let mut ns = Namespace::new();
        assert!(ns.resolve("/").unwrap().is_empty());
        assert!(ns.resolve("").unwrap().is_empty());

        ns.create_empty("/a.txt").unwrap();
        assert_eq!(ns.resolve("/").unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_nested() {
        let ns = seeded();
        assert!(ns.resolve("/home").unwrap().contains("user"));
        assert!(ns.resolve("/home/user").unwrap().is_empty());
        assert_eq!(
            ns.resolve("/home/nobody").unwrap_err(),
            NsError::not_found("/home/nobody")
        );
    }

    #[test]
    fn test_resolve_through_file() {
        let mut ns = seeded();
        ns.create_empty("/tmp/f").unwrap();
        assert_eq!(
            ns.resolve("/tmp/f").unwrap_err(),
            NsError::not_a_directory("/tmp/f")
        );
        assert_eq!(
            ns.create_empty("/tmp/f/g").unwrap_err(),
            NsError::not_a_directory("/tmp/f")
        );
    }

    #[test]
    fn test_bare_name_lands_in_root() {
        let mut ns = Namespace::new();
        ns.create("a.txt", b"bare", Permissions::default()).unwrap();
        assert_eq!(ns.read("/a.txt").unwrap(), b"bare");
    }

    #[test]
    fn test_empty_leaf() {
        let mut ns = seeded();
        assert!(ns.create_empty("/tmp/").unwrap_err().is_not_found());
        assert!(ns.create_empty("").unwrap_err().is_not_found());
        assert!(ns.read("/").unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_in_subdirectory() {
        let mut ns = seeded();
        ns.create("/home/user/notes", b"hi", Permissions::from("r"))
            .unwrap();
        assert_eq!(ns.read("/home/user/notes").unwrap(), b"hi");
        assert!(!ns.exists("/notes"));
        assert_eq!(ns.list("/home/user").unwrap(), vec![DirEntry::file("notes")]);
    }

    #[test]
    fn test_create_missing_parent() {
        let mut ns = Namespace::new();
        assert_eq!(
            ns.create_empty("/nope/a.txt").unwrap_err(),
            NsError::not_found("/nope")
        );
        assert!(ns.root().is_empty());
    }

    #[test]
    fn test_file_ops_refuse_directories() {
        let mut ns = seeded();
        ns.create_empty("/a").unwrap();

        assert_eq!(ns.create_empty("/tmp").unwrap_err(), NsError::is_a_directory("/tmp"));
        assert_eq!(ns.read("/tmp").unwrap_err(), NsError::is_a_directory("/tmp"));
        assert_eq!(ns.delete("/home").unwrap_err(), NsError::is_a_directory("/home"));
        assert_eq!(ns.copy("/a", "/tmp").unwrap_err(), NsError::is_a_directory("/tmp"));
        assert_eq!(ns.rename("/tmp", "t2").unwrap_err(), NsError::is_a_directory("/tmp"));
        assert_eq!(ns.rename("/a", "home").unwrap_err(), NsError::is_a_directory("/home"));

        assert!(ns.resolve("/home/user").is_ok());
        assert!(ns.resolve("/tmp").is_ok());
    }

    #[test]
    fn test_rename_validates_name() {
        let mut ns = Namespace::new();
        ns.create_empty("/a").unwrap();
        assert_eq!(ns.rename("/a", "").unwrap_err(), NsError::invalid_name(""));
        assert_eq!(ns.rename("/a", "x/y").unwrap_err(), NsError::invalid_name("x/y"));
        assert!(ns.exists("/a"));
    }

    #[test]
    fn test_rename_same_name() {
        let mut ns = Namespace::new();
        ns.create("/a", b"keep", Permissions::default()).unwrap();
        let attr = ns.rename("/a", "a").unwrap();
        assert_eq!(attr.name, "a");
        assert_eq!(ns.read("/a").unwrap(), b"keep");
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut ns = seeded();
        let created = ns.create("/tmp/old", b"x", Permissions::from("rwx")).unwrap();
        let renamed = ns.rename("/tmp/old", "new").unwrap();

        assert_eq!(renamed.name, "new");
        assert_eq!(renamed.created_at, created.created_at);
        assert_eq!(renamed.permissions, created.permissions);
        assert_eq!(ns.list("/tmp").unwrap(), vec![DirEntry::file("new")]);
    }

    #[test]
    fn test_with_directories_conflict() {
        let ns = Namespace::with_directories(["/a", "/a/b", "/a/b/"]).unwrap();
        assert_eq!(ns.root().len(), 1);
        assert!(ns.resolve("/a/b").unwrap().is_empty());

        let mut ns = Namespace::new();
        ns.create_empty("/f").unwrap();
        assert_eq!(ns.seed_directory("/f/g").unwrap_err(), NsError::not_a_directory("/f/g"));
    }
}
