//! Lock-guarded namespace handle.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::NsResult;
use crate::namespace::Namespace;
use crate::ops::NamespaceOps;
use crate::types::{DirEntry, InodeAttr, Permissions};

/// Cloneable, thread-safe handle to one [`Namespace`].
///
/// A single lock guards the whole tree: lookups share it, mutations take
/// it exclusively. Each operation holds the lock for its full
/// resolve-then-act sequence.
#[derive(Debug, Clone, Default)]
pub struct SharedNamespace {
    inner: Arc<RwLock<Namespace>>,
}

impl SharedNamespace {
    pub fn new(ns: Namespace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ns)),
        }
    }

    /// Run `f` against the namespace under the read lock.
    pub fn with<R>(&self, f: impl FnOnce(&Namespace) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Namespace> for SharedNamespace {
    fn from(ns: Namespace) -> Self {
        Self::new(ns)
    }
}

impl NamespaceOps for SharedNamespace {
    fn read(&self, path: &str) -> NsResult<Vec<u8>> {
        self.inner.read().read(path)
    }

    fn show_permissions(&self, path: &str) -> NsResult<Permissions> {
        self.inner.read().show_permissions(path)
    }

    fn stat(&self, path: &str) -> NsResult<InodeAttr> {
        self.inner.read().stat(path)
    }

    fn list(&self, dir_path: &str) -> NsResult<Vec<DirEntry>> {
        self.inner.read().list(dir_path)
    }

    fn create(
        &mut self,
        path: &str,
        data: &[u8],
        permissions: Permissions,
    ) -> NsResult<InodeAttr> {
        self.inner.write().create(path, data, permissions)
    }

    fn write(&mut self, path: &str, data: &[u8]) -> NsResult<InodeAttr> {
        self.inner.write().write(path, data)
    }

    fn delete(&mut self, path: &str) -> NsResult<()> {
        self.inner.write().delete(path)
    }

    fn copy(&mut self, src: &str, dest: &str) -> NsResult<InodeAttr> {
        self.inner.write().copy(src, dest)
    }

    fn rename(&mut self, path: &str, new_name: &str) -> NsResult<InodeAttr> {
        self.inner.write().rename(path, new_name)
    }

    fn change_permissions(
        &mut self,
        path: &str,
        permissions: Permissions,
    ) -> NsResult<InodeAttr> {
        self.inner.write().change_permissions(path, permissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_tree() {
        let mut a = SharedNamespace::default();
        let b = a.clone();

        a.create("/x", b"shared", Permissions::default()).unwrap();
        assert_eq!(b.read("/x").unwrap(), b"shared");
        assert_eq!(b.with(|ns| ns.root().len()), 1);
    }

    #[test]
    fn test_concurrent_creates() {
        let ns = SharedNamespace::new(Namespace::with_directories(["/work"]).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let mut ns = ns.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        let path = format!("/work/t{i}-{j}");
                        ns.create(&path, path.as_bytes(), Permissions::default())
                            .unwrap();
                        ns.write(&path, b"done").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let listing = ns.list("/work").unwrap();
        assert_eq!(listing.len(), 200);
        assert_eq!(ns.read("/work/t7-24").unwrap(), b"done");
    }
}
