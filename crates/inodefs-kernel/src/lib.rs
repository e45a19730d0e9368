//! # inodefs-kernel
//!
//! In-memory hierarchical file namespace.
//!
//! - [`Inode`] - a file's payload plus permission string and timestamps
//! - [`Directory`] - name → [`Entry`] map, where an entry is a file or a
//!   nested directory
//! - [`Namespace`] - owns the root and implements [`NamespaceOps`]
//! - [`SharedNamespace`] - the same operations behind one lock
//!
//! ## Design Decisions
//!
//! - **Split then resolve**: every operation splits its path at the last
//!   `/`, resolves the parent by walking down from the root, then does one
//!   lookup or mutation on that directory's map.
//! - **Failures are values**: missing parents and leaves come back as
//!   [`NsError`]; the tree is never changed by a failed call.
//! - **Overwrite on create/copy**: a file of the same name is replaced
//!   rather than reported as existing.
//! - **No mkdir**: nested directories exist only when seeded at
//!   construction via [`Namespace::with_directories`]. File operations
//!   refuse to touch them.
//! - **Permissions are metadata**: stored and reported, never enforced.
//!
//! ```
//! use inodefs_kernel::{Namespace, NamespaceOps, Permissions};
//!
//! let mut ns = Namespace::new();
//! ns.create("/a.txt", b"hello", Permissions::default()).unwrap();
//! ns.change_permissions("/a.txt", Permissions::from("r")).unwrap();
//! ns.write("/a.txt", b"x").unwrap();
//! assert_eq!(ns.read("/a.txt").unwrap(), b"x");
//! ```

mod directory;
mod error;
mod inode;
mod namespace;
mod ops;
pub mod path;
mod shared;
mod types;

pub use directory::{Directory, Entry};
pub use error::{NsError, NsResult};
pub use inode::Inode;
pub use namespace::Namespace;
pub use ops::NamespaceOps;
pub use shared::SharedNamespace;
pub use types::{DEFAULT_PERMISSIONS, DirEntry, EntryKind, InodeAttr, Permissions};
