//! Slash-delimited path handling.
//!
//! Paths are plain `&str` with `/` as separator. Nothing is normalized:
//! `.` and `..` are ordinary names.

/// Root marker.
pub const ROOT: &str = "/";

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Split a path into `(parent, leaf)` at the final separator.
///
/// The parent keeps no trailing separators unless it consists only of
/// separators, in which case it is kept as is (the root marker). A path
/// without a separator has an empty parent, which resolves to the root.
///
/// ```
/// use inodefs_kernel::path::split;
///
/// assert_eq!(split("/a.txt"), ("/", "a.txt"));
/// assert_eq!(split("/home/a.txt"), ("/home", "a.txt"));
/// assert_eq!(split("a.txt"), ("", "a.txt"));
/// ```
pub fn split(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATOR) {
        Some(idx) => {
            let head = &path[..=idx];
            let leaf = &path[idx + 1..];
            let trimmed = head.trim_end_matches(SEPARATOR);
            let parent = if trimmed.is_empty() { head } else { trimmed };
            (parent, leaf)
        }
        None => ("", path),
    }
}

/// Segments to walk from the root to reach `dir_path`.
///
/// The first segment is the root anchor and is always skipped, so
/// `"/a/b"` walks `["a", "b"]` and an empty path walks nothing.
pub fn segments(dir_path: &str) -> impl Iterator<Item = &str> {
    dir_path.split(SEPARATOR).skip(1)
}

/// Join a parent path and an entry name.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() || parent.ends_with(SEPARATOR) {
        format!("{parent}{name}")
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

/// An entry name must be non-empty and free of separators.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("/a.txt"), ("/", "a.txt"));
        assert_eq!(split("/home/user/a.txt"), ("/home/user", "a.txt"));
        assert_eq!(split("a.txt"), ("", "a.txt"));
        assert_eq!(split(""), ("", ""));
        assert_eq!(split("/"), ("/", ""));
        assert_eq!(split("/home/"), ("/home", ""));
        assert_eq!(split("/home//a"), ("/home", "a"));
        assert_eq!(split("//a"), ("//", "a"));
    }

    #[test]
    fn test_segments() {
        let walk: Vec<_> = segments("/home/user").collect();
        assert_eq!(walk, ["home", "user"]);

        assert_eq!(segments("").count(), 0);
        // Unanchored: the first component stands in for the root
        let walk: Vec<_> = segments("home/user").collect();
        assert_eq!(walk, ["user"]);
        // Repeated separators yield an empty segment
        let walk: Vec<_> = segments("//").collect();
        assert_eq!(walk, ["", ""]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", "a"), "/a");
        assert_eq!(join("/home", "a"), "/home/a");
        assert_eq!(join("", "a"), "a");
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("a.txt"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a/b"));
    }
}
