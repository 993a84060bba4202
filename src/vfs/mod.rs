use std::collections::BTreeSet;
use std::io;

/// Read-only view of a virtual filesystem rooted at `"."`.
///
/// Paths are slash-separated regardless of host platform and are validated
/// with [`valid_path`] before they reach an implementation, so `exists`
/// never sees `..`, empty segments, or a leading slash.
pub trait Vfs {
    /// Report whether an entry (file or directory) exists at `path`.
    /// An `Err` means existence could not be determined; callers choose
    /// whether that counts as absent.
    fn exists(&self, path: &str) -> io::Result<bool>;
}

/// Check that `path` is a well-formed virtual path: `"."` for the namespace
/// root, or slash-separated segments with no empty, `.`, or `..` segment and
/// no leading or trailing slash.
pub fn valid_path(path: &str) -> bool {
    if path == "." {
        return true;
    }
    !path.is_empty() && path.split('/').all(|seg| !seg.is_empty() && seg != "." && seg != "..")
}

/// Lexically normalize a slash path: drop `.` segments and repeated slashes,
/// resolve `..` against preceding segments. Leading `..` survives on
/// unrooted paths and vanishes at an absolute root. Empty input cleans to
/// `"."`. No filesystem is consulted.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(seg),
        }
    }
    if rooted {
        format!("/{}", parts.join("/"))
    } else if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Directory portion of a cleaned path: `"a/b"` → `"a"`, a bare segment →
/// `"."`. Root forms are their own parent.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Join two path fragments and clean the result.
pub fn join(dir: &str, name: &str) -> String {
    clean(&format!("{dir}/{name}"))
}

/// In-memory [`Vfs`] backed by a set of file paths.
///
/// Directories exist implicitly whenever a stored file lies beneath them,
/// the way an archive listing implies its tree. The root `"."` always
/// exists.
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    files: BTreeSet<String>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an empty file at `path`.
    pub fn touch(&mut self, path: &str) {
        self.files.insert(path.to_string());
    }
}

impl<'a> FromIterator<&'a str> for MemFs {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl Vfs for MemFs {
    fn exists(&self, path: &str) -> io::Result<bool> {
        if !valid_path(path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid path: {path:?}"),
            ));
        }
        if path == "." || self.files.contains(path) {
            return Ok(true);
        }
        let prefix = format!("{path}/");
        Ok(self.files.iter().any(|file| file.starts_with(&prefix)))
    }
}
