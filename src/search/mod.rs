use crate::error::FindError;
use crate::vfs::{self, Vfs};
use std::path::{Component, Path, PathBuf};

/// Search `dir` and all of its ancestors for an entry named `name`.
///
/// Returns the closest directory, starting with `dir` itself, whose direct
/// contents include `name`. The marker may be a file or a directory; no type
/// filtering is applied. A stat failure at one level (a permission error,
/// say) counts as "nothing here" and the walk keeps climbing, so an
/// inaccessible intermediate entry never aborts the search.
pub fn find(dir: &Path, name: &str) -> Result<PathBuf, FindError> {
    // Deliberately a near-twin of find_in: host paths and virtual slash
    // paths disagree on normalization and root detection, so each variant
    // owns its walk.
    if dir.as_os_str().is_empty() {
        return Err(FindError::EmptyDir);
    }
    if name.is_empty() {
        return Err(FindError::EmptyName);
    }
    let mut dir = clean(dir);
    loop {
        if dir.join(name).exists() {
            return Ok(dir);
        }
        let parent = parent_dir(&dir);
        if parent == dir {
            return Err(FindError::NotFound);
        }
        dir = parent;
    }
}

/// Search `dir` and all of its ancestors inside a virtual filesystem.
///
/// Same contract as [`find`], over slash-separated paths rooted at `"."`.
/// A candidate that breaks the namespace rules aborts the walk with
/// [`FindError::InvalidPath`]; a failing or negative existence check just
/// moves the walk one level up.
pub fn find_in<F: Vfs>(fsys: &F, dir: &str, name: &str) -> Result<String, FindError> {
    if dir.is_empty() {
        return Err(FindError::EmptyDir);
    }
    if name.is_empty() {
        return Err(FindError::EmptyName);
    }
    let mut dir = vfs::clean(dir);
    loop {
        let candidate = vfs::join(&dir, name);
        if !vfs::valid_path(&candidate) {
            return Err(FindError::InvalidPath(candidate));
        }
        if fsys.exists(&candidate).unwrap_or(false) {
            return Ok(dir);
        }
        if dir == "." || dir == "/" {
            return Err(FindError::NotFound);
        }
        dir = vfs::parent(&dir).to_string();
    }
}

/// Parent of a cleaned native path. The parent of a bare segment is `"."`;
/// a root is its own parent.
fn parent_dir(dir: &Path) -> PathBuf {
    match dir.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => dir.to_path_buf(),
    }
}

/// Lexically normalize a native path: drop `.` segments, resolve `..`
/// against preceding segments, keep leading `..` on relative paths. Empty
/// output collapses to `"."`. No filesystem access.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut poppable = 0usize;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if poppable > 0 {
                    out.pop();
                    poppable -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(seg) => {
                out.push(seg);
                poppable += 1;
            }
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
