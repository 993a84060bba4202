/// Failure modes of an ancestor search.
///
/// Per-level I/O trouble (a permission error on one candidate, say) is never
/// surfaced here; the walk treats it as "nothing at this level" and keeps
/// climbing. Only input validation and an exhausted ascent produce errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FindError {
    #[error("dir cannot be empty")]
    EmptyDir,

    #[error("name cannot be empty")]
    EmptyName,

    /// A candidate path broke the virtual filesystem's addressing rules.
    /// This signals a caller or adapter bug, not a missing entry.
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    /// No ancestor up to and including the root contained the marker.
    #[error("marker not found in any ancestor")]
    NotFound,
}
