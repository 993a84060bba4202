//! Locate the nearest ancestor directory that contains a marker entry.
//!
//! Marker entries such as a module descriptor or a version-control metadata
//! directory flag a directory and everything below it as one coherent tree.
//! [`search::find`] walks upward over the host filesystem looking for such a
//! marker; [`search::find_in`] runs the same walk over any [`vfs::Vfs`]
//! implementation, so the search also works against in-memory or archived
//! trees and stays deterministic under test.

pub mod error;
pub mod search;
pub mod vfs;

pub use error::FindError;
pub use search::{find, find_in};
