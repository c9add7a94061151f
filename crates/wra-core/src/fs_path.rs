//! Root-path normalization shared by the fs resolver and loader.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Absolute, lexically normalized form of a configured root directory.
///
/// Normalization is lexical only (`.` dropped, `..` collapsed); the path is
/// not required to exist and symlinks are not resolved. The sandbox boundary
/// is defined by the configured root text, not by what is on disk.
pub(crate) fn normalize_root(root: &Path) -> io::Result<PathBuf> {
    let abs = std::path::absolute(root)?;
    let mut out = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}
