//! Loads resources from the filesystem, sandboxed to a root directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::{self, BoxFuture};
use tracing::debug;

use crate::fs_path;
use crate::loader::{LoadError, UrlLoader};
use crate::url_model::{PackageRelativeUrl, ResolvedUrl};

/// Resolves load requests via the file system.
///
/// The root is absolute and immutable for the loader's lifetime and defines
/// the sandbox boundary: [`can_load`](UrlLoader::can_load) is false for any
/// url whose filesystem path falls outside it.
#[derive(Clone, Debug)]
pub struct FsUrlLoader {
    root: PathBuf,
}

impl FsUrlLoader {
    /// Sandbox the loader to `root` (pass `"."` for the working directory).
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = fs_path::normalize_root(root)
            .with_context(|| format!("failed to absolutize loader root: {}", root.display()))?;
        Ok(FsUrlLoader { root })
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path the given url would load from.
    ///
    /// This is the expected-failure channel: wrong scheme and containment
    /// violations come back as `Err` with a human-readable message, so
    /// callers can test loadability cheaply before committing to I/O and
    /// compose error messages without unwinding.
    pub fn get_file_path(&self, url: &ResolvedUrl) -> Result<PathBuf, String> {
        if url.as_url().scheme() != "file" {
            return Err("not a local file:// url".to_string());
        }
        // A host component means a remote or UNC-style file url.
        if url.as_url().host().is_some() {
            return Err("file:// url carries an authority".to_string());
        }
        let path = url
            .as_url()
            .to_file_path()
            .map_err(|()| format!("file:// url has no usable filesystem path: {url}"))?;
        if !path.starts_with(&self.root) {
            return Err(format!(
                "path is not inside root directory: {}",
                self.root.display()
            ));
        }
        Ok(path)
    }

    /// Lists entries under `root/path_from_root` as forward-slash urls
    /// relative to the root. Direct file entries come first, in directory
    /// enumeration order; with `deep`, each subdirectory's own listing is
    /// appended after them. No sorting beyond that.
    pub async fn read_directory(
        &self,
        path_from_root: &str,
        deep: bool,
    ) -> Result<Vec<PackageRelativeUrl>, LoadError> {
        self.read_directory_inner(path_from_root.trim_matches('/').to_string(), deep)
            .await
    }

    // Boxed so the listing can recurse into subdirectories.
    fn read_directory_inner(
        &self,
        dir: String,
        deep: bool,
    ) -> BoxFuture<'_, Result<Vec<PackageRelativeUrl>, LoadError>> {
        Box::pin(async move {
            let abs = join_from_root(&self.root, &dir);
            debug!(dir = %abs.display(), deep, "reading directory");
            let mut entries = tokio::fs::read_dir(&abs).await?;

            let mut files = Vec::new();
            let mut subdirs = Vec::new();
            // File-vs-directory classification is sequential; the recursive
            // listings below overlap their I/O.
            while let Some(entry) = entries.next_entry().await? {
                let name = entry.file_name().to_string_lossy().into_owned();
                let rel = if dir.is_empty() {
                    name
                } else {
                    format!("{dir}/{name}")
                };
                let metadata = tokio::fs::metadata(join_from_root(&self.root, &rel)).await?;
                if metadata.is_dir() {
                    if deep {
                        subdirs.push(rel);
                    }
                } else {
                    files.push(PackageRelativeUrl::new(rel));
                }
            }

            let listings = future::try_join_all(
                subdirs
                    .into_iter()
                    .map(|sub| self.read_directory_inner(sub, deep)),
            )
            .await?;
            for listing in listings {
                files.extend(listing);
            }
            Ok(files)
        })
    }
}

#[async_trait]
impl UrlLoader for FsUrlLoader {
    fn can_load(&self, url: &ResolvedUrl) -> bool {
        self.get_file_path(url).is_ok()
    }

    async fn load(&self, url: &ResolvedUrl) -> Result<String, LoadError> {
        let path = self
            .get_file_path(url)
            .map_err(|reason| LoadError::NotLoadable {
                url: url.clone(),
                reason,
            })?;
        debug!(url = %url, path = %path.display(), "loading file");
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

/// Joins a forward-slash relative url path onto the root, one segment at a
/// time, so the result stays native on every platform.
fn join_from_root(root: &Path, rel: &str) -> PathBuf {
    let mut out = root.to_path_buf();
    for segment in rel.split('/').filter(|s| !s.is_empty()) {
        out.push(segment);
    }
    out
}
