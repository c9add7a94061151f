//! Filesystem-rooted resolution strategy.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::fs_path;
use crate::resolver::{join_url, relative, UrlResolver};
use crate::url_model::{FileRelativeUrl, InvalidUrlError, PackageRelativeUrl, ResolvedUrl};

/// Resolves package- and file-relative references against a root directory,
/// producing `file://` locations that pair with
/// [`FsUrlLoader`](crate::loader::fs::FsUrlLoader).
#[derive(Clone, Debug)]
pub struct FsUrlResolver {
    /// `file://` URL of the root directory, trailing slash included.
    base: ResolvedUrl,
}

impl FsUrlResolver {
    /// Root the resolver at `root` (pass `"."` for the working directory).
    /// The root is made absolute once here; a relative base would silently
    /// drift with the working directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let abs = fs_path::normalize_root(root)
            .with_context(|| format!("failed to absolutize resolver root: {}", root.display()))?;
        let base = Url::from_directory_path(&abs)
            .map_err(|()| anyhow!("resolver root is not usable as a directory URL: {}", abs.display()))?;
        Ok(FsUrlResolver {
            base: ResolvedUrl::from(base),
        })
    }

    /// The `file://` URL the root directory resolves to.
    pub fn base(&self) -> &ResolvedUrl {
        &self.base
    }
}

impl UrlResolver for FsUrlResolver {
    fn resolve(&self, url: &PackageRelativeUrl) -> Result<ResolvedUrl, InvalidUrlError> {
        // Package-relative references are root-anchored: a leading `/` means
        // "from the package root", never "from the filesystem root".
        join_url(&self.base, url.as_str().trim_start_matches('/'))
    }

    fn resolve_from(
        &self,
        base: &ResolvedUrl,
        reference: &FileRelativeUrl,
    ) -> Result<ResolvedUrl, InvalidUrlError> {
        join_url(base, reference.as_str())
    }

    fn relative(&self, to: &ResolvedUrl) -> PackageRelativeUrl {
        PackageRelativeUrl::new(relative::relative_url(self.base.as_url(), to.as_url()))
    }
}
