//! Resource loaders.
//!
//! A [`UrlLoader`] fetches the text behind a [`ResolvedUrl`]. Parsers and
//! scanners go through this surface and never construct filesystem paths
//! themselves: they check [`can_load`](UrlLoader::can_load) (or branch on
//! [`FsUrlLoader::get_file_path`](fs::FsUrlLoader::get_file_path)) before
//! committing to I/O.

pub mod fs;

use async_trait::async_trait;

use crate::url_model::ResolvedUrl;

/// Error channel for [`UrlLoader::load`].
///
/// Refusals and I/O failures stay distinct so a document-graph builder can
/// record the former as "unresolvable reference" diagnostics and attribute
/// the latter to the one document that failed, without aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The url was refused before any I/O: wrong scheme, or its filesystem
    /// path falls outside the loader's root.
    #[error("can not load {url}: {reason}")]
    NotLoadable { url: ResolvedUrl, reason: String },
    /// The underlying filesystem operation failed; propagated unwrapped.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fetches the textual contents behind resolved locations.
#[async_trait]
pub trait UrlLoader: Send + Sync {
    /// Whether this loader can fetch `url`. Pure predicate, no I/O.
    fn can_load(&self, url: &ResolvedUrl) -> bool;

    /// Full UTF-8 text content of `url`.
    async fn load(&self, url: &ResolvedUrl) -> Result<String, LoadError>;
}
