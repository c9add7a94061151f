//! Branded URL string types.
//!
//! Three mutually exclusive flavors of URL move through the analyzer and are
//! never interchanged without explicit conversion: [`ResolvedUrl`] (canonical
//! absolute location), [`FileRelativeUrl`] (reference as authored inside a
//! source file), and [`PackageRelativeUrl`] (reference relative to the
//! project root). Keeping them as distinct types means a mis-rooted url is a
//! compile error, not a silently wrong dependency edge.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// A base/reference combination that could not be parsed as a URL at all.
#[derive(Debug, thiserror::Error)]
#[error("invalid URL {url:?}: {source}")]
pub struct InvalidUrlError {
    url: String,
    source: url::ParseError,
}

impl InvalidUrlError {
    pub(crate) fn new(url: impl Into<String>, source: url::ParseError) -> Self {
        InvalidUrlError {
            url: url.into(),
            source,
        }
    }

    /// The offending url text.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A canonical, absolute location (`file://`, `https://`, ...).
///
/// Wraps an already-parsed [`url::Url`], so "always parseable as an absolute
/// URL" holds by construction. Produced by [`ResolvedUrl::parse`] or by a
/// [`UrlResolver`](crate::resolver::UrlResolver) strategy.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedUrl(Url);

impl ResolvedUrl {
    /// Parse an absolute URL string.
    pub fn parse(input: &str) -> Result<Self, InvalidUrlError> {
        Url::parse(input)
            .map(ResolvedUrl)
            .map_err(|source| InvalidUrlError::new(input, source))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The parsed form, for scheme/authority/path inspection.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl From<Url> for ResolvedUrl {
    fn from(url: Url) -> Self {
        ResolvedUrl(url)
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// A reference as authored inside a source file, relative to that file's own
/// location (`../lib/util.js`, `sub/app.html#main`, or absolute if it
/// carries a scheme). No inherent root.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRelativeUrl(String);

impl FileRelativeUrl {
    pub fn new(url: impl Into<String>) -> Self {
        FileRelativeUrl(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileRelativeUrl {
    fn from(url: &str) -> Self {
        FileRelativeUrl::new(url)
    }
}

impl fmt::Display for FileRelativeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference relative to the project/package root, independent of which
/// file refers to it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageRelativeUrl(String);

impl PackageRelativeUrl {
    pub fn new(url: impl Into<String>) -> Self {
        PackageRelativeUrl(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackageRelativeUrl {
    fn from(url: &str) -> Self {
        PackageRelativeUrl::new(url)
    }
}

impl fmt::Display for PackageRelativeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
