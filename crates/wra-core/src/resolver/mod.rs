//! URL resolution strategies.
//!
//! A [`UrlResolver`] turns references found inside one resource into
//! canonical resolved locations, and computes the minimal relative reference
//! from one resolved location to another. Strategies differ only in what
//! they treat as the package root ([`fs::FsUrlResolver`] roots at a
//! directory on disk); resolution itself is a WHATWG join and the
//! relative-path algorithm is shared.

pub mod fs;
mod relative;

use crate::url_model::{FileRelativeUrl, InvalidUrlError, PackageRelativeUrl, ResolvedUrl};

pub trait UrlResolver: Send + Sync {
    /// Resolve a package-relative reference against this strategy's root.
    fn resolve(&self, url: &PackageRelativeUrl) -> Result<ResolvedUrl, InvalidUrlError>;

    /// Resolve a reference authored inside a file against that file's
    /// resolved location. References that are already absolute pass through
    /// unchanged.
    fn resolve_from(
        &self,
        base: &ResolvedUrl,
        reference: &FileRelativeUrl,
    ) -> Result<ResolvedUrl, InvalidUrlError>;

    /// Minimal package-relative reference from this strategy's root to `to`.
    ///
    /// Same algorithm as [`relative_from`](UrlResolver::relative_from),
    /// different brand; consumers must not mix the two labels.
    fn relative(&self, to: &ResolvedUrl) -> PackageRelativeUrl;

    /// Shortest relative reference that gets from `from` to `to`. Targets on
    /// a different scheme or authority come back unchanged as absolute URLs.
    fn relative_from(&self, from: &ResolvedUrl, to: &ResolvedUrl) -> FileRelativeUrl {
        FileRelativeUrl::new(relative::relative_url(from.as_url(), to.as_url()))
    }
}

/// WHATWG join of `reference` against `base`; the resolution core shared by
/// strategies. Query/fragment semantics follow the URL standard: an empty
/// reference keeps the base's query and drops its fragment.
pub(crate) fn join_url(
    base: &ResolvedUrl,
    reference: &str,
) -> Result<ResolvedUrl, InvalidUrlError> {
    base.as_url()
        .join(reference)
        .map(ResolvedUrl::from)
        .map_err(|source| InvalidUrlError::new(reference, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The simplest possible strategy: a fixed https base, as a package
    /// served from a /test/ directory would see it.
    struct SimplestResolver {
        base: ResolvedUrl,
    }

    impl SimplestResolver {
        fn new() -> Self {
            SimplestResolver {
                base: ResolvedUrl::parse("https://analyzer.invalid/test/").unwrap(),
            }
        }
    }

    impl UrlResolver for SimplestResolver {
        fn resolve(&self, url: &PackageRelativeUrl) -> Result<ResolvedUrl, InvalidUrlError> {
            join_url(&self.base, url.as_str())
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

    fn resolve(base: &str, reference: &str) -> String {
        let resolver = SimplestResolver::new();
        let base = resolver.resolve(&PackageRelativeUrl::new(base)).unwrap();
        resolver
            .resolve_from(&base, &FileRelativeUrl::new(reference))
            .unwrap()
            .as_str()
            .to_string()
    }

    #[test]
    fn resolves_references_with_no_pathname() {
        let origin = "https://analyzer.invalid";
        assert_eq!(resolve("/foo.html?fiz#buz", ""), format!("{origin}/foo.html?fiz"));
        assert_eq!(resolve("/foo.html", "#fiz"), format!("{origin}/foo.html#fiz"));
        assert_eq!(resolve("/foo.html#buz", "#fiz"), format!("{origin}/foo.html#fiz"));
        assert_eq!(resolve("/foo.html", "?fiz"), format!("{origin}/foo.html?fiz"));
        assert_eq!(resolve("/foo.html?buz", "?fiz"), format!("{origin}/foo.html?fiz"));
        assert_eq!(resolve("/foo.html?bar#buz", "?fiz"), format!("{origin}/foo.html?fiz"));
    }

    #[test]
    fn one_argument_relative_is_branded_package_relative() {
        let resolver = SimplestResolver::new();
        let to = resolver.resolve(&PackageRelativeUrl::new("sub/foo.html")).unwrap();
        let rel: PackageRelativeUrl = resolver.relative(&to);
        assert_eq!(rel.as_str(), "sub/foo.html");
    }

    #[test]
    fn unparseable_references_fail_with_invalid_url() {
        let resolver = SimplestResolver::new();
        let base = resolver.resolve(&PackageRelativeUrl::new("foo.html")).unwrap();
        let err = resolver
            .resolve_from(&base, &FileRelativeUrl::new("http://["))
            .unwrap_err();
        assert_eq!(err.url(), "http://[");
    }

    #[test]
    fn resolve_then_relative_round_trips() {
        let resolver = SimplestResolver::new();
        let base = resolver.resolve(&PackageRelativeUrl::new("sub/foo.html")).unwrap();
        for (reference, normalized) in [
            ("bar.html?fiz=buz#x", "bar.html?fiz=buz#x"),
            ("../lib/util.js", "../lib/util.js"),
            ("./sub2/../bar.html", "bar.html"),
            ("", ""),
            ("#frag", "#frag"),
        ] {
            let resolved = resolver
                .resolve_from(&base, &FileRelativeUrl::new(reference))
                .unwrap();
            assert_eq!(
                resolver.relative_from(&base, &resolved).as_str(),
                normalized,
                "round trip through {reference:?}"
            );
        }
    }
}
