//! Minimal relative URL computation.

use url::Url;

/// Shortest relative reference that gets from `from` to `to`.
///
/// Targets on a different scheme or authority pass through unchanged as
/// absolute URLs; relative addressing across authorities is meaningless.
/// The target's query string and fragment are preserved verbatim even when
/// the path portion collapses to empty, so "same path, different fragment"
/// comes back as just `#fragment`.
pub(crate) fn relative_url(from: &Url, to: &Url) -> String {
    if to.scheme() != from.scheme()
        || to.host() != from.host()
        || to.port_or_known_default() != from.port_or_known_default()
    {
        return to.as_str().to_string();
    }

    let mut out = relative_path(from.path(), to.path());
    if let Some(query) = to.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = to.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Minimal `/`-separated relative path between two absolute URL paths.
///
/// Trailing slashes are significant: a directory target keeps its trailing
/// slash, so `/` to `/bar/` is `bar/`, not `bar`. Dot segments never appear
/// here; the WHATWG parser removed them when the urls were resolved.
fn relative_path(from: &str, to: &str) -> String {
    if from == to {
        return String::new();
    }

    // Directory of `from`: everything up to the final segment.
    let mut from_dir: Vec<&str> = from.split('/').collect();
    from_dir.pop();

    let mut to_dir: Vec<&str> = to.split('/').collect();
    let to_file = to_dir.pop().unwrap_or("");

    let shared = from_dir
        .iter()
        .zip(to_dir.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // One hop up per unshared `from` directory, then down into `to`.
    let mut segments: Vec<&str> = vec![".."; from_dir.len() - shared];
    segments.extend(&to_dir[shared..]);
    segments.push(to_file);
    segments.join("/")
}
