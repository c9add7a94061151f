pub mod loader;
pub mod resolver;
pub mod url_model;

mod fs_path;

pub use loader::fs::FsUrlLoader;
pub use loader::{LoadError, UrlLoader};
pub use resolver::fs::FsUrlResolver;
pub use resolver::UrlResolver;
pub use url_model::{FileRelativeUrl, InvalidUrlError, PackageRelativeUrl, ResolvedUrl};
