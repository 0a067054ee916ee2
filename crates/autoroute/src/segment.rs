// File: src/segment.rs
// Purpose: Maps route files on disk to route paths and mount paths

use crate::path::{join_route, mount_path};
use std::path::{Path, PathBuf};

/// File stem that contributes no segment of its own
const INDEX_STEM: &str = "index";

/// A route file discovered during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFile {
    /// Path of the file on disk
    pub path: PathBuf,
    /// Path relative to the routes root, POSIX style, extension kept (`auth/login.rs`)
    pub relative: String,
    /// Route path without leading slash (`auth/login`, empty for the root index)
    pub route: String,
    /// Mount path handed to the router (`/auth/login`, `/` for the root index)
    pub mount_path: String,
    /// Whether the stem is exactly `index`
    pub is_index: bool,
}

impl RouteFile {
    /// Builds a route file from a directory entry
    ///
    /// Returns `None` when the file name does not end in `.{extension}`,
    /// when nothing is left once the extension is stripped, or when the
    /// name is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoroute::RouteFile;
    /// use std::path::Path;
    ///
    /// let login = Path::new("/srv/routes/auth/login.rs");
    /// let file = RouteFile::from_entry(login, "auth", "rs").unwrap();
    /// assert_eq!(file.relative, "auth/login.rs");
    /// assert_eq!(file.mount_path, "/auth/login");
    ///
    /// let index = Path::new("/srv/routes/auth/index.rs");
    /// let index = RouteFile::from_entry(index, "auth", "rs").unwrap();
    /// assert_eq!(index.mount_path, "/auth");
    ///
    /// assert!(RouteFile::from_entry(Path::new("/srv/routes/README.md"), "", "rs").is_none());
    /// ```
    pub fn from_entry(path: &Path, base_route: &str, extension: &str) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let stem = module_stem(file_name, extension)?;

        let is_index = stem == INDEX_STEM;
        let route = if is_index {
            base_route.to_string()
        } else {
            join_route(base_route, stem)
        };

        Some(RouteFile {
            path: path.to_path_buf(),
            relative: join_route(base_route, file_name),
            mount_path: mount_path(&route),
            route,
            is_index,
        })
    }
}

/// Strips `.{extension}` from a file name, if it carries it
///
/// # Examples
///
/// ```
/// use autoroute::segment::module_stem;
///
/// assert_eq!(module_stem("users.rs", "rs"), Some("users"));
/// assert_eq!(module_stem("users.rs", ".rs"), Some("users"));
/// assert_eq!(module_stem("users.test.rs", "rs"), Some("users.test"));
/// assert_eq!(module_stem("users.rsx", "rs"), None);
/// assert_eq!(module_stem(".rs", "rs"), None);
/// ```
pub fn module_stem<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let extension = extension.trim_start_matches('.');
    file_name
        .strip_suffix(extension)?
        .strip_suffix('.')
        .filter(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("index.rs", "", "", "/")]
    #[case("users.rs", "", "users", "/users")]
    #[case("login.rs", "auth", "auth/login", "/auth/login")]
    #[case("index.rs", "auth", "auth", "/auth")]
    #[case("index.rs", "admin/users", "admin/users", "/admin/users")]
    #[case("[id].rs", "users", "users/[id]", "/users/[id]")]
    fn test_route_file_paths(
        #[case] file_name: &str,
        #[case] base_route: &str,
        #[case] route: &str,
        #[case] mount: &str,
    ) {
        let path = Path::new("/srv/routes").join(base_route).join(file_name);
        let file = RouteFile::from_entry(&path, base_route, "rs").unwrap();
        assert_eq!(file.route, route);
        assert_eq!(file.mount_path, mount);
        assert_eq!(file.relative, join_route(base_route, file_name));
    }

    #[test]
    fn test_other_extensions_ignored() {
        assert!(RouteFile::from_entry(Path::new("routes/notes.txt"), "", "rs").is_none());
        assert!(RouteFile::from_entry(Path::new("routes/users.rs.bak"), "", "rs").is_none());
        assert!(RouteFile::from_entry(Path::new("routes/users"), "", "rs").is_none());
    }

    #[test]
    fn test_custom_extension() {
        let file = RouteFile::from_entry(Path::new("routes/users.route"), "", "route").unwrap();
        assert_eq!(file.mount_path, "/users");
        assert!(RouteFile::from_entry(Path::new("routes/users.rs"), "", "route").is_none());
    }

    #[test]
    fn test_index_only_when_stem_is_exact() {
        let file = RouteFile::from_entry(Path::new("routes/index.rs"), "", "rs").unwrap();
        assert!(file.is_index);

        let file = RouteFile::from_entry(Path::new("routes/indexes.rs"), "", "rs").unwrap();
        assert_eq!(file.mount_path, "/indexes");
        assert!(!file.is_index);

        let file = RouteFile::from_entry(Path::new("routes/Index.rs"), "", "rs").unwrap();
        assert_eq!(file.mount_path, "/Index");

        let file = RouteFile::from_entry(Path::new("routes/index.test.rs"), "", "rs").unwrap();
        assert_eq!(file.mount_path, "/index.test");
        assert!(!file.is_index);
    }
}
