//! Path utilities for route paths and mount paths
//!
//! Nothing here touches the file system; these work on strings only.
//!
//! A *route path* is the relative form built up during a scan (`""`, `"users"`,
//! `"auth/login"`). A *mount path* is what gets handed to the router (`"/"`,
//! `"/users"`, `"/auth/login"`).

use std::borrow::Cow;

/// Segments of a path, splitting on either slash and dropping empty pieces
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty())
}

/// Already `/`, or `/a/b` with no empty segments and no backslashes
fn is_canonical(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    path.starts_with('/') && !path.ends_with('/') && !path.contains("//") && !path.contains('\\')
}

/// Brings a prefix into mount path form
///
/// Borrows when the input is already canonical. A missing leading slash,
/// trailing or doubled slashes and backslashes are all repaired; an input
/// with no segments becomes `/`.
///
/// # Examples
///
/// ```
/// use autoroute::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/api"), Cow::Borrowed("/api")));
/// assert_eq!(normalize_path("api/"), "/api");
/// assert_eq!(normalize_path("\\api\\v1"), "/api/v1");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in segments(path) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(normalized)
    }
}

/// Whether a mount path can be handed to `Router::nest`
///
/// axum refuses to nest under a wildcard, so no segment may contain `*`.
///
/// # Examples
///
/// ```
/// use autoroute::path::is_nestable;
///
/// assert!(is_nestable("/users/:id"));
/// assert!(!is_nestable("/files/*rest"));
/// ```
pub fn is_nestable(mount_path: &str) -> bool {
    !segments(mount_path).any(|segment| segment.contains('*'))
}

/// Joins a segment onto a route path, POSIX style
///
/// Empty pieces contribute nothing, so joining onto the root route yields
/// the bare segment.
///
/// # Examples
///
/// ```
/// use autoroute::path::join_route;
///
/// assert_eq!(join_route("", "users"), "users");
/// assert_eq!(join_route("auth", "login"), "auth/login");
/// assert_eq!(join_route("auth", ""), "auth");
/// ```
pub fn join_route(base: &str, segment: &str) -> String {
    match (base.is_empty(), segment.is_empty()) {
        (true, _) => segment.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, segment),
    }
}

/// Turns a route path into the mount path handed to the router
///
/// # Examples
///
/// ```
/// use autoroute::path::mount_path;
///
/// assert_eq!(mount_path(""), "/");
/// assert_eq!(mount_path("auth/login"), "/auth/login");
/// ```
pub fn mount_path(route: &str) -> String {
    if route.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("/"));
        assert!(is_canonical("/users"));
        assert!(is_canonical("/auth/login"));

        assert!(!is_canonical(""));
        assert!(!is_canonical("users"));
        assert!(!is_canonical("/users/"));
        assert!(!is_canonical("/auth//login"));
        assert!(!is_canonical("/auth\\login"));
    }

    #[test]
    fn test_is_nestable() {
        assert!(is_nestable("/"));
        assert!(is_nestable("/auth/login"));
        assert!(is_nestable("/users/:id"));
        assert!(!is_nestable("/*rest"));
        assert!(!is_nestable("/files/*path/meta"));
        assert!(!is_nestable("/a*b"));
    }

    #[test]
    fn test_normalize_path_valid() {
        let path = normalize_path("/api");
        assert!(matches!(path, Cow::Borrowed("/api")));

        let path = normalize_path("/");
        assert!(matches!(path, Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_path_prefix_mistakes() {
        assert_eq!(normalize_path("api"), "/api");
        assert_eq!(normalize_path("/api/"), "/api");
        assert_eq!(normalize_path("//api//v1/"), "/api/v1");
        assert_eq!(normalize_path("\\api\\v1"), "/api/v1");
    }

    #[test]
    fn test_normalize_path_empty() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_join_route() {
        assert_eq!(join_route("", ""), "");
        assert_eq!(join_route("", "auth"), "auth");
        assert_eq!(join_route("auth", "login"), "auth/login");
        assert_eq!(join_route("admin/users", "roles"), "admin/users/roles");
    }

    #[test]
    fn test_mount_path() {
        assert_eq!(mount_path(""), "/");
        assert_eq!(mount_path("users"), "/users");
        assert_eq!(mount_path("auth/login"), "/auth/login");
    }
}
