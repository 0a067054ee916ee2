// File: src/magic.rs
// Purpose: Top-level entry: resolve the routes directory, mount it, apply the prefix

use crate::error::{Error, Result};
use crate::loader::ModuleLoader;
use crate::mounter::{MountedRoute, Mounter, DEFAULT_EXTENSION};
use crate::path::{is_nestable, normalize_path};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options recognized by [`magic`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountOptions {
    /// Mount the whole tree under this path (e.g. `/api`)
    #[serde(default)]
    pub prefix: Option<String>,

    /// Route file extension (default: `rs`)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory relative routes directories are resolved against
    /// (default: the current directory)
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            extension: default_extension(),
            base_dir: None,
        }
    }
}

impl MountOptions {
    /// Normalized prefix, or `None` when the tree mounts at the root
    ///
    /// # Examples
    ///
    /// ```
    /// use autoroute::MountOptions;
    ///
    /// let options = MountOptions { prefix: Some("api/".into()), ..Default::default() };
    /// assert_eq!(options.normalized_prefix().as_deref(), Some("/api"));
    ///
    /// let options = MountOptions { prefix: Some("/".into()), ..Default::default() };
    /// assert_eq!(options.normalized_prefix(), None);
    /// ```
    pub fn normalized_prefix(&self) -> Option<String> {
        let prefix = normalize_path(self.prefix.as_deref()?);
        (prefix != "/").then(|| prefix.into_owned())
    }
}

/// Result of a mount, with the list of what went where
pub struct MountReport<S = ()> {
    pub router: Router<S>,
    /// Absolute routes directory that was scanned
    pub routes_dir: PathBuf,
    /// Mounted modules in mount order; paths exclude the prefix
    pub routes: Vec<MountedRoute>,
    pub prefix: Option<String>,
}

/// Resolves a routes directory to an absolute path
///
/// Absolute paths are returned unchanged. Relative ones are joined onto
/// `base_dir`, or onto the current directory when no base is given. Nothing
/// is checked on disk.
pub fn resolve_routes_dir(routes_dir: &Path, base_dir: Option<&Path>) -> Result<PathBuf> {
    if routes_dir.is_absolute() {
        return Ok(routes_dir.to_path_buf());
    }

    let base = match base_dir {
        Some(base) if base.is_absolute() => base.to_path_buf(),
        Some(base) => current_dir()?.join(base),
        None => current_dir()?,
    };

    Ok(base.join(routes_dir))
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|source| Error::Io {
        path: PathBuf::from("."),
        source,
    })
}

/// Builds a router from a routes directory
///
/// Resolves `routes_dir`, checks that it is a directory, mounts every route
/// module under it onto a fresh router and, when `options.prefix` is set,
/// nests the result under the prefix.
///
/// # Errors
///
/// - [`Error::DirectoryNotFound`] before anything else is touched
/// - [`Error::InvalidRouteModule`] / [`Error::MountConflict`] on the first bad file
///
/// # Examples
///
/// ```no_run
/// use autoroute::{magic, ModuleRegistry, MountOptions};
/// use axum::{routing::get, Router};
///
/// let mut registry: ModuleRegistry = ModuleRegistry::new()
///     .with_router("index.rs", Router::new().route("/", get(|| async { "home" })));
///
/// let options = MountOptions { prefix: Some("/api".into()), ..Default::default() };
/// let app = magic("routes", &mut registry, &options)?;
/// # Ok::<(), autoroute::Error>(())
/// ```
pub fn magic<S, L>(
    routes_dir: impl AsRef<Path>,
    loader: &mut L,
    options: &MountOptions,
) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
    L: ModuleLoader<S> + ?Sized,
{
    magic_with_report(routes_dir, loader, options).map(|report| report.router)
}

/// Same as [`magic`], also returning what was mounted
pub fn magic_with_report<S, L>(
    routes_dir: impl AsRef<Path>,
    loader: &mut L,
    options: &MountOptions,
) -> Result<MountReport<S>>
where
    S: Clone + Send + Sync + 'static,
    L: ModuleLoader<S> + ?Sized,
{
    let dir = resolve_routes_dir(routes_dir.as_ref(), options.base_dir.as_deref())?;

    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound { path: dir });
    }

    let prefix = options.normalized_prefix();
    if let Some(prefix) = prefix.as_deref().filter(|p| !is_nestable(p)) {
        return Err(Error::InvalidMountPath {
            path: dir,
            mount_path: prefix.to_string(),
        });
    }

    let mut mounter = Mounter::new(loader).with_extension(options.extension.as_str());
    let router = mounter.mount(Router::new(), &dir, "")?;
    let routes = mounter.into_mounted();

    let router = match prefix.as_deref() {
        Some(prefix) => Router::new().nest(prefix, router),
        None => router,
    };

    info!(
        routes_dir = %dir.display(),
        prefix = prefix.as_deref().unwrap_or("/"),
        count = routes.len(),
        "mounted route modules"
    );

    Ok(MountReport {
        router,
        routes_dir: dir,
        routes,
        prefix,
    })
}

/// Builder form of [`magic`]
///
/// # Examples
///
/// ```no_run
/// use autoroute::{routes_dir, Magic, ModuleRegistry};
/// use axum::Router;
///
/// let mut registry: ModuleRegistry = ModuleRegistry::new();
/// let app: Router = Magic::new(routes_dir!("src/routes"))
///     .prefix("/api")
///     .mount(&mut registry)?;
/// # Ok::<(), autoroute::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Magic {
    routes_dir: PathBuf,
    options: MountOptions,
}

impl Magic {
    pub fn new(routes_dir: impl Into<PathBuf>) -> Self {
        Self {
            routes_dir: routes_dir.into(),
            options: MountOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MountOptions) -> Self {
        self.options = options;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = Some(prefix.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.options.extension = extension.into();
        self
    }

    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.options.base_dir = Some(base_dir.into());
        self
    }

    pub fn options(&self) -> &MountOptions {
        &self.options
    }

    pub fn mount<S, L>(&self, loader: &mut L) -> Result<Router<S>>
    where
        S: Clone + Send + Sync + 'static,
        L: ModuleLoader<S> + ?Sized,
    {
        magic(&self.routes_dir, loader, &self.options)
    }

    pub fn mount_report<S, L>(&self, loader: &mut L) -> Result<MountReport<S>>
    where
        S: Clone + Send + Sync + 'static,
        L: ModuleLoader<S> + ?Sized,
    {
        magic_with_report(&self.routes_dir, loader, &self.options)
    }
}

/// Path to a routes directory inside the calling crate
///
/// Expands to `CARGO_MANIFEST_DIR` of the crate that uses it, joined with
/// the given relative path.
///
/// ```
/// let dir = autoroute::routes_dir!("src/routes");
/// assert!(dir.is_absolute());
/// assert!(dir.ends_with("src/routes"));
/// ```
#[macro_export]
macro_rules! routes_dir {
    ($dir:expr) => {
        ::std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join($dir)
    };
}
