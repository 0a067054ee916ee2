// File: src/mounter.rs
// Purpose: Walks a routes directory and mounts every route module onto a router

use crate::error::{Error, Result};
use crate::loader::ModuleLoader;
use crate::path::{is_nestable, join_route};
use crate::segment::RouteFile;
use axum::Router;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default extension of route module files
pub const DEFAULT_EXTENSION: &str = "rs";

/// Record of one mounted route module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedRoute {
    /// Path the module was mounted at (`/`, `/users`, `/auth/login`)
    pub mount_path: String,
    /// File the module was found in
    pub file: PathBuf,
    /// Shape the module had before resolution (`router` or `factory`)
    pub kind: &'static str,
}

/// Recursive route mounter
///
/// Directory entries are visited in the order `fs::read_dir` yields them.
/// The first failure stops the walk and the router built so far is dropped.
pub struct Mounter<'a, S, L: ?Sized> {
    loader: &'a mut L,
    extension: String,
    mounted: Vec<MountedRoute>,
    _state: PhantomData<fn() -> S>,
}

impl<'a, S, L> Mounter<'a, S, L>
where
    S: Clone + Send + Sync + 'static,
    L: ModuleLoader<S> + ?Sized,
{
    /// Create a mounter that looks for `.rs` route files
    pub fn new(loader: &'a mut L) -> Self {
        Self {
            loader,
            extension: DEFAULT_EXTENSION.to_string(),
            mounted: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Use a different route file extension (with or without the leading dot)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Mounts everything under `dir` onto `router`
    ///
    /// `base_route` is the route path `dir` corresponds to, empty for the
    /// routes root. Subdirectories extend it with their name; files with
    /// the route extension are loaded and mounted.
    pub fn mount(&mut self, router: Router<S>, dir: &Path, base_route: &str) -> Result<Router<S>> {
        let entries = fs::read_dir(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut router = router;
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.is_dir() {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    warn!(path = %path.display(), "skipping directory with non UTF-8 name");
                    continue;
                };
                router = self.mount(router, &path, &join_route(base_route, name))?;
            } else if let Some(file) = RouteFile::from_entry(&path, base_route, &self.extension) {
                router = self.mount_file(router, file)?;
            }
        }

        Ok(router)
    }

    /// Loads, resolves and mounts a single route file
    fn mount_file(&mut self, router: Router<S>, file: RouteFile) -> Result<Router<S>> {
        if let Some(existing) = self.mounted.iter().find(|m| m.mount_path == file.mount_path) {
            return Err(Error::MountConflict {
                mount_path: file.mount_path,
                first: existing.file.clone(),
                second: file.path,
            });
        }

        if !is_nestable(&file.mount_path) {
            return Err(Error::InvalidMountPath {
                path: file.path,
                mount_path: file.mount_path,
            });
        }

        let module = self.loader.load(&file).ok_or_else(|| Error::InvalidRouteModule {
            path: file.path.clone(),
            found: "no module",
        })?;
        let kind = module.kind();
        let resolved = module.resolve(&file)?;

        let router = if file.mount_path == "/" {
            router.merge(resolved)
        } else {
            router.nest(&file.mount_path, resolved)
        };

        debug!(
            mount_path = %file.mount_path,
            file = %file.relative,
            kind,
            "mounted route module"
        );

        self.mounted.push(MountedRoute {
            mount_path: file.mount_path,
            file: file.path,
            kind,
        });

        Ok(router)
    }

    /// Modules mounted so far, in mount order
    pub fn mounted(&self) -> &[MountedRoute] {
        &self.mounted
    }

    pub fn into_mounted(self) -> Vec<MountedRoute> {
        self.mounted
    }
}

/// Mounts every `.rs` route module under `dir` onto `router`
///
/// Shorthand for [`Mounter::new`] followed by [`Mounter::mount`].
///
/// # Examples
///
/// ```no_run
/// use autoroute::{mount, ModuleRegistry};
/// use axum::Router;
/// use std::path::Path;
///
/// let mut registry: ModuleRegistry = ModuleRegistry::new()
///     .with_factory("users.rs", || Router::new());
///
/// let router = mount(Router::new(), Path::new("src/routes"), "", &mut registry)?;
/// # Ok::<(), autoroute::Error>(())
/// ```
pub fn mount<S, L>(
    router: Router<S>,
    dir: &Path,
    base_route: &str,
    loader: &mut L,
) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
    L: ModuleLoader<S> + ?Sized,
{
    Mounter::new(loader).mount(router, dir, base_route)
}
