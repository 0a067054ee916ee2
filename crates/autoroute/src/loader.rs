// File: src/loader.rs
// Purpose: Looks up the module behind each discovered route file

use crate::module::RouteModule;
use crate::segment::RouteFile;
use axum::Router;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Source of route modules for the files found during a scan
///
/// Returning `None` means the file has no module behind it; the mounter
/// reports that as an invalid route module.
pub trait ModuleLoader<S = ()> {
    fn load(&mut self, file: &RouteFile) -> Option<RouteModule<S>>;
}

impl<S, F> ModuleLoader<S> for F
where
    F: FnMut(&RouteFile) -> Option<RouteModule<S>>,
{
    fn load(&mut self, file: &RouteFile) -> Option<RouteModule<S>> {
        self(file)
    }
}

/// Table of route modules keyed by their path relative to the routes root
///
/// Keys use forward slashes and keep the extension (`auth/login.rs`), so a
/// key matches the file it was written in. Backslashes and leading slashes
/// in keys are tolerated.
///
/// # Examples
///
/// ```
/// use autoroute::{ModuleRegistry, RouteModule};
/// use axum::{routing::get, Router};
///
/// let registry: ModuleRegistry = ModuleRegistry::new()
///     .with_router("index.rs", Router::new().route("/", get(|| async { "home" })))
///     .with_factory("auth/login.rs", || Router::new().route("/", get(|| async { "login" })));
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.contains("auth/login.rs"));
/// ```
pub struct ModuleRegistry<S = ()> {
    modules: HashMap<String, RouteModule<S>>,
}

impl<S> ModuleRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Registers a module under `key`, replacing any earlier one
    pub fn register(&mut self, key: impl AsRef<str>, module: RouteModule<S>) {
        self.modules.insert(registry_key(key.as_ref()), module);
    }

    /// Registers a router that is mounted as-is
    pub fn register_router(&mut self, key: impl AsRef<str>, router: Router<S>) {
        self.register(key, RouteModule::Router(router));
    }

    /// Registers a zero-argument router factory
    pub fn register_factory<F>(&mut self, key: impl AsRef<str>, factory: F)
    where
        F: FnOnce() -> Router<S> + Send + 'static,
    {
        self.register(key, RouteModule::factory(factory));
    }

    /// Registers plain data; mounting it fails
    pub fn register_data(&mut self, key: impl AsRef<str>, value: impl Into<JsonValue>) {
        self.register(key, RouteModule::data(value));
    }

    // ========================================================================
    // Builder forms
    // ========================================================================

    pub fn with(mut self, key: impl AsRef<str>, module: RouteModule<S>) -> Self {
        self.register(key, module);
        self
    }

    pub fn with_router(mut self, key: impl AsRef<str>, router: Router<S>) -> Self {
        self.register_router(key, router);
        self
    }

    pub fn with_factory<F>(mut self, key: impl AsRef<str>, factory: F) -> Self
    where
        F: FnOnce() -> Router<S> + Send + 'static,
    {
        self.register_factory(key, factory);
        self
    }

    pub fn with_data(mut self, key: impl AsRef<str>, value: impl Into<JsonValue>) -> Self {
        self.register_data(key, value);
        self
    }

    /// Whether a module is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.modules.contains_key(registry_key(key).as_str())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Keys still registered, sorted
    ///
    /// After a mount these are the modules no scanned file claimed.
    pub fn unclaimed(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.modules.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl<S> Default for ModuleRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ModuleLoader<S> for ModuleRegistry<S> {
    /// Takes the module out of the registry; a file is only ever loaded once
    fn load(&mut self, file: &RouteFile) -> Option<RouteModule<S>> {
        self.modules.remove(file.relative.as_str())
    }
}

fn registry_key(key: &str) -> String {
    key.replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn file(relative_dir: &str, name: &str) -> RouteFile {
        let path = Path::new("/srv/routes").join(relative_dir).join(name);
        RouteFile::from_entry(&path, relative_dir, "rs").unwrap()
    }

    #[test]
    fn test_registry_keys_are_normalized() {
        let registry: ModuleRegistry = ModuleRegistry::new()
            .with_router("/auth/login.rs", Router::new())
            .with_router("admin\\users.rs", Router::new());

        assert!(registry.contains("auth/login.rs"));
        assert!(registry.contains("admin/users.rs"));
        assert_eq!(registry.unclaimed(), vec!["admin/users.rs", "auth/login.rs"]);
    }

    #[test]
    fn test_load_removes_entry() {
        let mut registry: ModuleRegistry =
            ModuleRegistry::new().with_router("auth/login.rs", Router::new());

        let login = file("auth", "login.rs");
        assert!(registry.load(&login).is_some());
        assert!(registry.load(&login).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_module_loads_none() {
        let mut registry: ModuleRegistry =
            ModuleRegistry::new().with_data("settings.rs", json!({}));
        assert!(registry.load(&file("", "users.rs")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_closure_loader() {
        let mut loader = |file: &RouteFile| -> Option<RouteModule> {
            (file.mount_path == "/users").then(|| RouteModule::Router(Router::new()))
        };
        assert!(loader.load(&file("", "users.rs")).is_some());
        assert!(loader.load(&file("", "posts.rs")).is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry: ModuleRegistry = ModuleRegistry::new();
        registry.register_data("users.rs", json!("placeholder"));
        registry.register_factory("users.rs", Router::new);

        let module = registry.load(&file("", "users.rs")).unwrap();
        assert_eq!(module.kind(), "factory");
    }
}
