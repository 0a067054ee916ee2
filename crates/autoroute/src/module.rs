// File: src/module.rs
// Purpose: The shapes a route module can take and how each resolves to a router

use crate::error::{Error, Result};
use crate::segment::RouteFile;
use axum::Router;
use serde_json::Value as JsonValue;
use std::fmt;

/// Zero-argument function producing a router
pub type RouterFactory<S> = Box<dyn FnOnce() -> Router<S> + Send>;

/// What a route file exposes
///
/// Each route file is authored against one of these shapes and registered
/// with a [`ModuleLoader`](crate::ModuleLoader). Resolution happens once, at
/// mount time.
///
/// # Examples
///
/// ```
/// use autoroute::RouteModule;
/// use axum::{routing::get, Router};
///
/// let direct: RouteModule = Router::new().route("/", get(|| async { "users" })).into();
/// let factory: RouteModule =
///     RouteModule::factory(|| Router::new().route("/", get(|| async { "login" })));
///
/// assert_eq!(direct.kind(), "router");
/// assert_eq!(factory.kind(), "factory");
/// ```
pub enum RouteModule<S = ()> {
    /// A mountable router, used as-is
    Router(Router<S>),
    /// Called with no arguments; its return value is mounted
    Factory(RouterFactory<S>),
    /// Plain exported data; never mountable
    Data(JsonValue),
}

impl<S> RouteModule<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Wraps a zero-argument router factory
    pub fn factory<F>(factory: F) -> Self
    where
        F: FnOnce() -> Router<S> + Send + 'static,
    {
        RouteModule::Factory(Box::new(factory))
    }

    /// Wraps plain data
    pub fn data(value: impl Into<JsonValue>) -> Self {
        RouteModule::Data(value.into())
    }

    /// Short name of the shape, used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            RouteModule::Router(_) => "router",
            RouteModule::Factory(_) => "factory",
            RouteModule::Data(value) => json_kind(value),
        }
    }

    /// Turns the module into the router to mount
    ///
    /// A router is returned directly, a factory is invoked once. Anything else
    /// fails with [`Error::InvalidRouteModule`] naming `file`.
    pub fn resolve(self, file: &RouteFile) -> Result<Router<S>> {
        match self {
            RouteModule::Router(router) => Ok(router),
            RouteModule::Factory(factory) => Ok(factory()),
            RouteModule::Data(value) => Err(Error::InvalidRouteModule {
                path: file.path.clone(),
                found: json_kind(&value),
            }),
        }
    }
}

impl<S> From<Router<S>> for RouteModule<S> {
    fn from(router: Router<S>) -> Self {
        RouteModule::Router(router)
    }
}

impl<S> fmt::Debug for RouteModule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteModule::Router(_) => f.write_str("RouteModule::Router(..)"),
            RouteModule::Factory(_) => f.write_str("RouteModule::Factory(..)"),
            RouteModule::Data(value) => f.debug_tuple("RouteModule::Data").field(value).finish(),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
