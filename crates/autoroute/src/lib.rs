//! # autoroute
//!
//! Convention-based route auto-loader for [axum](https://docs.rs/axum).
//!
//! Walks a routes directory, maps file and folder names to URL path
//! segments, looks up the route module behind each file and mounts it onto a
//! `Router`:
//!
//! | file                 | mounted at      |
//! |----------------------|-----------------|
//! | `index.rs`           | `/`             |
//! | `users.rs`           | `/users`        |
//! | `auth/login.rs`      | `/auth/login`   |
//! | `auth/index.rs`      | `/auth`         |
//!
//! Route files are ordinary Rust modules. Each one is registered with a
//! [`ModuleLoader`] (usually a [`ModuleRegistry`]) as either a router or a
//! zero-argument function returning a router.
//!
//! ## Example
//!
//! ```no_run
//! use autoroute::{routes_dir, Magic, ModuleRegistry};
//! use axum::{routing::get, Router};
//!
//! let mut registry: ModuleRegistry = ModuleRegistry::new()
//!     .with_router("index.rs", Router::new().route("/", get(|| async { "home" })))
//!     .with_factory("users.rs", || Router::new().route("/", get(|| async { "users" })));
//!
//! let app: Router = Magic::new(routes_dir!("src/routes"))
//!     .prefix("/api")
//!     .mount(&mut registry)?;
//! # Ok::<(), autoroute::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod magic;
pub mod module;
pub mod mounter;
pub mod path;
pub mod segment;

pub use config::Config;
pub use error::{Error, Result};
pub use loader::{ModuleLoader, ModuleRegistry};
pub use magic::{magic, magic_with_report, resolve_routes_dir, Magic, MountOptions, MountReport};
pub use module::{RouteModule, RouterFactory};
pub use mounter::{mount, MountedRoute, Mounter, DEFAULT_EXTENSION};
pub use segment::RouteFile;

// Re-export axum so route modules can name the router type through us
pub use axum;
