// File: src/registry.rs
// Purpose: Declares which module backs each file under src/routes

use crate::routes;
use crate::state::AppState;
use autoroute::ModuleRegistry;

/// Route modules of this server, keyed by their file under `src/routes`
pub fn registry() -> ModuleRegistry<AppState> {
    ModuleRegistry::new()
        .with_router("index.rs", routes::index::router())
        .with_factory("users.rs", routes::users::router)
        .with_factory("auth/login.rs", routes::auth::login::router)
}
