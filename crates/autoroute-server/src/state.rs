// File: src/state.rs
// Purpose: Application state shared by every route module

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub users: Arc<RwLock<Vec<User>>>,
}

impl AppState {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// State with a couple of users already in place
    pub fn seeded(app_name: impl Into<String>) -> Self {
        let state = Self::new(app_name);
        let users = vec![
            User { id: 1, name: "ada".to_string() },
            User { id: 2, name: "grace".to_string() },
        ];
        Self {
            users: Arc::new(RwLock::new(users)),
            ..state
        }
    }
}
