//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::db::build_dao;
use crate::services::CustomerService;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`. The store backend is
/// chosen here, once, from the configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    customers: CustomerService,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let dao = build_dao(config.storage_backend, pool.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                customers: CustomerService::new(dao),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    #[must_use]
    pub fn customers(&self) -> &CustomerService {
        &self.inner.customers
    }
}
