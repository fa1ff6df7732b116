//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService, TokenSigner},
    database::{self, DatabaseSettings, Db},
    domain::{
        checkouts::{CheckoutsService, PgCheckoutsService},
        customers::{CustomersService, PgCustomersService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// The services behind the HTTP surface.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub products: Arc<dyn ProductsService>,
    pub customers: Arc<dyn CustomersService>,
    pub checkouts: Arc<dyn CheckoutsService>,
}

impl AppContext {
    /// Build the application context over a new connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn connect(
        settings: &DatabaseSettings,
        tokens: TokenSigner,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(settings)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            auth: Arc::new(PgAuthService::new(db.clone(), tokens)),
            products: Arc::new(PgProductsService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            checkouts: Arc::new(PgCheckoutsService::new(db)),
        })
    }
}
