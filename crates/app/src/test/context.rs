//! Test context for service-level integration tests.

use crate::{
    auth::{DEFAULT_TOKEN_LIFETIME, PgAuthService, TokenSigner},
    database::Db,
    domain::{
        checkouts::PgCheckoutsService, customers::PgCustomersService,
        products::PgProductsService,
    },
};

use super::db::TestDb;

const TEST_TOKEN_SECRET: &[u8] = b"eniqilo-test-secret";

pub struct TestContext {
    pub db: TestDb,
    pub tokens: TokenSigner,
    pub auth: PgAuthService,
    pub products: PgProductsService,
    pub customers: PgCustomersService,
    pub checkouts: PgCheckoutsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());
        let tokens = TokenSigner::new(TEST_TOKEN_SECRET, DEFAULT_TOKEN_LIFETIME);

        Self {
            auth: PgAuthService::new(db.clone(), tokens.clone()),
            products: PgProductsService::new(db.clone()),
            customers: PgCustomersService::new(db.clone()),
            checkouts: PgCheckoutsService::new(db),
            tokens,
            db: test_db,
        }
    }
}
