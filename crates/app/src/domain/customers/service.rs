//! Customers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::customers::{
        errors::CustomersServiceError,
        filters::{CustomerListParams, CustomerQuery},
        records::{CustomerRecord, NewCustomer},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn register_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_customer(&mut tx, &customer).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_customers(
        &self,
        params: CustomerListParams,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let customers = self
            .repository
            .list_customers(&mut tx, &CustomerQuery::from(&params))
            .await?;

        tx.commit().await?;

        Ok(customers)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Registers a customer; phone numbers are unique.
    async fn register_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Lists customers, newest first.
    async fn list_customers(
        &self,
        params: CustomerListParams,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError>;
}
