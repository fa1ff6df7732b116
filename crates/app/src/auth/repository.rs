//! Staff repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::auth::models::{StaffAccount, StaffRecord, StaffUuid};

const CREATE_STAFF_SQL: &str = include_str!("sql/create_staff.sql");
const FIND_STAFF_SQL: &str = include_str!("sql/find_staff.sql");
const FIND_STAFF_BY_PHONE_NUMBER_SQL: &str = include_str!("sql/find_staff_by_phone_number.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuthRepository;

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
        name: &str,
        phone_number: &str,
        password_hash: &str,
    ) -> Result<StaffRecord, sqlx::Error> {
        query_as::<Postgres, StaffRecord>(CREATE_STAFF_SQL)
            .bind(staff.into_uuid())
            .bind(name)
            .bind(phone_number)
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
    ) -> Result<Option<StaffRecord>, sqlx::Error> {
        query_as::<Postgres, StaffRecord>(FIND_STAFF_SQL)
            .bind(staff.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_staff_by_phone_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        phone_number: &str,
    ) -> Result<Option<StaffAccount>, sqlx::Error> {
        query_as::<Postgres, StaffAccount>(FIND_STAFF_BY_PHONE_NUMBER_SQL)
            .bind(phone_number)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for StaffRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: StaffUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            phone_number: row.try_get("phone_number")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for StaffAccount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            record: StaffRecord::from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}
