//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use eniqilo_app::auth::StaffIdentity;

use crate::errors::ApiError;

/// Typed access to values placed in the depot by hoops.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_staff(&mut self, staff: StaffIdentity);

    /// The staff member the auth middleware resolved for this request.
    fn staff_or_401(&self) -> Result<&StaffIdentity, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>()
            .map_err(|_missing| ApiError::internal())
    }

    fn insert_staff(&mut self, staff: StaffIdentity) {
        self.inject(staff);
    }

    fn staff_or_401(&self) -> Result<&StaffIdentity, ApiError> {
        self.obtain::<StaffIdentity>()
            .map_err(|_missing| ApiError::unauthenticated())
    }
}
