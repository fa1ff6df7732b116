//! Customers

mod handlers;

pub(crate) use handlers::*;

use std::ops::RangeInclusive;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eniqilo_app::{
    domain::customers::records::{CustomerRecord, CustomerUuid, NewCustomer},
    validation::Violations,
};

const NAME_LENGTH: RangeInclusive<usize> = 5..=50;

/// Customer registration payload.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RegisterCustomerRequest {
    pub phone_number: Option<String>,
    pub name: Option<String>,
}

impl RegisterCustomerRequest {
    fn validate(self) -> Result<NewCustomer, Violations> {
        let mut violations = Violations::new();

        let phone_number = violations.phone_number("phoneNumber", self.phone_number);
        let name = violations.text("name", self.name, NAME_LENGTH);

        let (Some(phone_number), Some(name)) = (phone_number, name) else {
            return Err(violations);
        };

        Ok(NewCustomer {
            uuid: CustomerUuid::new(),
            name,
            phone_number,
        })
    }
}

/// Customer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerResponse {
    pub user_id: String,
    pub phone_number: String,
    pub name: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            user_id: customer.uuid.to_string(),
            phone_number: customer.phone_number,
            name: customer.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_is_rejected() {
        let result = RegisterCustomerRequest {
            phone_number: Some("+6281234567890".to_string()),
            name: Some("Ann".to_string()),
        }
        .validate();

        let message = result.err().map(|violations| violations.to_string());

        assert_eq!(
            message.as_deref(),
            Some("name must be between 5 and 50 characters")
        );
    }
}
