//! Staff request payloads.

use std::ops::RangeInclusive;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eniqilo_app::{
    auth::{NewStaff, Password, StaffCredentials, StaffUuid},
    validation::Violations,
};

const NAME_LENGTH: RangeInclusive<usize> = 5..=50;
const PASSWORD_LENGTH: RangeInclusive<usize> = 5..=15;

/// Staff registration payload.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RegisterStaffRequest {
    pub phone_number: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl RegisterStaffRequest {
    pub(crate) fn validate(self) -> Result<NewStaff, Violations> {
        let mut violations = Violations::new();

        let phone_number = violations.phone_number("phoneNumber", self.phone_number);
        let name = violations.text("name", self.name, NAME_LENGTH);
        let password = violations.text("password", self.password, PASSWORD_LENGTH);

        match (phone_number, name, password) {
            (Some(phone_number), Some(name), Some(password)) if violations.is_empty() => {
                Ok(NewStaff {
                    uuid: StaffUuid::new(),
                    name,
                    phone_number,
                    password: Password::new(password),
                })
            }
            _ => Err(violations),
        }
    }
}

/// Staff login payload.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct LoginRequest {
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<StaffCredentials, Violations> {
        let mut violations = Violations::new();

        let phone_number = violations.phone_number("phoneNumber", self.phone_number);
        let password = violations.text("password", self.password, PASSWORD_LENGTH);

        match (phone_number, password) {
            (Some(phone_number), Some(password)) if violations.is_empty() => Ok(StaffCredentials {
                phone_number,
                password: Password::new(password),
            }),
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_reports_every_invalid_field() {
        let result = RegisterStaffRequest {
            phone_number: Some("081234567890".to_string()),
            name: Some("Bob".to_string()),
            password: None,
        }
        .validate();

        let fields: Vec<&str> = result
            .err()
            .map(|violations| violations.iter().map(|v| v.field).collect())
            .unwrap_or_default();

        assert_eq!(fields, vec!["phoneNumber", "name", "password"]);
    }

    #[test]
    fn valid_login_is_accepted() {
        let credentials = LoginRequest {
            phone_number: Some("+6281234567890".to_string()),
            password: Some("hunter22".to_string()),
        }
        .validate();

        assert!(credentials.is_ok_and(|c| c.phone_number == "+6281234567890"));
    }
}
