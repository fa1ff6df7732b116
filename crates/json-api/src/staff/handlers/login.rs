//! Staff Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    staff::{StaffSessionResponse, requests::LoginRequest},
    state::State,
};

/// Staff Login Handler
#[endpoint(
    tags("staff"),
    summary = "Staff Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::NOT_FOUND, description = "Staff not found"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<StaffSessionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let credentials = json.into_inner().validate()?;

    let session = state.app.auth.login(credentials).await?;

    Ok(Json(session.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use eniqilo_app::auth::{AuthServiceError, MockAuthService};

    use crate::{errors::ErrorBody, test_helpers::auth};

    use super::{super::tests::make_session, *};

    fn make_service(service: MockAuthService) -> Service {
        auth(service).public(Router::with_path("v1/staff/login").post(handler))
    }

    fn credentials() -> serde_json::Value {
        json!({ "phoneNumber": "+6281234567890", "password": "hunter22" })
    }

    #[tokio::test]
    async fn test_login_success() -> TestResult {
        let session = make_session("+6281234567890");

        let mut service = MockAuthService::new();

        service
            .expect_login()
            .once()
            .withf(|c| c.phone_number == "+6281234567890" && c.password.expose() == "hunter22")
            .return_once(move |_| Ok(session));

        let mut res = TestClient::post("http://example.com/v1/staff/login")
            .json(&credentials())
            .send(&make_service(service))
            .await;

        let body: StaffSessionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.phone_number, "+6281234567890");
        assert_eq!(body.name, "Store Admin");

        Ok(())
    }

    #[tokio::test]
    async fn test_login_unknown_phone_returns_404() -> TestResult {
        let mut service = MockAuthService::new();

        service
            .expect_login()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::post("http://example.com/v1/staff/login")
            .json(&credentials())
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_wrong_password_returns_400() -> TestResult {
        let mut service = MockAuthService::new();

        service
            .expect_login()
            .once()
            .return_once(|_| Err(AuthServiceError::WrongPassword));

        let mut res = TestClient::post("http://example.com/v1/staff/login")
            .json(&credentials())
            .send(&make_service(service))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "password is wrong");

        Ok(())
    }
}
