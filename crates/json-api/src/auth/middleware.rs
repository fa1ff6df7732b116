//! Bearer token middleware.
//!
//! Resolves `Authorization: Bearer <token>` to a [`StaffIdentity`] and stores it in the
//! depot for the handlers behind it. Any failure ends the request with `401`.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use eniqilo_app::auth::StaffIdentity;

use crate::{errors::ApiError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let token = extract_bearer_token(req).map(ToOwned::to_owned);

    match authenticate(token, depot).await {
        Ok(staff) => {
            depot.insert_staff(staff);

            ctrl.call_next(req, depot, res).await;
        }
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();
        }
    }
}

async fn authenticate(token: Option<String>, depot: &Depot) -> Result<StaffIdentity, ApiError> {
    let token = token.ok_or_else(ApiError::unauthenticated)?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(state.app.auth.authenticate_bearer(&token).await?)
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
