//! API error responses.
//!
//! Every failure leaves the server as `{message, status, error}`. Service errors are
//! converted through their [`ClassifiedError`] kind; internal failures are logged and
//! replaced by a generic message.

use std::error::Error;

use salvo::{
    Depot, FlowCtrl, Request, Response, Scribe, handler,
    http::{ResBody, StatusCode},
    oapi::{Components, EndpointOutRegister, Operation, Response as OapiResponse, ToSchema},
    writing::Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use eniqilo_app::errors::{ClassifiedError, ErrorKind};

const INTERNAL_MESSAGE: &str = "internal server error";

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human-readable description.
    pub message: String,

    /// HTTP status code.
    pub status: u16,

    /// Machine-readable error kind.
    pub error: String,
}

/// An error rendered as an [`ErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: status_for(kind),
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn unauthenticated() -> Self {
        Self::new(ErrorKind::Unauthenticated, "invalid token")
    }

    pub(crate) fn internal() -> Self {
        Self::new(ErrorKind::InternalServerError, INTERNAL_MESSAGE)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub(crate) const fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.message.clone(),
            status: self.status.as_u16(),
            error: self.kind.as_str().to_string(),
        }
    }
}

impl<E: ClassifiedError> From<E> for ApiError {
    fn from(error: E) -> Self {
        let kind = error.kind();

        if kind == ErrorKind::InternalServerError {
            match error.source() {
                Some(source) => error!("{error}: {source}"),
                None => error!("{error}"),
            }

            return Self::internal();
        }

        Self::new(kind, error.to_string())
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.body()));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (kind, description) in [
            (ErrorKind::BadRequest, "Bad Request"),
            (ErrorKind::Unauthenticated, "Not Authenticated"),
            (ErrorKind::InternalServerError, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status_for(kind).as_str(),
                OapiResponse::new(description)
                    .add_content("application/json", ErrorBody::to_schema(components)),
            );
        }
    }
}

const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn kind_for(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::UNAUTHORIZED => ErrorKind::Unauthenticated,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        status if status.is_client_error() => ErrorKind::BadRequest,
        _ => ErrorKind::InternalServerError,
    }
}

/// Catcher hoop giving framework errors (unmatched routes, malformed bodies,
/// timeouts) the same body as handler errors.
#[handler]
pub(crate) async fn render_status_errors(
    _req: &mut Request,
    _depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(status) = res
        .status_code
        .filter(|status| status.is_client_error() || status.is_server_error())
    else {
        return;
    };

    let kind = kind_for(status);

    let message = match &res.body {
        ResBody::None | ResBody::Error(_) if kind == ErrorKind::InternalServerError => {
            INTERNAL_MESSAGE.to_string()
        }
        ResBody::Error(error) => error.brief.clone(),
        ResBody::None => status.canonical_reason().unwrap_or("error").to_lowercase(),
        // Rendered by a handler already.
        _ => {
            ctrl.skip_rest();
            return;
        }
    };

    let api_error = ApiError {
        status,
        kind,
        message,
    };

    api_error.render(res);
    ctrl.skip_rest();
}
