//! App Router

use std::time::Duration;

use salvo::{
    Router,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    timeout::Timeout,
};

use crate::{auth, checkouts, customers, healthcheck, observability, products, staff};

/// The `/v1` API. Literal segments are registered ahead of `{id}` so that
/// `product/customer` and `product/checkout` are never read as product ids.
pub(crate) fn api_router(request_timeout: Duration) -> Router {
    Router::with_path("v1")
        .hoop(Timeout::new(request_timeout))
        .push(Router::with_path("staff/register").post(staff::register::handler))
        .push(Router::with_path("staff/login").post(staff::login::handler))
        .push(Router::with_path("product/customer").get(products::customer_index::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("product/checkout")
                        .post(checkouts::create::handler)
                        .push(Router::with_path("history").get(checkouts::history::handler)),
                )
                .push(
                    Router::with_path("product")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{id}")
                                .put(products::update::handler)
                                .delete(products::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("customer")
                        .get(customers::index::handler)
                        .push(Router::with_path("register").post(customers::register::handler)),
                ),
        )
}

/// API routes plus liveness, metrics and the `OpenAPI` document.
pub(crate) fn app_router(request_timeout: Duration) -> Router {
    let router = Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(api_router(request_timeout));

    let doc = OpenApi::new("Eniqilo Store API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
