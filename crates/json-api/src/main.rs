//! Eniqilo Store JSON API Server

use std::process;

use salvo::{affix_state::inject, catcher::Catcher, prelude::*, trailing_slash::remove_slash};
use tracing::{error, info};

use eniqilo_app::context::AppContext;

use crate::{config::ServerConfig, errors::render_status_errors, state::State};

mod auth;
mod checkouts;
mod config;
mod customers;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod staff;
mod state;
#[cfg(test)]
mod test_helpers;

/// Eniqilo JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging is not initialised before configuration loads"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so stderr is all there is"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let app = match AppContext::connect(&config.database.settings(), config.auth.token_signer())
        .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialise app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.server.socket_addr();
    let request_timeout = config.server.request_timeout();

    info!(%addr, ?request_timeout, "starting server");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::shared(app)))
        .push(router::app_router(request_timeout));

    let service = Service::new(router).catcher(Catcher::default().hoop(render_status_errors));

    let server = Server::new(listener);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, request_timeout).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;
}
