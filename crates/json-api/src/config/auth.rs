//! Auth Config

use std::time::Duration;

use clap::Args;

use eniqilo_app::auth::TokenSigner;

const SECONDS_PER_HOUR: u64 = 60 * 60;

/// Access token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign staff access tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Access token lifetime in hours
    #[arg(long, env = "ACCESS_TOKEN_TTL_HOURS", default_value_t = 8)]
    pub access_token_ttl_hours: u64,
}

impl AuthConfig {
    /// Signer for staff access tokens.
    #[must_use]
    pub fn token_signer(&self) -> TokenSigner {
        let lifetime =
            Duration::from_secs(self.access_token_ttl_hours.saturating_mul(SECONDS_PER_HOUR));

        TokenSigner::new(self.jwt_secret.as_bytes(), lifetime)
    }
}
