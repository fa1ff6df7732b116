//! Shared handler state.

use std::{fmt, sync::Arc};

use eniqilo_app::context::AppContext;

/// Services shared by every request, injected with `affix_state`.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
