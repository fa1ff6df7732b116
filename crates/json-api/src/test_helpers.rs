//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use eniqilo_app::{
    auth::{MockAuthService, StaffIdentity, StaffUuid},
    context::AppContext,
    domain::{
        checkouts::MockCheckoutsService, customers::MockCustomersService,
        products::MockProductsService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_STAFF_UUID: StaffUuid = StaffUuid::from_uuid(Uuid::nil());

pub(crate) fn test_staff() -> StaffIdentity {
    StaffIdentity {
        uuid: TEST_STAFF_UUID,
        phone_number: "+628000000000".to_string(),
    }
}

#[salvo::handler]
pub(crate) async fn inject_staff(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_staff(test_staff());
    ctrl.call_next(req, depot, res).await;
}

/// Mock services; any call without a matching expectation fails the test.
#[derive(Default)]
pub(crate) struct TestServices {
    pub auth: MockAuthService,
    pub products: MockProductsService,
    pub customers: MockCustomersService,
    pub checkouts: MockCheckoutsService,
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::shared(AppContext {
            auth: Arc::new(self.auth),
            products: Arc::new(self.products),
            customers: Arc::new(self.customers),
            checkouts: Arc::new(self.checkouts),
        })
    }

    /// Serve `route` as an authenticated staff member.
    pub(crate) fn authenticated(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_staff)
                .push(route),
        )
    }

    /// Serve `route` without any caller identity.
    pub(crate) fn public(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

pub(crate) fn products(products: MockProductsService) -> TestServices {
    TestServices {
        products,
        ..TestServices::default()
    }
}

pub(crate) fn customers(customers: MockCustomersService) -> TestServices {
    TestServices {
        customers,
        ..TestServices::default()
    }
}

pub(crate) fn checkouts(checkouts: MockCheckoutsService) -> TestServices {
    TestServices {
        checkouts,
        ..TestServices::default()
    }
}

pub(crate) fn auth(auth: MockAuthService) -> TestServices {
    TestServices {
        auth,
        ..TestServices::default()
    }
}
