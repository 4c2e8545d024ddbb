use axum::routing::get;
use axum::Router;

pub mod accounts;
pub mod dda;

use crate::ServiceState;

pub const ACCOUNTS_PATH: &str = "/accounts";
pub const DDA_ACCOUNTS_PATH: &str = "/accounts/dda";

/// Account routes for whichever route sets the state enables.
pub fn router(state: ServiceState) -> Router<ServiceState> {
    let route_set = state.route_set();
    let mut router = Router::new();

    if route_set.serves_rich() {
        router = router.route(ACCOUNTS_PATH, get(accounts::handler));
    }
    if route_set.serves_dda() {
        router = router.route(DDA_ACCOUNTS_PATH, get(dda::handler));
    }

    router.with_state(state)
}
