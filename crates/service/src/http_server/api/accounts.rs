use axum::extract::{Json, State};
use tracing::instrument;

use common::prelude::AccountRecord;

use crate::ServiceState;

/// A fresh batch of rich accounts: new uuids and re-drawn
///  account types on every call.
#[instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> Json<Vec<AccountRecord>> {
    let accounts = state.tables().rich_accounts(&mut rand::thread_rng());
    tracing::debug!(count = accounts.len(), "generated rich accounts");
    Json(accounts)
}
