use axum::extract::Json;
use tracing::instrument;

use common::prelude::{dda_accounts, AccountRecord, RECORD_COUNT};

#[instrument]
pub async fn handler() -> Json<Vec<AccountRecord>> {
    let accounts = dda_accounts(RECORD_COUNT);
    tracing::debug!(count = accounts.len(), "generated dda accounts");
    Json(accounts)
}
