use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tables::AccountTables;

/// Type assigned to every DDA account.
pub const DDA_ACCOUNT_TYPE: &str = "dda";

/// Identifier of a generated account.
///
/// Serialized untagged: rich accounts carry a uuid string,
///  DDA accounts a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountId {
    Uuid(Uuid),
    Index(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub nickname: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl AccountTables {
    /// Build one rich account per company name, in table order.
    ///
    /// Each record gets a fresh v4 uuid and an account type drawn
    ///  uniformly from the type table, independently of every other
    ///  record.
    pub fn rich_accounts<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<AccountRecord> {
        let account_types = self.account_types();
        self.company_names()
            .iter()
            .take(self.record_count())
            .map(|name| AccountRecord {
                id: AccountId::Uuid(Uuid::new_v4()),
                nickname: (*name).to_string(),
                // non-empty, checked when the tables were built
                account_type: account_types[rng.gen_range(0..account_types.len())].to_string(),
            })
            .collect()
    }
}

/// Build `count` DDA accounts with ids `0..count`.
pub fn dda_accounts(count: usize) -> Vec<AccountRecord> {
    (0..count as u64)
        .map(|id| AccountRecord {
            id: AccountId::Index(id),
            nickname: format!("Nickname {}", id),
            account_type: DDA_ACCOUNT_TYPE.to_string(),
        })
        .collect()
}
