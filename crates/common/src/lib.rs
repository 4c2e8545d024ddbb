/**
 * Account records and the generators that build
 *  them from the fixture tables.
 *  - Rich accounts (uuid ids, company names, random types)
 *  - DDA accounts (sequential ids, templated nicknames)
 */
mod account;
/**
 * Static fixture data. Read-only for the life
 *  of the process.
 */
mod tables;
/**
 * Helper for reporting build version information.
 */
pub mod version;

pub mod prelude {
    pub use crate::account::{dda_accounts, AccountId, AccountRecord, DDA_ACCOUNT_TYPE};
    pub use crate::tables::{
        AccountTables, TableError, ACCOUNT_TYPES, COMPANY_NAMES, RECORD_COUNT,
    };
    pub use crate::version::{build_info, BuildInfo};
}
