use common::prelude::*;

use super::config::{Config, RouteSet};

#[derive(Debug, Clone)]
pub struct State {
    tables: AccountTables,
    route_set: RouteSet,
}

impl State {
    pub fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        let tables = AccountTables::new()?;
        Ok(Self::new(tables, config.route_set))
    }

    pub fn new(tables: AccountTables, route_set: RouteSet) -> Self {
        tracing::debug!(
            records = tables.record_count(),
            account_types = tables.account_types().len(),
            %route_set,
            "account tables loaded"
        );
        Self { tables, route_set }
    }

    pub fn tables(&self) -> &AccountTables {
        &self.tables
    }

    pub fn route_set(&self) -> RouteSet {
        self.route_set
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("invalid account tables: {0}")]
    Tables(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    static TWO_NAMES: [&str; 2] = ["Acme", "Initech"];

    #[test]
    fn test_from_config() {
        let config = Config {
            route_set: RouteSet::Rich,
            ..Config::default()
        };
        let state = State::from_config(&config).unwrap();
        assert_eq!(state.route_set(), RouteSet::Rich);
        assert_eq!(state.tables().record_count(), RECORD_COUNT);
    }

    #[test]
    fn test_mismatched_tables_fail_setup() {
        let err = AccountTables::from_parts(&TWO_NAMES, &ACCOUNT_TYPES, RECORD_COUNT)
            .map_err(StateSetupError::from)
            .unwrap_err();
        assert!(err.to_string().contains("2 entries"));
    }
}
