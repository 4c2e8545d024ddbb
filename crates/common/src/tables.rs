/// Number of records returned by every accounts endpoint.
pub const RECORD_COUNT: usize = 100;

/// Company names handed out as nicknames for rich accounts, by position.
pub const COMPANY_NAMES: [&str; RECORD_COUNT] = [
    "Nec Inc.",
    "Tortor At Associates",
    "Duis Sit LLP",
    "Est Associates",
    "Arcu PC",
    "Dictum Eu Inc.",
    "Suspendisse Company",
    "Dolor LLC",
    "Consequat Lectus Sit Associates",
    "Lorem Fringilla LLC",
    "Mi Lacinia Mattis Industries",
    "Tristique Aliquet Phasellus Ltd",
    "Nec Consulting",
    "Sit LLP",
    "Cras Pellentesque Corporation",
    "Nulla Associates",
    "Aliquam Erat Institute",
    "In Molestie Corporation",
    "Ut Nec Associates",
    "Lectus Ante Dictum Inc.",
    "Feugiat Tellus Inc.",
    "Duis At Lacus Inc.",
    "Hendrerit A PC",
    "Malesuada Integer Incorporated",
    "Penatibus Limited",
    "Leo Limited",
    "Amet Luctus Incorporated",
    "Nulla Cras Eu Consulting",
    "Massa Inc.",
    "Aliquet Diam Corp.",
    "Felis Purus Ac LLP",
    "Scelerisque Neque Sed Corp.",
    "Nec Company",
    "Sed Tortor Integer Corp.",
    "Eu Eros Nam PC",
    "Amet Massa Consulting",
    "Urna Vivamus Inc.",
    "Dui Corporation",
    "Eget LLC",
    "Vel Quam Dignissim Corp.",
    "Ut Sagittis Lobortis Consulting",
    "Lobortis Quis Pede Corporation",
    "Nulla Magna Company",
    "Lorem Company",
    "Ullamcorper Viverra PC",
    "Pede Praesent Incorporated",
    "Euismod Incorporated",
    "Cras Sed Leo Associates",
    "Nonummy PC",
    "Ornare Foundation",
    "Duis Ac Arcu Industries",
    "Vel Mauris Integer Inc.",
    "Senectus Et Associates",
    "Gravida Aliquam Company",
    "Pellentesque Ultricies Dignissim Corp.",
    "Vel Corp.",
    "Nascetur Ridiculus Institute",
    "Mi Lacinia Inc.",
    "Ligula Elit Pretium Incorporated",
    "Nullam Suscipit Est Industries",
    "Luctus Sit Amet Corporation",
    "Sem Elit Foundation",
    "Nullam Incorporated",
    "Imperdiet Limited",
    "Suscipit Nonummy Fusce PC",
    "Felis Eget Company",
    "Ligula Associates",
    "Diam Pellentesque Habitant Incorporated",
    "Eget Magna Foundation",
    "Bibendum Sed Inc.",
    "Justo Praesent Luctus Industries",
    "Mauris Id Sapien PC",
    "Nibh Corporation",
    "Pellentesque Eget Corp.",
    "Lacus Cras Ltd",
    "Nisi Aenean LLC",
    "Libero LLP",
    "Tempus Lorem Fringilla LLP",
    "Gravida Praesent Eu Industries",
    "Aliquam Company",
    "Elit Pede Malesuada PC",
    "Mauris Aliquam Eu Ltd",
    "Sit Amet Luctus Ltd",
    "Morbi Tristique Senectus Consulting",
    "Arcu PC",
    "Lectus LLP",
    "Tincidunt Orci Quis LLP",
    "Turpis PC",
    "Ipsum Leo PC",
    "Eget PC",
    "Vel Mauris Foundation",
    "Dui In PC",
    "Sit Amet Lorem Corporation",
    "Vitae Risus Corporation",
    "Pede Praesent Consulting",
    "Egestas Aliquam Ltd",
    "Ac Risus Industries",
    "Eu Corp.",
    "Turpis Egestas LLP",
    "Ac Nulla Corporation",
];

/// Account types a rich account may be assigned.
pub const ACCOUNT_TYPES: [&str; 4] = ["Checking", "Savings", "Mutual Cow", "Bond... James Bond"];

/// Validated view over the fixture tables.
///
/// The name table is indexed by record position, so its length must equal
/// the number of records generated. Construction checks this once so the
/// generators never have to.
#[derive(Debug, Clone, Copy)]
pub struct AccountTables {
    company_names: &'static [&'static str],
    account_types: &'static [&'static str],
    record_count: usize,
}

impl AccountTables {
    /// The built-in tables, sized for [`RECORD_COUNT`] records.
    pub fn new() -> Result<Self, TableError> {
        Self::from_parts(&COMPANY_NAMES, &ACCOUNT_TYPES, RECORD_COUNT)
    }

    pub fn from_parts(
        company_names: &'static [&'static str],
        account_types: &'static [&'static str],
        record_count: usize,
    ) -> Result<Self, TableError> {
        if company_names.len() != record_count {
            return Err(TableError::LengthMismatch {
                names: company_names.len(),
                expected: record_count,
            });
        }
        if account_types.is_empty() {
            return Err(TableError::NoAccountTypes);
        }

        Ok(Self {
            company_names,
            account_types,
            record_count,
        })
    }

    pub fn company_names(&self) -> &'static [&'static str] {
        self.company_names
    }

    pub fn account_types(&self) -> &'static [&'static str] {
        self.account_types
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("company name table has {names} entries but {expected} records are generated")]
    LengthMismatch { names: usize, expected: usize },
    #[error("account type table is empty")]
    NoAccountTypes,
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHORT_NAMES: [&str; 2] = ["Acme", "Initech"];
    static NO_TYPES: [&str; 0] = [];

    #[test]
    fn test_default_tables_are_valid() {
        let tables = AccountTables::new().unwrap();
        assert_eq!(tables.record_count(), RECORD_COUNT);
        assert_eq!(tables.company_names().len(), RECORD_COUNT);
        assert_eq!(tables.account_types().len(), 4);
    }

    #[test]
    fn test_table_contents() {
        assert_eq!(COMPANY_NAMES[0], "Nec Inc.");
        assert_eq!(COMPANY_NAMES[RECORD_COUNT - 1], "Ac Nulla Corporation");
        assert_eq!(
            ACCOUNT_TYPES,
            ["Checking", "Savings", "Mutual Cow", "Bond... James Bond"]
        );
    }

    #[test]
    fn test_name_count_mismatch_rejected() {
        let err = AccountTables::from_parts(&SHORT_NAMES, &ACCOUNT_TYPES, 3).unwrap_err();
        assert_eq!(
            err,
            TableError::LengthMismatch {
                names: 2,
                expected: 3
            }
        );

        // too many names is just as wrong as too few
        let err = AccountTables::from_parts(&COMPANY_NAMES, &ACCOUNT_TYPES, 50).unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { names: 100, expected: 50 }));
    }

    #[test]
    fn test_empty_types_rejected() {
        let err = AccountTables::from_parts(&SHORT_NAMES, &NO_TYPES, 2).unwrap_err();
        assert_eq!(err, TableError::NoAccountTypes);
    }

    #[test]
    fn test_custom_tables() {
        let tables = AccountTables::from_parts(&SHORT_NAMES, &ACCOUNT_TYPES, 2).unwrap();
        assert_eq!(tables.record_count(), 2);
        assert_eq!(tables.company_names(), &SHORT_NAMES);
    }
}
