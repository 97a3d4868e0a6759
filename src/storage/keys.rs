use redb::TableDefinition;

/// The single key-value table backing the catalog: storage key -> JSON string
pub const LIBRARY: TableDefinition<&str, &str> = TableDefinition::new("library");

/// Full book list snapshot, stored as a JSON array of Book records.
pub const BOOKS_KEY: &str = "libraryBooks";

/// Admin session flag, stored as the literal "true" or "false".
pub const AUTH_KEY: &str = "libraryAuth";
