//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

const HAS_TEST_CASE_COLUMN_SQL: &str =
    "SELECT COUNT(*) FROM pragma_table_info('test_cases') WHERE name = ?1";

/// Columns added to `test_cases` after the first release, with their
/// definitions.
const TEST_CASE_COLUMN_MIGRATIONS: [(&str, &str); 2] = [
    (
        "validation_type",
        "ALTER TABLE test_cases ADD COLUMN validation_type TEXT",
    ),
    (
        "priority",
        "ALTER TABLE test_cases ADD COLUMN priority TEXT NOT NULL DEFAULT 'P2' \
         CHECK (priority IN ('P1', 'P2', 'P3'))",
    ),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Bring databases created by earlier versions up to date.
    fn apply_migrations(&self) -> Result<()> {
        for (column, ddl) in TEST_CASE_COLUMN_MIGRATIONS {
            let count: i64 = self
                .connection
                .query_row(HAS_TEST_CASE_COLUMN_SQL, [column], |row| row.get(0))
                .db_context("Failed to inspect test_cases table")?;

            if count == 0 {
                log::info!("Adding column test_cases.{column}");
                self.connection
                    .execute(ddl, [])
                    .db_context("Failed to migrate test_cases table")?;
            }
        }
        Ok(())
    }
}
