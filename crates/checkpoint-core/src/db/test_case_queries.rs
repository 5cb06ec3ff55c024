//! Test case CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::utils::{enum_column, id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{NewTestCase, TestCase, TestCaseStatus, UpdateTestCaseRequest},
};

const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const INSERT_TEST_CASE_SQL: &str = "INSERT INTO test_cases (plan_id, name, description, validation_type, priority, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TEST_CASE_BY_ID_SQL: &str = "SELECT id, plan_id, name, description, validation_type, priority, status, created_at, updated_at FROM test_cases WHERE id = ?1";
const SELECT_TEST_CASES_BY_PLAN_SQL: &str = "SELECT id, plan_id, name, description, validation_type, priority, status, created_at, updated_at FROM test_cases WHERE plan_id = ?1 ORDER BY id";
const UPDATE_TEST_CASE_SQL: &str = "UPDATE test_cases SET name = ?1, description = ?2, validation_type = ?3, priority = ?4, status = ?5, updated_at = ?6 WHERE id = ?7";
const DELETE_TEST_CASE_SQL: &str = "DELETE FROM test_cases WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a TestCase from a database row
    fn build_test_case_from_row(row: &rusqlite::Row) -> rusqlite::Result<TestCase> {
        Ok(TestCase {
            id: id_column(row, 0)?,
            plan_id: id_column(row, 1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            validation_type: row.get(4)?,
            priority: enum_column(row, 5)?,
            status: enum_column(row, 6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
        })
    }

    /// Inserts a pending test case on an open connection or transaction.
    pub(super) fn insert_test_case(
        conn: &Connection,
        plan_id: u64,
        test_case: &NewTestCase,
        now: Timestamp,
    ) -> Result<TestCase> {
        let now_str = now.to_string();
        conn.execute(
            INSERT_TEST_CASE_SQL,
            params![
                plan_id as i64,
                &test_case.name,
                test_case.description.as_deref(),
                test_case.validation_type.as_deref(),
                test_case.priority.as_str(),
                TestCaseStatus::Pending.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert test case")?;

        Ok(TestCase {
            id: conn.last_insert_rowid() as u64,
            plan_id,
            name: test_case.name.clone(),
            description: test_case.description.clone(),
            validation_type: test_case.validation_type.clone(),
            priority: test_case.priority,
            status: TestCaseStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    fn find_test_case(conn: &Connection, id: u64) -> Result<Option<TestCase>> {
        conn.query_row(
            SELECT_TEST_CASE_BY_ID_SQL,
            params![id as i64],
            Self::build_test_case_from_row,
        )
        .optional()
        .db_context("Failed to query test case")
    }

    pub(super) fn find_test_cases(conn: &Connection, plan_id: u64) -> Result<Vec<TestCase>> {
        let mut stmt = conn
            .prepare(SELECT_TEST_CASES_BY_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let test_cases = stmt
            .query_map(params![plan_id as i64], Self::build_test_case_from_row)
            .db_context("Failed to query test cases")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read test case")?;
        Ok(test_cases)
    }

    /// Adds a new pending test case to the specified plan.
    pub fn create_test_case(&mut self, plan_id: u64, test_case: &NewTestCase) -> Result<TestCase> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let plan_exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check plan existence")?;

        if !plan_exists {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }

        let created = Self::insert_test_case(&tx, plan_id, test_case, Timestamp::now())?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(created)
    }

    /// Retrieves a single test case by its ID.
    pub fn get_test_case(&self, id: u64) -> Result<Option<TestCase>> {
        Self::find_test_case(&self.connection, id)
    }

    /// Retrieves all test cases of a plan, oldest first.
    pub fn get_test_cases(&self, plan_id: u64) -> Result<Vec<TestCase>> {
        Self::find_test_cases(&self.connection, plan_id)
    }

    /// Applies a partial update to a test case.
    ///
    /// Returns the test case as it was before the update together with the
    /// updated test case, so callers can tell whether the status changed.
    pub fn update_test_case(
        &mut self,
        id: u64,
        request: &UpdateTestCaseRequest,
    ) -> Result<(TestCase, TestCase)> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let previous =
            Self::find_test_case(&tx, id)?.ok_or(PlannerError::TestCaseNotFound { id })?;

        let mut updated = previous.clone();
        if let Some(name) = &request.name {
            updated.name = name.clone();
        }
        if let Some(description) = &request.description {
            updated.description = description.clone();
        }
        if let Some(validation_type) = &request.validation_type {
            updated.validation_type = validation_type.clone();
        }
        if let Some(priority) = request.priority {
            updated.priority = priority;
        }
        if let Some(status) = request.status {
            updated.status = status;
        }
        updated.updated_at = Timestamp::now();

        tx.execute(
            UPDATE_TEST_CASE_SQL,
            params![
                &updated.name,
                updated.description.as_deref(),
                updated.validation_type.as_deref(),
                updated.priority.as_str(),
                updated.status.as_str(),
                updated.updated_at.to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update test case")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok((previous, updated))
    }

    /// Changes only the status of a test case. Returns the previous and the
    /// updated test case.
    pub fn update_test_case_status(
        &mut self,
        id: u64,
        status: TestCaseStatus,
    ) -> Result<(TestCase, TestCase)> {
        self.update_test_case(id, &UpdateTestCaseRequest::status(status))
    }

    /// Deletes a test case and returns it.
    pub fn delete_test_case(&mut self, id: u64) -> Result<TestCase> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let deleted =
            Self::find_test_case(&tx, id)?.ok_or(PlannerError::TestCaseNotFound { id })?;

        tx.execute(DELETE_TEST_CASE_SQL, params![id as i64])
            .db_context("Failed to delete test case")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(deleted)
    }
}
