//! Plan progress queries and status propagation.
//!
//! Propagation always runs on the connection that performed the test case
//! mutation, after that mutation committed, in its own immediate
//! transaction. SQLite allows one writer at a time, so two propagations for
//! the same plan can never interleave their read and write, and the last one
//! to commit saw every mutation committed before it.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{PlanStatus, TestCase, TestCaseStatus},
    progress::{compute_progress, Progress},
    propagator::{self, ProgressStore, Propagation, Trigger},
};

const SELECT_PLAN_STATUS_SQL: &str = "SELECT status FROM plans WHERE id = ?1";
const SELECT_TEST_CASE_STATUSES_SQL: &str = "SELECT status FROM test_cases WHERE plan_id = ?1";
const UPDATE_PLAN_STATUS_SQL: &str = "UPDATE plans SET status = ?1, updated_at = ?2 WHERE id = ?3";

impl ProgressStore for Connection {
    fn plan_status(&self, plan_id: u64) -> Result<Option<PlanStatus>> {
        let raw: Option<String> = self
            .query_row(SELECT_PLAN_STATUS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to query plan status")?;

        raw.map(|raw| {
            raw.parse::<PlanStatus>()
                .map_err(|reason| PlannerError::invalid_input("status").with_reason(reason))
        })
        .transpose()
    }

    fn test_case_statuses(&self, plan_id: u64) -> Result<Vec<TestCaseStatus>> {
        let mut stmt = self
            .prepare(SELECT_TEST_CASE_STATUSES_SQL)
            .db_context("Failed to prepare query")?;

        let raw = stmt
            .query_map(params![plan_id as i64], |row| row.get::<_, String>(0))
            .db_context("Failed to query test case statuses")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read test case status")?;

        raw.iter()
            .map(|status| {
                status
                    .parse::<TestCaseStatus>()
                    .map_err(|reason| PlannerError::invalid_input("status").with_reason(reason))
            })
            .collect()
    }

    fn set_plan_status(&self, plan_id: u64, status: PlanStatus) -> Result<()> {
        self.execute(
            UPDATE_PLAN_STATUS_SQL,
            params![status.as_str(), Timestamp::now().to_string(), plan_id as i64],
        )
        .db_context("Failed to update plan status")?;
        Ok(())
    }
}

impl super::Database {
    /// Recompute the stored status of a plan in an immediate transaction.
    pub fn propagate(&mut self, plan_id: u64, trigger: Trigger) -> Result<Propagation> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let outcome = propagator::propagate(&*tx, plan_id, trigger)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(outcome)
    }

    /// Propagate after `test_case` was added to its plan.
    pub fn on_test_case_created(&mut self, test_case: &TestCase) -> Result<Propagation> {
        self.propagate(
            test_case.plan_id,
            Trigger::Created {
                test_case_id: test_case.id,
            },
        )
    }

    /// Propagate after `test_case` was updated from status `from` to `to`.
    pub fn on_test_case_status_changed(
        &mut self,
        test_case: &TestCase,
        from: TestCaseStatus,
        to: TestCaseStatus,
    ) -> Result<Propagation> {
        self.propagate(
            test_case.plan_id,
            Trigger::StatusChanged {
                test_case_id: test_case.id,
                from,
                to,
            },
        )
    }

    /// Propagate after a test case of `plan_id` was removed.
    pub fn on_test_case_deleted(&mut self, plan_id: u64) -> Result<Propagation> {
        self.propagate(plan_id, Trigger::Deleted)
    }

    /// Current progress of a plan, computed from its test cases.
    pub fn get_plan_progress(&self, plan_id: u64) -> Result<Progress> {
        if self.connection.plan_status(plan_id)?.is_none() {
            return Err(PlannerError::PlanNotFound { id: plan_id });
        }
        let statuses = self.connection.test_case_statuses(plan_id)?;
        Ok(compute_progress(&statuses))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use super::*;
    use crate::{db::Database, models::NewTestCase};

    fn create_test_db() -> (Database, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db = Database::new(temp_file.path()).unwrap();
        (db, temp_file)
    }

    #[test]
    fn test_connection_store_reads_and_writes() {
        let (mut db, _temp_file) = create_test_db();
        let plan = db
            .create_plan("Plan", None, &[NewTestCase::named("a"), NewTestCase::named("b")])
            .unwrap();

        let store: &Connection = &db.connection;
        assert_eq!(store.plan_status(plan.id).unwrap(), Some(PlanStatus::Pending));
        assert_eq!(
            store.test_case_statuses(plan.id).unwrap(),
            [TestCaseStatus::Pending, TestCaseStatus::Pending]
        );
        assert_eq!(store.plan_status(plan.id + 1).unwrap(), None);

        store.set_plan_status(plan.id, PlanStatus::Completed).unwrap();
        assert_eq!(store.plan_status(plan.id).unwrap(), Some(PlanStatus::Completed));
    }

    #[test]
    fn test_propagate_runs_in_its_own_transaction() {
        let (mut db, _temp_file) = create_test_db();
        let plan = db.create_plan("Plan", None, &[NewTestCase::named("a")]).unwrap();
        let case = &plan.test_cases[0];

        db.update_test_case_status(case.id, TestCaseStatus::Passed)
            .unwrap();
        let outcome = db
            .on_test_case_status_changed(case, TestCaseStatus::Pending, TestCaseStatus::Passed)
            .unwrap();
        assert_eq!(outcome.status(), Some(PlanStatus::Completed));
        assert!(db.connection.is_autocommit());

        let again = db.on_test_case_deleted(plan.id).unwrap();
        assert!(!again.wrote());
    }

    #[test]
    fn test_plan_progress_for_missing_plan() {
        let (db, _temp_file) = create_test_db();
        let err = db.get_plan_progress(99).unwrap_err();
        assert!(matches!(err, PlannerError::PlanNotFound { id: 99 }));
    }

    #[test]
    fn test_corrupt_status_is_rejected() {
        let (mut db, _temp_file) = create_test_db();
        let plan = db.create_plan("Plan", None, &[]).unwrap();
        // bypass the CHECK constraint to simulate a foreign writer
        db.connection
            .execute_batch("PRAGMA ignore_check_constraints = ON")
            .unwrap();
        db.connection
            .execute(
                "UPDATE plans SET status = 'ARCHIVED' WHERE id = ?1",
                params![plan.id as i64],
            )
            .unwrap();

        let err = db.on_test_case_deleted(plan.id).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { .. }));
    }
}
