//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use super::utils::{enum_column, id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{
        ClearSummary, NewTestCase, Plan, PlanStatus, PlanSummary, TestCaseStatus,
        UpdatePlanRequest,
    },
    progress::{PlanStats, StatusCounts},
};

const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (name, description, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PLAN_SQL: &str =
    "SELECT id, name, description, status, created_at, updated_at FROM plans WHERE id = ?1";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const UPDATE_PLAN_SQL: &str =
    "UPDATE plans SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4";
const DELETE_PLAN_TEST_CASES_SQL: &str = "DELETE FROM test_cases WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";
const DELETE_ALL_TEST_CASES_SQL: &str = "DELETE FROM test_cases";
const DELETE_ALL_PLANS_SQL: &str = "DELETE FROM plans";
const COUNT_STATUSES_SQL: &str =
    "SELECT status, COUNT(*) FROM test_cases WHERE plan_id = ?1 GROUP BY status";
const LIST_PLAN_SUMMARIES_SQL: &str = "\
    SELECT p.id, p.name, p.description, p.status, p.created_at, p.updated_at, \
           COALESCE(SUM(t.status = 'PENDING'), 0), \
           COALESCE(SUM(t.status = 'PASSED'), 0), \
           COALESCE(SUM(t.status = 'FAILED'), 0), \
           COALESCE(SUM(t.status = 'NA'), 0) \
    FROM plans p LEFT JOIN test_cases t ON t.plan_id = p.id \
    GROUP BY p.id \
    ORDER BY p.id DESC";

impl super::Database {
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        Ok(Plan {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            status: enum_column(row, 3)?,
            created_at: timestamp_column(row, 4)?,
            updated_at: timestamp_column(row, 5)?,
            test_cases: Vec::new(),
        })
    }

    /// Creates a new pending plan together with its initial test cases in a
    /// single transaction.
    pub fn create_plan(
        &mut self,
        name: &str,
        description: Option<&str>,
        test_cases: &[NewTestCase],
    ) -> Result<Plan> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                name,
                description,
                PlanStatus::Pending.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        let test_cases = test_cases
            .iter()
            .map(|test_case| Self::insert_test_case(&tx, id, test_case, now))
            .collect::<Result<Vec<_>>>()?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            name: name.into(),
            description: description.map(String::from),
            status: PlanStatus::Pending,
            created_at: now,
            updated_at: now,
            test_cases,
        })
    }

    /// Retrieves a plan by its ID with its test cases loaded.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut plan = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        if let Some(ref mut plan) = plan {
            plan.test_cases = self.get_test_cases(plan.id)?;
        }

        Ok(plan)
    }

    /// Whether a plan with the given ID exists.
    pub fn plan_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }

    /// Lists every plan with its progress, newest first.
    pub fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PLAN_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                let plan = Self::build_plan_from_row(row)?;
                let counts = StatusCounts {
                    pending: row.get(6)?,
                    passed: row.get(7)?,
                    failed: row.get(8)?,
                    na: row.get(9)?,
                };
                Ok(PlanSummary {
                    id: plan.id,
                    name: plan.name,
                    description: plan.description,
                    status: plan.status,
                    created_at: plan.created_at,
                    updated_at: plan.updated_at,
                    progress: counts.progress(),
                })
            })
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan")?;

        Ok(summaries)
    }

    /// Updates a plan's name and/or description. The status is not
    /// user-editable.
    pub fn update_plan(&mut self, id: u64, request: &UpdatePlanRequest) -> Result<Plan> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_PLAN_SQL, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")?
            .ok_or(PlannerError::PlanNotFound { id })?;

        let name = request.name.as_deref().unwrap_or(&current.name);
        let description = match &request.description {
            Some(description) => description.as_deref(),
            None => current.description.as_deref(),
        };

        tx.execute(
            UPDATE_PLAN_SQL,
            params![name, description, Timestamp::now().to_string(), id as i64],
        )
        .db_context("Failed to update plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id })
    }

    /// Deletes a plan and all of its test cases.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_PLAN_TEST_CASES_SQL, params![id as i64])
            .db_context("Failed to delete plan test cases")?;

        let deleted = tx
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        if deleted == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Deletes every plan and test case in one transaction.
    pub fn clear_all(&mut self) -> Result<ClearSummary> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let test_cases = tx
            .execute(DELETE_ALL_TEST_CASES_SQL, [])
            .db_context("Failed to delete test cases")?;
        let plans = tx
            .execute(DELETE_ALL_PLANS_SQL, [])
            .db_context("Failed to delete plans")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ClearSummary {
            plans: plans as u64,
            test_cases: test_cases as u64,
        })
    }

    /// Per-status counts and progress of a plan. An unknown plan has no test
    /// cases and therefore all-zero statistics.
    pub fn plan_stats(&self, plan_id: u64) -> Result<PlanStats> {
        let mut stmt = self
            .connection
            .prepare(COUNT_STATUSES_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![plan_id as i64], |row| {
                Ok((enum_column::<TestCaseStatus>(row, 0)?, row.get::<_, u32>(1)?))
            })
            .db_context("Failed to count test cases")?;

        let mut counts = StatusCounts::default();
        for row in rows {
            let (status, count) = row.db_context("Failed to read status count")?;
            match status {
                TestCaseStatus::Pending => counts.pending = count,
                TestCaseStatus::Passed => counts.passed = count,
                TestCaseStatus::Failed => counts.failed = count,
                TestCaseStatus::Na => counts.na = count,
            }
        }

        Ok(PlanStats::new(plan_id, counts))
    }
}
