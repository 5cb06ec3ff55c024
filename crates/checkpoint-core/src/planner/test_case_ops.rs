//! Test case operations for the Planner.
//!
//! Every mutation here is followed by a propagation to the owning plan.

use super::{settle, Planner};
use crate::{
    display::TestCases,
    error::{PlannerError, Result},
    models::TestCase,
    params::{CreateTestCase, Id, UpdateTestCase, UpdateTestCaseStatus},
};

impl Planner {
    /// Adds a pending test case to a plan.
    pub async fn add_test_case(&self, params: &CreateTestCase) -> Result<TestCase> {
        let new_case = params.validate()?;
        let plan_id = params.plan_id;

        self.with_db(move |db| {
            let created = db.create_test_case(plan_id, &new_case)?;
            settle(plan_id, db.on_test_case_created(&created));
            Ok(created)
        })
        .await
    }

    /// Lists the test cases of a plan, oldest first.
    pub async fn list_test_cases(&self, params: &Id) -> Result<TestCases> {
        let plan_id = params.id;
        let test_cases = self
            .with_db(move |db| {
                if !db.plan_exists(plan_id)? {
                    return Err(PlannerError::PlanNotFound { id: plan_id });
                }
                db.get_test_cases(plan_id)
            })
            .await?;
        Ok(TestCases(test_cases))
    }

    /// Retrieves a single test case.
    pub async fn get_test_case(&self, params: &Id) -> Result<TestCase> {
        let id = params.id;
        self.with_db(move |db| {
            db.get_test_case(id)?
                .ok_or(PlannerError::TestCaseNotFound { id })
        })
        .await
    }

    /// Applies a partial update to a test case. Returns the test case before
    /// and after the update.
    pub async fn update_test_case(&self, params: &UpdateTestCase) -> Result<(TestCase, TestCase)> {
        let request = params.validate()?;
        let id = params.id;

        self.with_db(move |db| {
            let (previous, updated) = db.update_test_case(id, &request)?;
            let outcome =
                db.on_test_case_status_changed(&updated, previous.status, updated.status);
            settle(updated.plan_id, outcome);
            Ok((previous, updated))
        })
        .await
    }

    /// Changes only the status of a test case. Returns the test case before
    /// and after the change.
    pub async fn update_test_case_status(
        &self,
        params: &UpdateTestCaseStatus,
    ) -> Result<(TestCase, TestCase)> {
        let status = params.validate()?;
        let id = params.id;

        self.with_db(move |db| {
            let (previous, updated) = db.update_test_case_status(id, status)?;
            let outcome =
                db.on_test_case_status_changed(&updated, previous.status, updated.status);
            settle(updated.plan_id, outcome);
            Ok((previous, updated))
        })
        .await
    }

    /// Deletes a test case and returns it.
    pub async fn delete_test_case(&self, params: &Id) -> Result<TestCase> {
        let id = params.id;
        self.with_db(move |db| {
            let deleted = db.delete_test_case(id)?;
            settle(deleted.plan_id, db.on_test_case_deleted(deleted.plan_id));
            Ok(deleted)
        })
        .await
    }
}
