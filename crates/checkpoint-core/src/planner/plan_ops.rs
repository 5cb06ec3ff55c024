//! Plan operations for the Planner.

use super::{settle, Planner};
use crate::{
    display::PlanSummaries,
    error::{PlannerError, Result},
    models::{ClearSummary, Plan},
    params::{CreatePlan, DeletePlan, Id, UpdatePlan},
    progress::{PlanStats, Progress},
    propagator::{Propagation, Trigger},
};

impl Planner {
    /// Creates a new plan, together with any initial test cases.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        let (name, description, test_cases) = params.validate()?;

        self.with_db(move |db| {
            let mut plan = db.create_plan(&name, description.as_deref(), &test_cases)?;
            if !plan.test_cases.is_empty() {
                let outcome = db.propagate(plan.id, Trigger::PlanCreated);
                if let Some(status) = outcome.as_ref().ok().and_then(Propagation::status) {
                    plan.status = status;
                }
                settle(plan.id, outcome);
            }
            Ok(plan)
        })
        .await
    }

    /// Lists all plans with their progress, newest first.
    pub async fn list_plans(&self) -> Result<PlanSummaries> {
        let summaries = self.with_db(|db| db.list_plans()).await?;
        Ok(PlanSummaries(summaries))
    }

    /// Retrieves a plan with its test cases.
    pub async fn get_plan(&self, params: &Id) -> Result<Plan> {
        let id = params.id;
        self.with_db(move |db| db.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id }))
            .await
    }

    /// Updates a plan's name and/or description.
    pub async fn update_plan(&self, params: &UpdatePlan) -> Result<Plan> {
        let request = params.validate()?;
        let id = params.id;
        self.with_db(move |db| db.update_plan(id, &request)).await
    }

    /// Deletes a plan with all of its test cases and returns what was
    /// deleted.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Plan> {
        let id = params.validate()?;
        self.with_db(move |db| {
            let plan = db.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id })?;
            db.delete_plan(id)?;
            Ok(plan)
        })
        .await
    }

    /// Current progress of a plan.
    pub async fn plan_progress(&self, params: &Id) -> Result<Progress> {
        let id = params.id;
        self.with_db(move |db| db.get_plan_progress(id)).await
    }

    /// Per-status test case counts of a plan. Unknown plans report zeros.
    pub async fn plan_stats(&self, params: &Id) -> Result<PlanStats> {
        let id = params.id;
        self.with_db(move |db| db.plan_stats(id)).await
    }

    /// Removes every plan and test case.
    pub async fn clear_all(&self) -> Result<ClearSummary> {
        let cleared = self.with_db(|db| db.clear_all()).await?;
        log::info!("{cleared}");
        Ok(cleared)
    }
}
