//! Subcommand definitions and their handlers.
//!
//! Each subcommand has a clap argument struct converted into the matching
//! core parameter type with `From`, so clap attributes never leak into
//! `checkpoint_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use anyhow::{Context, Result};
use checkpoint_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{
        CreatePlan, CreateTestCase, DeletePlan, Id, UpdatePlan, UpdateTestCase,
        UpdateTestCaseStatus,
    },
    Planner,
};
use clap::{Args, Subcommand};

use crate::renderer::TerminalRenderer;

/// Create a new plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    /// Optional description of the plan
    #[arg(short, long)]
    pub description: Option<String>,
    /// Test case to create with the plan; repeat for several
    #[arg(short = 'c', long = "case")]
    pub cases: Vec<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            description: val.description,
            test_cases: val.cases,
        }
    }
}

/// Identify a plan or test case
#[derive(Args)]
pub struct IdArgs {
    /// Unique identifier
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Identify a plan, optionally printing JSON
#[derive(Args)]
pub struct PlanQueryArgs {
    /// Unique identifier of the plan
    pub id: u64,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Rename a plan or change its description
#[derive(Args)]
pub struct UpdatePlanArgs {
    /// ID of the plan to update
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New description; pass an empty string to remove it
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<UpdatePlanArgs> for UpdatePlan {
    fn from(val: UpdatePlanArgs) -> Self {
        UpdatePlan {
            id: val.id,
            name: val.name,
            description: val.description,
        }
    }
}

/// Delete a plan and all of its test cases
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Delete every plan and test case
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans with their progress
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan with its test cases
    #[command(alias = "s")]
    Show(IdArgs),
    /// Rename a plan or change its description
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// Show the progress of a plan
    Progress(PlanQueryArgs),
    /// Show per-status test case counts of a plan
    Stats(PlanQueryArgs),
    /// Delete every plan and test case
    Clear(ClearArgs),
}

/// Add a test case to a plan
#[derive(Args)]
pub struct AddCaseArgs {
    /// ID of the plan to add the test case to
    pub plan_id: u64,
    /// Name of the test case
    pub name: String,
    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Kind of validation, e.g. manual or automated
    #[arg(short, long)]
    pub validation_type: Option<String>,
    /// Priority: P1, P2 (default) or P3
    #[arg(short, long)]
    pub priority: Option<String>,
}

impl From<AddCaseArgs> for CreateTestCase {
    fn from(val: AddCaseArgs) -> Self {
        CreateTestCase {
            plan_id: val.plan_id,
            name: val.name,
            description: val.description,
            validation_type: val.validation_type,
            priority: val.priority,
        }
    }
}

/// Update fields of a test case
#[derive(Args)]
pub struct UpdateCaseArgs {
    /// ID of the test case to update
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New description; pass an empty string to remove it
    #[arg(short, long)]
    pub description: Option<String>,
    /// New validation type; pass an empty string to remove it
    #[arg(short, long)]
    pub validation_type: Option<String>,
    /// New priority: P1, P2 or P3
    #[arg(short, long)]
    pub priority: Option<String>,
    /// New status: PENDING, PASSED, FAILED or NA
    #[arg(short, long)]
    pub status: Option<String>,
}

impl From<UpdateCaseArgs> for UpdateTestCase {
    fn from(val: UpdateCaseArgs) -> Self {
        UpdateTestCase {
            id: val.id,
            name: val.name,
            description: val.description,
            validation_type: val.validation_type,
            priority: val.priority,
            status: val.status,
        }
    }
}

/// Record the outcome of a test case
#[derive(Args)]
pub struct CaseStatusArgs {
    /// ID of the test case
    pub id: u64,
    /// New status: PENDING, PASSED, FAILED or NA
    pub status: String,
}

impl From<CaseStatusArgs> for UpdateTestCaseStatus {
    fn from(val: CaseStatusArgs) -> Self {
        UpdateTestCaseStatus {
            id: val.id,
            status: val.status,
        }
    }
}

#[derive(Subcommand)]
pub enum CaseCommands {
    /// Add a test case to a plan
    #[command(alias = "a")]
    Add(AddCaseArgs),
    /// List the test cases of a plan
    #[command(aliases = ["l", "ls"])]
    List(IdArgs),
    /// Show a single test case
    #[command(alias = "s")]
    Show(IdArgs),
    /// Update fields of a test case
    #[command(alias = "u")]
    Update(UpdateCaseArgs),
    /// Record the outcome of a test case
    #[command(alias = "st")]
    Status(CaseStatusArgs),
    /// Delete a test case
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

/// Runs commands against a planner and renders their output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self
                    .planner
                    .create_plan(&args.into())
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string());
            }
            PlanCommands::List => self.list_plans().await?,
            PlanCommands::Show(args) => {
                let plan = self.planner.get_plan(&args.into()).await?;
                self.renderer.render(&plan.to_string());
            }
            PlanCommands::Update(args) => {
                let plan = self
                    .planner
                    .update_plan(&args.into())
                    .await
                    .context("Failed to update plan")?;
                self.renderer.render(&UpdateResult::new(plan).to_string());
            }
            PlanCommands::Delete(args) => {
                let plan = self
                    .planner
                    .delete_plan(&args.into())
                    .await
                    .context("Failed to delete plan")?;
                self.renderer.render(&DeleteResult::new(plan).to_string());
            }
            PlanCommands::Progress(args) => {
                let progress = self.planner.plan_progress(&Id { id: args.id }).await?;
                if args.json {
                    self.renderer.render_json(&progress)?;
                } else {
                    self.renderer
                        .render(&format!("Plan {}: {progress}\n", args.id));
                }
            }
            PlanCommands::Stats(args) => {
                let stats = self.planner.plan_stats(&Id { id: args.id }).await?;
                if args.json {
                    self.renderer.render_json(&stats)?;
                } else {
                    self.renderer.render(&stats.to_string());
                }
            }
            PlanCommands::Clear(args) => {
                if !args.confirm {
                    self.renderer.render(
                        &OperationStatus::failure("Refusing to clear without --confirm")
                            .to_string(),
                    );
                    anyhow::bail!("Clearing all plans requires --confirm");
                }
                let cleared = self.planner.clear_all().await?;
                self.renderer
                    .render(&OperationStatus::success(cleared.to_string()).to_string());
            }
        }
        Ok(())
    }

    pub async fn handle_case_command(&self, command: CaseCommands) -> Result<()> {
        match command {
            CaseCommands::Add(args) => {
                let test_case = self
                    .planner
                    .add_test_case(&args.into())
                    .await
                    .context("Failed to add test case")?;
                self.renderer
                    .render(&CreateResult::new(test_case).to_string());
            }
            CaseCommands::List(args) => {
                let test_cases = self.planner.list_test_cases(&args.into()).await?;
                self.renderer.render(&test_cases.to_string());
            }
            CaseCommands::Show(args) => {
                let test_case = self.planner.get_test_case(&args.into()).await?;
                self.renderer.render(&test_case.to_string());
            }
            CaseCommands::Update(args) => {
                let (previous, updated) = self
                    .planner
                    .update_test_case(&args.into())
                    .await
                    .context("Failed to update test case")?;
                self.renderer
                    .render(&UpdateResult::between(&previous, updated).to_string());
            }
            CaseCommands::Status(args) => {
                let (previous, updated) = self
                    .planner
                    .update_test_case_status(&args.into())
                    .await
                    .context("Failed to update test case status")?;
                self.renderer
                    .render(&UpdateResult::between(&previous, updated).to_string());
            }
            CaseCommands::Delete(args) => {
                let test_case = self
                    .planner
                    .delete_test_case(&args.into())
                    .await
                    .context("Failed to delete test case")?;
                self.renderer
                    .render(&DeleteResult::new(test_case).to_string());
            }
        }
        Ok(())
    }

    pub async fn list_plans(&self) -> Result<()> {
        let plans = self.planner.list_plans().await?;
        self.renderer.render(&plans.to_string());
        Ok(())
    }
}
