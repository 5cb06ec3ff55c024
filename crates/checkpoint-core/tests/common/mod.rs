use std::path::PathBuf;

use checkpoint_core::{params::CreatePlan, Plan, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner, db_path)
}

/// Create a plan seeded with pending test cases named `cases`.
pub async fn create_plan_with_cases(planner: &Planner, name: &str, cases: &[&str]) -> Plan {
    planner
        .create_plan(&CreatePlan {
            name: name.to_string(),
            description: None,
            test_cases: cases.iter().map(ToString::to_string).collect(),
        })
        .await
        .expect("Failed to create plan")
}
