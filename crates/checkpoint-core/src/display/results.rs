//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Plan, TestCase};

/// Outcome of a create operation: a confirmation line followed by the
/// created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<TestCase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created test case with ID: {} in plan {}",
            self.resource.id, self.resource.plan_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of an update, listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl UpdateResult<TestCase> {
    /// Describe the differences between two versions of a test case.
    pub fn between(previous: &TestCase, updated: TestCase) -> Self {
        let mut changes = Vec::new();
        if previous.name != updated.name {
            changes.push(format!("Renamed to '{}'", updated.name));
        }
        if previous.description != updated.description {
            changes.push("Updated description".to_string());
        }
        if previous.validation_type != updated.validation_type {
            changes.push("Updated validation type".to_string());
        }
        if previous.priority != updated.priority {
            changes.push(format!(
                "Changed priority from {} to {}",
                previous.priority, updated.priority
            ));
        }
        if previous.status != updated.status {
            changes.push(format!(
                "Changed status from {} to {}",
                previous.status, updated.status
            ));
        }
        Self::with_changes(updated, changes)
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<TestCase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated test case with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Confirmation of a deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {}) and its {} test cases",
            self.resource.name,
            self.resource.id,
            self.resource.test_cases.len()
        )
    }
}

impl fmt::Display for DeleteResult<TestCase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted test case '{}' (ID: {}) from plan {}",
            self.resource.name, self.resource.id, self.resource.plan_id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Priority, TestCaseStatus};

    fn create_test_case() -> TestCase {
        TestCase {
            id: 5,
            plan_id: 2,
            name: "Payment".to_string(),
            description: None,
            validation_type: None,
            priority: Priority::P2,
            status: TestCaseStatus::Pending,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_create_result_for_test_case() {
        let output = CreateResult::new(create_test_case()).to_string();
        assert!(output.starts_with("Created test case with ID: 5 in plan 2\n"));
        assert!(output.contains("### 5. Payment"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let previous = create_test_case();
        let mut updated = previous.clone();
        updated.status = TestCaseStatus::Passed;
        updated.priority = Priority::P1;

        let result = UpdateResult::between(&previous, updated);
        assert_eq!(
            result.changes,
            [
                "Changed priority from P2 to P1",
                "Changed status from PENDING to PASSED"
            ]
        );
        let output = result.to_string();
        assert!(output.contains("Changes made:"));
        assert!(output.contains("- Changed status from PENDING to PASSED"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let previous = create_test_case();
        let result = UpdateResult::between(&previous, previous.clone());
        assert!(result.changes.is_empty());
        assert!(!result.to_string().contains("Changes made:"));
    }

    #[test]
    fn test_delete_result_for_test_case() {
        let output = DeleteResult::new(create_test_case()).to_string();
        assert_eq!(output, "Deleted test case 'Payment' (ID: 5) from plan 2\n");
    }
}
