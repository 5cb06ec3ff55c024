//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{PlanSummary, TestCase};

/// Newtype wrapper for displaying a list of plan summaries.
///
/// ```rust
/// use checkpoint_core::display::PlanSummaries;
///
/// let empty = PlanSummaries(vec![]);
/// assert_eq!(empty.to_string(), "No plans found.\n");
/// ```
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the test cases of a plan.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TestCases(pub Vec<TestCase>);

impl TestCases {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.0.iter()
    }
}

impl Index<usize> for TestCases {
    type Output = TestCase;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a TestCases {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TestCases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No test cases found.");
        }
        for test_case in &self.0 {
            write!(f, "{test_case}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{
        models::{PlanStatus, Priority, TestCaseStatus},
        progress::Progress,
    };

    fn create_test_plan_summary(id: u64, name: &str) -> PlanSummary {
        PlanSummary {
            id,
            name: name.to_string(),
            description: None,
            status: PlanStatus::Completed,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
            progress: Progress {
                total: 2,
                completed: 2,
                progress_percent: 100,
            },
        }
    }

    #[test]
    fn test_plan_summaries_display() {
        let summaries = PlanSummaries(vec![
            create_test_plan_summary(2, "Second"),
            create_test_plan_summary(1, "First"),
        ]);
        let output = summaries.to_string();
        assert!(output.contains("## Second (ID: 2)"));
        assert!(output.contains("## First (ID: 1)"));
        assert!(output.contains("100% (2/2 test cases)"));
        assert!(output.find("Second") < output.find("First"));
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].id, 1);
    }

    #[test]
    fn test_plan_summaries_serialize_as_array() {
        let summaries = PlanSummaries(vec![create_test_plan_summary(1, "Only")]);
        let json = serde_json::to_value(&summaries).unwrap();
        assert_eq!(json[0]["progress_percent"], 100);
        assert_eq!(json[0]["status"], "COMPLETED");
    }

    #[test]
    fn test_test_cases_display() {
        assert_eq!(TestCases(vec![]).to_string(), "No test cases found.\n");

        let cases = TestCases(vec![TestCase {
            id: 4,
            plan_id: 1,
            name: "Logout".to_string(),
            description: None,
            validation_type: None,
            priority: Priority::P3,
            status: TestCaseStatus::Failed,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }]);
        let output = cases.to_string();
        assert!(output.contains("### 4. Logout (✗ Failed)"));
        assert!(output.contains("- Priority: P3\n"));
    }
}
