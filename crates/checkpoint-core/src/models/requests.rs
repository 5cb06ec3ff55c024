//! Validated request types passed from parameters down to the database layer.

use super::{Priority, TestCaseStatus};

/// A test case to insert, with every field already validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTestCase {
    pub name: String,
    pub description: Option<String>,
    pub validation_type: Option<String>,
    pub priority: Priority,
}

impl NewTestCase {
    /// Shortcut for a case with only a name and default priority.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial update of a test case.
///
/// `None` leaves a field untouched. For the optional text fields,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTestCaseRequest {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub validation_type: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub status: Option<TestCaseStatus>,
}

impl UpdateTestCaseRequest {
    /// Request that only changes the status.
    pub fn status(status: TestCaseStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.validation_type.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

/// Partial update of a plan's user-editable fields. The status is not
/// editable; it follows the test cases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlanRequest {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdatePlanRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
