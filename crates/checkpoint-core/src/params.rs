//! Parameter structures for checkpoint operations.
//!
//! These structures carry raw user input from any interface (the CLI today)
//! into the core without framework-specific derives. Each mutating parameter
//! type has a `validate` method that trims and checks its fields and returns
//! the typed request the database layer consumes, so every collaborator
//! enforces the same limits:
//!
//! - names are trimmed and must be 1 to [`MAX_NAME_LEN`] characters;
//! - blank descriptions are stored as absent;
//! - validation types are limited to [`MAX_VALIDATION_TYPE_LEN`] characters;
//! - statuses and priorities must be one of their enumerated values.
//!
//! ```rust
//! use checkpoint_core::params::CreateTestCase;
//!
//! let params = CreateTestCase {
//!     plan_id: 1,
//!     name: "  Login with SSO ".to_string(),
//!     description: Some("   ".to_string()),
//!     validation_type: None,
//!     priority: Some("p1".to_string()),
//! };
//! let request = params.validate().unwrap();
//! assert_eq!(request.name, "Login with SSO");
//! assert_eq!(request.description, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{
        NewTestCase, Priority, TestCaseStatus, UpdatePlanRequest, UpdateTestCaseRequest,
    },
};

/// Maximum length of plan and test case names, in characters.
pub const MAX_NAME_LEN: usize = 150;

/// Maximum length of a test case validation type, in characters.
pub const MAX_VALIDATION_TYPE_LEN: usize = 100;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new plan, optionally seeded with test cases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Name of the plan (required)
    pub name: String,
    /// Optional description of the plan
    pub description: Option<String>,
    /// Names of test cases to create with the plan. Blank entries are skipped.
    #[serde(default)]
    pub test_cases: Vec<String>,
}

impl CreatePlan {
    /// Validate and normalize the plan and its initial test cases.
    pub fn validate(&self) -> Result<(String, Option<String>, Vec<NewTestCase>)> {
        let name = validate_name("name", &self.name)?;
        let description = normalize_text(self.description.as_deref());
        let test_cases = self
            .test_cases
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| validate_name("test_cases", raw).map(NewTestCase::named))
            .collect::<Result<Vec<_>>>()?;
        Ok((name, description, test_cases))
    }
}

/// Parameters for updating a plan's name or description.
///
/// An empty description clears the stored one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdatePlan {
    pub fn validate(&self) -> Result<UpdatePlanRequest> {
        Ok(UpdatePlanRequest {
            name: self
                .name
                .as_deref()
                .map(|name| validate_name("name", name))
                .transpose()?,
            description: self
                .description
                .as_deref()
                .map(|description| normalize_text(Some(description))),
        })
    }
}

/// Parameters for deleting a plan and all of its test cases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: u64,
    /// Explicit confirmation; deletion is refused without it
    #[serde(default)]
    pub confirmed: bool,
}

impl DeletePlan {
    pub fn validate(&self) -> Result<u64> {
        if !self.confirmed {
            return Err(PlannerError::invalid_input("confirmed")
                .with_reason("Deleting a plan requires explicit confirmation"));
        }
        Ok(self.id)
    }
}

/// Parameters for adding a test case to a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTestCase {
    /// ID of the plan that owns the new test case
    pub plan_id: u64,
    /// Name of the test case (required)
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional kind of validation
    pub validation_type: Option<String>,
    /// Priority (`P1`, `P2` or `P3`); `P2` when absent
    pub priority: Option<String>,
}

impl CreateTestCase {
    pub fn validate(&self) -> Result<NewTestCase> {
        Ok(NewTestCase {
            name: validate_name("name", &self.name)?,
            description: normalize_text(self.description.as_deref()),
            validation_type: validate_validation_type(self.validation_type.as_deref())?,
            priority: self
                .priority
                .as_deref()
                .map(parse_priority)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// Parameters for updating a test case. Absent fields stay untouched; an
/// empty description or validation type clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTestCase {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub validation_type: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl UpdateTestCase {
    pub fn validate(&self) -> Result<UpdateTestCaseRequest> {
        Ok(UpdateTestCaseRequest {
            name: self
                .name
                .as_deref()
                .map(|name| validate_name("name", name))
                .transpose()?,
            description: self
                .description
                .as_deref()
                .map(|description| normalize_text(Some(description))),
            validation_type: self
                .validation_type
                .as_deref()
                .map(|value| validate_validation_type(Some(value)))
                .transpose()?,
            priority: self.priority.as_deref().map(parse_priority).transpose()?,
            status: self.status.as_deref().map(parse_status).transpose()?,
        })
    }
}

/// Parameters for changing only the status of a test case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTestCaseStatus {
    pub id: u64,
    pub status: String,
}

impl UpdateTestCaseStatus {
    pub fn validate(&self) -> Result<TestCaseStatus> {
        parse_status(&self.status)
    }
}

fn validate_name(field: &str, raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(PlannerError::invalid_input(field).with_reason("Name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(PlannerError::invalid_input(field)
            .with_reason(format!("Name must be at most {MAX_NAME_LEN} characters")));
    }
    Ok(name.to_string())
}

fn normalize_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

fn validate_validation_type(raw: Option<&str>) -> Result<Option<String>> {
    let value = normalize_text(raw);
    if let Some(value) = &value {
        if value.chars().count() > MAX_VALIDATION_TYPE_LEN {
            return Err(PlannerError::invalid_input("validation_type").with_reason(format!(
                "Validation type must be at most {MAX_VALIDATION_TYPE_LEN} characters"
            )));
        }
    }
    Ok(value)
}

fn parse_status(raw: &str) -> Result<TestCaseStatus> {
    raw.parse::<TestCaseStatus>().map_err(|_| {
        PlannerError::invalid_input("status").with_reason(format!(
            "Invalid status: {raw}. Must be 'PENDING', 'PASSED', 'FAILED' or 'NA'"
        ))
    })
}

fn parse_priority(raw: &str) -> Result<Priority> {
    raw.parse::<Priority>().map_err(|_| {
        PlannerError::invalid_input("priority")
            .with_reason(format!("Invalid priority: {raw}. Must be 'P1', 'P2' or 'P3'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: PlannerError) -> String {
        match err {
            PlannerError::InvalidInput { field, .. } => field,
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_plan_trims_and_skips_blank_cases() {
        let params = CreatePlan {
            name: "  Sprint 12  ".to_string(),
            description: Some("".to_string()),
            test_cases: vec!["Login".to_string(), "   ".to_string(), " Logout ".to_string()],
        };
        let (name, description, cases) = params.validate().unwrap();
        assert_eq!(name, "Sprint 12");
        assert_eq!(description, None);
        let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Login", "Logout"]);
        assert!(cases.iter().all(|c| c.priority == Priority::P2));
    }

    #[test]
    fn test_create_plan_rejects_blank_name() {
        let params = CreatePlan {
            name: " \t ".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(params.validate().unwrap_err()), "name");
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = CreatePlan {
            name: "é".repeat(MAX_NAME_LEN),
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = CreateTestCase {
            plan_id: 1,
            name: "x".repeat(MAX_NAME_LEN + 1),
            ..Default::default()
        };
        assert_eq!(field_of(over_limit.validate().unwrap_err()), "name");
    }

    #[test]
    fn test_create_test_case_defaults() {
        let params = CreateTestCase {
            plan_id: 3,
            name: "Checkout".to_string(),
            validation_type: Some(" manual ".to_string()),
            ..Default::default()
        };
        let request = params.validate().unwrap();
        assert_eq!(request.priority, Priority::P2);
        assert_eq!(request.validation_type.as_deref(), Some("manual"));
    }

    #[test]
    fn test_create_test_case_rejects_long_validation_type() {
        let params = CreateTestCase {
            plan_id: 3,
            name: "Checkout".to_string(),
            validation_type: Some("v".repeat(MAX_VALIDATION_TYPE_LEN + 1)),
            ..Default::default()
        };
        assert_eq!(field_of(params.validate().unwrap_err()), "validation_type");
    }

    #[test]
    fn test_create_test_case_rejects_unknown_priority() {
        let params = CreateTestCase {
            plan_id: 3,
            name: "Checkout".to_string(),
            priority: Some("P4".to_string()),
            ..Default::default()
        };
        assert_eq!(field_of(params.validate().unwrap_err()), "priority");
    }

    #[test]
    fn test_update_test_case_partial() {
        let params = UpdateTestCase {
            id: 9,
            description: Some("  ".to_string()),
            status: Some("passed".to_string()),
            ..Default::default()
        };
        let request = params.validate().unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.description, Some(None));
        assert_eq!(request.validation_type, None);
        assert_eq!(request.status, Some(TestCaseStatus::Passed));
    }

    #[test]
    fn test_update_status_rejects_unknown_value() {
        let params = UpdateTestCaseStatus {
            id: 1,
            status: "DONE".to_string(),
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("DONE"));
        assert_eq!(field_of(err), "status");
    }

    #[test]
    fn test_update_plan_clears_description() {
        let params = UpdatePlan {
            id: 1,
            name: None,
            description: Some(String::new()),
        };
        let request = params.validate().unwrap();
        assert_eq!(request.description, Some(None));
        assert!(!request.is_empty());
    }

    #[test]
    fn test_delete_plan_requires_confirmation() {
        let refused = DeletePlan {
            id: 4,
            confirmed: false,
        };
        assert_eq!(field_of(refused.validate().unwrap_err()), "confirmed");

        let confirmed = DeletePlan {
            id: 4,
            confirmed: true,
        };
        assert_eq!(confirmed.validate().unwrap(), 4);
    }
}
