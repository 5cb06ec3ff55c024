//! Display implementations for domain models.
//!
//! All output is markdown: plans render as a top-level heading with a
//! metadata list, test cases as third-level headings, summaries as
//! second-level headings with their progress.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{ClearSummary, Plan, PlanSummary, TestCase, TestCaseStatus},
    progress::{PlanStats, Progress},
};

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{} test cases)",
            self.progress_percent, self.completed, self.total
        )
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Progress: {}", self.progress())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.test_cases.is_empty() {
            writeln!(f, "\nNo test cases in this plan.")?;
        } else {
            writeln!(f, "\n## Test Cases")?;
            writeln!(f)?;
            for test_case in &self.test_cases {
                write!(f, "{test_case}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        write!(f, "- Priority: {}", self.priority)?;
        if let Some(validation_type) = &self.validation_type {
            write!(f, " | Validation: {validation_type}")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        writeln!(f, "- **Progress**: {}", self.progress)?;
        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for PlanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan {} statistics", self.plan_id)?;
        writeln!(f)?;
        writeln!(f, "| Status | Count |")?;
        writeln!(f, "|:-|-:|")?;
        for status in TestCaseStatus::ALL {
            writeln!(f, "| {} | {} |", status.with_icon(), self.counts.get(status))?;
        }
        writeln!(f)?;
        writeln!(f, "Progress: {}", self.progress)
    }
}

impl fmt::Display for ClearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Removed {} plans and {} test cases",
            self.plans, self.test_cases
        )
    }
}
