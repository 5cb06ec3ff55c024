use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CaseCommands, PlanCommands};

/// Track test plans and derive their progress from test case outcomes
///
/// A plan groups test cases. Mark each case PASSED, FAILED or NA as you go;
/// the plan moves from PENDING to IN_PROGRESS to COMPLETED on its own.
/// Running without a subcommand lists all plans.
#[derive(Parser)]
#[command(version, about, name = "cp-plan")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/checkpoint/checkpoint.db
    #[arg(long, global = true, env = "CHECKPOINT_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage test cases within plans
    #[command(alias = "c")]
    Case {
        #[command(subcommand)]
        command: CaseCommands,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let args = Args::try_parse_from(["cp-plan", "--no-color"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.no_color);
    }
}
