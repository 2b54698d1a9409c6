use stagiaire_core::StagiaireResult;

pub mod feed_commands;
pub mod intern_commands;
pub mod project_commands;
pub mod task_commands;
pub mod user_commands;

pub use feed_commands::*;
pub use intern_commands::*;
pub use project_commands::*;
pub use task_commands::*;
pub use user_commands::*;

use crate::dataset::{Dataset, IdCounters};

/// Trait for domain commands that mutate state.
/// Commands validate their input before touching any collection.
pub trait Command: Send + Sync {
    /// Execute this command, mutating the domain state
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation.
pub struct CommandContext<'a> {
    pub users: &'a mut Vec<crate::User>,
    pub interns: &'a mut Vec<crate::Intern>,
    pub projects: &'a mut Vec<crate::Project>,
    pub tasks: &'a mut Vec<crate::Task>,
    pub activities: &'a mut Vec<crate::Activity>,
    pub notifications: &'a mut Vec<crate::Notification>,
    pub counters: &'a mut IdCounters,
}

impl Dataset {
    pub fn command_context(&mut self) -> CommandContext<'_> {
        CommandContext {
            users: &mut self.users,
            interns: &mut self.interns,
            projects: &mut self.projects,
            tasks: &mut self.tasks,
            activities: &mut self.activities,
            notifications: &mut self.notifications,
            counters: &mut self.counters,
        }
    }

    pub fn execute(&mut self, command: &dyn Command) -> StagiaireResult<()> {
        tracing::debug!(command = %command.description(), "executing");
        command.execute(&mut self.command_context())
    }
}

/// Trimmed value, or a "required" validation error naming `field`.
pub(crate) fn required(value: &str, field: &str) -> StagiaireResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(stagiaire_core::StagiaireError::required(field))
    } else {
        Ok(trimmed.to_string())
    }
}
