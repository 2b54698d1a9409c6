use super::{required, Command, CommandContext};
use crate::kanban::lifecycle;
use crate::{NewTask, Task, TaskStatus, TaskUpdate};
use stagiaire_core::{StagiaireError, StagiaireResult};

fn check_references(context: &CommandContext, project_id: &str, assignee: &str) -> StagiaireResult<()> {
    if !context.projects.iter().any(|p| p.id == project_id) {
        return Err(StagiaireError::not_found("Project", project_id));
    }
    if !context.interns.iter().any(|i| i.id == assignee) {
        return Err(StagiaireError::not_found("Intern", assignee));
    }
    Ok(())
}

/// Create a task at the end of its status column.
pub struct CreateTask {
    pub task: NewTask,
}

impl Command for CreateTask {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let title = required(&self.task.title, "Title")?;
        required(&self.task.project_id, "Project")?;
        required(&self.task.assigned_to, "Assignee")?;
        check_references(context, &self.task.project_id, &self.task.assigned_to)?;

        let position = lifecycle::next_position(context.tasks, &self.task.project_id, self.task.status);
        let mut task = Task::new(
            context.counters.next_task(),
            title,
            self.task.project_id.clone(),
            self.task.assigned_to.clone(),
            position,
        );
        task.description = self.task.description.clone().filter(|d| !d.trim().is_empty());
        task.status = self.task.status;
        task.priority = self.task.priority;
        task.due_date = self.task.due_date;
        for label in &self.task.labels {
            task.add_label(label.clone());
        }
        context.tasks.push(task);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create task: '{}'", self.task.title)
    }
}

/// Update task fields. A status change moves the task to the end of the new column.
pub struct UpdateTask {
    pub task_id: String,
    pub updates: TaskUpdate,
}

impl Command for UpdateTask {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let current = context
            .tasks
            .iter()
            .find(|t| t.id == self.task_id)
            .ok_or_else(|| StagiaireError::not_found("Task", &self.task_id))?;
        let current_status = current.status;

        let mut updates = self.updates.clone();
        if let Some(title) = updates.title.take() {
            updates.title = Some(required(&title, "Title")?);
        }
        if let Some(assignee) = &updates.assigned_to {
            if !context.interns.iter().any(|i| &i.id == assignee) {
                return Err(StagiaireError::not_found("Intern", assignee));
            }
        }

        let new_status = updates.status.take();
        if let Some(task) = context.tasks.iter_mut().find(|t| t.id == self.task_id) {
            task.update(updates);
        }
        if let Some(status) = new_status.filter(|s| *s != current_status) {
            lifecycle::place_task(context.tasks, &self.task_id, status, None)?;
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update task {}", self.task_id)
    }
}

/// Set a task's status, appending it to the target column.
pub struct SetTaskStatus {
    pub task_id: String,
    pub status: TaskStatus,
}

impl Command for SetTaskStatus {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        lifecycle::place_task(context.tasks, &self.task_id, self.status, None)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set task {} status to {}", self.task_id, self.status)
    }
}

/// Place a task at a position inside a status column.
pub struct ReorderTask {
    pub task_id: String,
    pub status: TaskStatus,
    pub position: usize,
}

impl Command for ReorderTask {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        lifecycle::place_task(context.tasks, &self.task_id, self.status, Some(self.position))?;
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Move task {} to {} at {}",
            self.task_id, self.status, self.position
        )
    }
}

pub struct DeleteTask {
    pub task_id: String,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let idx = context
            .tasks
            .iter()
            .position(|t| t.id == self.task_id)
            .ok_or_else(|| StagiaireError::not_found("Task", &self.task_id))?;
        let task = context.tasks.remove(idx);
        lifecycle::compact_column(context.tasks, &task.project_id, task.status);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, TaskPriority};

    fn new_task(title: &str, project: &str, assignee: &str) -> NewTask {
        NewTask {
            title: title.into(),
            description: None,
            project_id: project.into(),
            assigned_to: assignee.into(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            due_date: None,
            labels: vec!["api".into()],
        }
    }

    #[test]
    fn test_create_task_appends_to_column() {
        let mut data = fixtures::dataset();
        data.execute(&CreateTask {
            task: new_task("  Add CI  ", "prj-001", "stg-001"),
        })
        .unwrap();
        let task = data.tasks.last().unwrap();
        assert_eq!(task.id, "tsk-013");
        assert_eq!(task.title, "Add CI");
        assert_eq!(task.position, 1);
        assert_eq!(task.labels, vec!["api"]);
    }

    #[test]
    fn test_create_task_validation() {
        let mut data = fixtures::dataset();
        let err = data
            .execute(&CreateTask {
                task: new_task(" ", "prj-001", "stg-001"),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Title is required");

        let err = data
            .execute(&CreateTask {
                task: new_task("x", "prj-404", "stg-001"),
            })
            .unwrap_err();
        assert!(matches!(err, StagiaireError::NotFound(_)));

        let err = data
            .execute(&CreateTask {
                task: new_task("x", "prj-001", "stg-404"),
            })
            .unwrap_err();
        assert!(matches!(err, StagiaireError::NotFound(_)));
        assert_eq!(data.tasks.len(), 12);
        assert_eq!(data.counters.task, 12);
    }

    #[test]
    fn test_update_task_status_moves_column() {
        let mut data = fixtures::dataset();
        data.execute(&UpdateTask {
            task_id: "tsk-003".into(),
            updates: TaskUpdate {
                status: Some(TaskStatus::Done),
                priority: Some(TaskPriority::High),
                ..Default::default()
            },
        })
        .unwrap();
        let task = data.task("tsk-003").unwrap();
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.position, 1);
    }

    #[test]
    fn test_delete_task_compacts_column() {
        let mut data = fixtures::dataset();
        data.execute(&DeleteTask {
            task_id: "tsk-010".into(),
        })
        .unwrap();
        assert!(data.task("tsk-010").is_none());
        assert_eq!(data.task("tsk-011").unwrap().position, 0);
        assert!(data
            .execute(&DeleteTask {
                task_id: "tsk-010".into()
            })
            .is_err());
    }
}
