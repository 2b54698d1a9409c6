use super::{required, Command, CommandContext};
use crate::{NewProject, Project, ProjectUpdate};
use stagiaire_core::{StagiaireError, StagiaireResult};

fn check_interns(context: &CommandContext, ids: &[String]) -> StagiaireResult<()> {
    match ids.iter().find(|id| !context.interns.iter().any(|i| &i.id == *id)) {
        Some(missing) => Err(StagiaireError::not_found("Intern", missing)),
        None => Ok(()),
    }
}

pub struct CreateProject {
    pub project: NewProject,
}

impl Command for CreateProject {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let title = required(&self.project.title, "Title")?;
        let due_date = self
            .project
            .due_date
            .ok_or_else(|| StagiaireError::required("Due date"))?;
        check_interns(context, &self.project.assigned_interns)?;

        let mut project = Project::new(context.counters.next_project(), title, due_date);
        project.description = self
            .project
            .description
            .clone()
            .filter(|d| !d.trim().is_empty());
        for id in &self.project.assigned_interns {
            if !project.has_intern(id) {
                project.assigned_interns.push(id.clone());
            }
        }
        context.projects.push(project);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create project: '{}'", self.project.title)
    }
}

pub struct UpdateProject {
    pub project_id: String,
    pub updates: ProjectUpdate,
}

impl Command for UpdateProject {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let mut updates = self.updates.clone();
        if let Some(title) = updates.title.take() {
            updates.title = Some(required(&title, "Title")?);
        }
        if let Some(ids) = &updates.assigned_interns {
            check_interns(context, ids)?;
        }

        let project = context
            .projects
            .iter_mut()
            .find(|p| p.id == self.project_id)
            .ok_or_else(|| StagiaireError::not_found("Project", &self.project_id))?;
        project.update(updates);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update project {}", self.project_id)
    }
}

/// Delete a project together with its tasks.
pub struct DeleteProject {
    pub project_id: String,
}

impl Command for DeleteProject {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let idx = context
            .projects
            .iter()
            .position(|p| p.id == self.project_id)
            .ok_or_else(|| StagiaireError::not_found("Project", &self.project_id))?;
        context.projects.remove(idx);
        let before = context.tasks.len();
        context.tasks.retain(|t| t.project_id != self.project_id);
        tracing::debug!(
            project_id = %self.project_id,
            removed_tasks = before - context.tasks.len(),
            "project deleted"
        );
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete project {}", self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, ProjectStatus};
    use chrono::NaiveDate;

    fn new_project(title: &str, due: Option<NaiveDate>) -> NewProject {
        NewProject {
            title: title.into(),
            description: Some("".into()),
            due_date: due,
            assigned_interns: vec!["stg-001".into(), "stg-001".into()],
        }
    }

    #[test]
    fn test_create_project() {
        let mut data = fixtures::dataset();
        data.execute(&CreateProject {
            project: new_project("Intranet", NaiveDate::from_ymd_opt(2025, 10, 1)),
        })
        .unwrap();
        let project = data.projects.last().unwrap();
        assert_eq!(project.id, "prj-006");
        assert_eq!(project.status, ProjectStatus::Todo);
        assert_eq!(project.assigned_interns, vec!["stg-001"]);
        assert!(project.description.is_none());
    }

    #[test]
    fn test_create_project_requires_title_and_due_date() {
        let mut data = fixtures::dataset();
        let err = data
            .execute(&CreateProject {
                project: new_project("", NaiveDate::from_ymd_opt(2025, 10, 1)),
            })
            .unwrap_err();
        assert!(matches!(err, StagiaireError::Validation(_)));
        let err = data
            .execute(&CreateProject {
                project: new_project("Intranet", None),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Due date is required");
    }

    #[test]
    fn test_update_project_rejects_unknown_intern() {
        let mut data = fixtures::dataset();
        let err = data
            .execute(&UpdateProject {
                project_id: "prj-001".into(),
                updates: ProjectUpdate {
                    assigned_interns: Some(vec!["stg-404".into()]),
                    ..Default::default()
                },
            })
            .unwrap_err();
        assert!(matches!(err, StagiaireError::NotFound(_)));
        assert_eq!(data.project("prj-001").unwrap().assigned_interns.len(), 2);
    }

    #[test]
    fn test_delete_project_removes_tasks() {
        let mut data = fixtures::dataset();
        data.execute(&DeleteProject {
            project_id: "prj-001".into(),
        })
        .unwrap();
        assert!(data.project("prj-001").is_none());
        assert!(data.project_tasks("prj-001").is_empty());
        assert_eq!(data.tasks.len(), 8);
    }
}
