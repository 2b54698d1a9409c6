use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::field_update::FieldUpdate;
use crate::intern::InternId;

pub type ProjectId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Todo,
    InProgress,
    Done,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Todo => "todo",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Todo => "Pending",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Done => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "todo" => Ok(ProjectStatus::Todo),
            "inprogress" => Ok(ProjectStatus::InProgress),
            "done" => Ok(ProjectStatus::Done),
            _ => Err(format!(
                "Invalid project status '{}'. Valid values: todo, in-progress, done",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub assigned_interns: Vec<InternId>,
    /// Completion percentage, 0 to 100.
    pub completion: u8,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(id: ProjectId, title: String, due_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            status: ProjectStatus::Todo,
            assigned_interns: Vec::new(),
            completion: 0,
            due_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_intern(&self, intern_id: &str) -> bool {
        self.assigned_interns.iter().any(|id| id == intern_id)
    }

    pub fn is_done(&self) -> bool {
        self.status == ProjectStatus::Done
    }

    pub fn update(&mut self, updates: ProjectUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.description.apply_to(&mut self.description);
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(interns) = updates.assigned_interns {
            self.assigned_interns = interns;
        }
        if let Some(completion) = updates.completion {
            self.completion = completion.min(100);
        }
        if let Some(due_date) = updates.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub status: Option<ProjectStatus>,
    pub assigned_interns: Option<Vec<InternId>>,
    pub completion: Option<u8>,
    pub due_date: Option<NaiveDate>,
}

/// Input of the "new project" form.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub assigned_interns: Vec<InternId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!("in_progress".parse::<ProjectStatus>(), Ok(ProjectStatus::InProgress));
    }

    #[test]
    fn test_update() {
        let mut project = Project::new(
            "prj-9".into(),
            "Website".into(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        );
        project.update(ProjectUpdate {
            status: Some(ProjectStatus::Done),
            completion: Some(250),
            description: FieldUpdate::Set("Landing page".into()),
            assigned_interns: Some(vec!["stg-001".into()]),
            ..Default::default()
        });
        assert!(project.is_done());
        assert_eq!(project.completion, 100);
        assert_eq!(project.description.as_deref(), Some("Landing page"));
        assert!(project.has_intern("stg-001"));
    }
}
