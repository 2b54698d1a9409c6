use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::intern::Intern;
use crate::notification::Notification;
use crate::project::Project;
use crate::task::Task;
use crate::user::User;

/// Next numeric suffix for each id family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    #[serde(default)]
    pub supervisor: u32,
    #[serde(default)]
    pub intern: u32,
    #[serde(default)]
    pub project: u32,
    #[serde(default)]
    pub task: u32,
    #[serde(default)]
    pub activity: u32,
    #[serde(default)]
    pub notification: u32,
}

impl IdCounters {
    fn bump(counter: &mut u32, prefix: &str) -> String {
        *counter += 1;
        format!("{}-{:03}", prefix, counter)
    }

    pub fn next_supervisor(&mut self) -> String {
        Self::bump(&mut self.supervisor, "enc")
    }

    pub fn next_intern(&mut self) -> String {
        Self::bump(&mut self.intern, "stg")
    }

    pub fn next_project(&mut self) -> String {
        Self::bump(&mut self.project, "prj")
    }

    pub fn next_task(&mut self) -> String {
        Self::bump(&mut self.task, "tsk")
    }

    pub fn next_activity(&mut self) -> String {
        Self::bump(&mut self.activity, "act")
    }

    pub fn next_notification(&mut self) -> String {
        Self::bump(&mut self.notification, "ntf")
    }
}

/// Every collection the application works on. This is the persisted data format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub interns: Vec<Intern>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub counters: IdCounters,
}

impl Dataset {
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn intern(&self, id: &str) -> Option<&Intern> {
        self.interns.iter().find(|i| i.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn project_tasks(&self, project_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }
}
