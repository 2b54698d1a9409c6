use std::collections::HashSet;

use crate::intern::{Intern, InternId};
use crate::project::Project;
use crate::role::Role;
use crate::task::Task;
use crate::user::{AuthUser, User};

/// Trait for filtering records by various criteria.
pub trait RecordFilter<T> {
    /// Returns true if the record matches the filter criteria.
    fn matches(&self, record: &T) -> bool;

    /// The matching subset, in input order.
    fn filter<'r>(&self, records: &'r [T]) -> Vec<&'r T> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// What the signed-in user is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// HR manager: everything.
    All,
    /// Supervisor: the interns declared under the account.
    Supervised(HashSet<InternId>),
    /// Intern: only records involving this intern id.
    Own(InternId),
}

impl Visibility {
    /// A supervisor's list is read from the account record; a missing record
    /// means an empty list.
    pub fn for_user(user: &AuthUser, users: &[User]) -> Self {
        match user.role {
            Role::HrManager => Visibility::All,
            Role::Supervisor => Visibility::Supervised(
                users
                    .iter()
                    .find(|u| u.id == user.id)
                    .map(|u| u.intern_ids.iter().cloned().collect())
                    .unwrap_or_default(),
            ),
            Role::Intern => Visibility::Own(user.id.clone()),
        }
    }

    pub fn sees_intern(&self, intern_id: &str) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Supervised(ids) => ids.contains(intern_id),
            Visibility::Own(own) => own == intern_id,
        }
    }

    pub fn sees_project(&self, project: &Project) -> bool {
        match self {
            Visibility::All => true,
            _ => project
                .assigned_interns
                .iter()
                .any(|id| self.sees_intern(id)),
        }
    }

    pub fn interns<'r>(&self, interns: &'r [Intern]) -> Vec<&'r Intern> {
        self.filter(interns)
    }

    pub fn projects<'r>(&self, projects: &'r [Project]) -> Vec<&'r Project> {
        ProjectVisibility(self).filter(projects)
    }

    pub fn tasks<'r>(&self, projects: &[Project], tasks: &'r [Task]) -> Vec<&'r Task> {
        TaskVisibility::new(self, projects).filter(tasks)
    }

    /// Number of interns in scope. For supervisors this is the declared list
    /// size, even when some ids have no intern record.
    pub fn intern_count(&self, interns: &[Intern]) -> usize {
        match self {
            Visibility::All => interns.len(),
            Visibility::Supervised(ids) => ids.len(),
            Visibility::Own(_) => 1,
        }
    }
}

impl RecordFilter<Intern> for Visibility {
    fn matches(&self, intern: &Intern) -> bool {
        self.sees_intern(&intern.id)
    }
}

/// Project adapter so the trait can be implemented twice for one visibility.
pub struct ProjectVisibility<'v>(pub &'v Visibility);

impl RecordFilter<Project> for ProjectVisibility<'_> {
    fn matches(&self, project: &Project) -> bool {
        self.0.sees_project(project)
    }
}

/// A task is visible iff its project is.
pub struct TaskVisibility<'a> {
    visible_projects: HashSet<&'a str>,
}

impl<'a> TaskVisibility<'a> {
    pub fn new(visibility: &Visibility, projects: &'a [Project]) -> Self {
        Self {
            visible_projects: projects
                .iter()
                .filter(|p| visibility.sees_project(p))
                .map(|p| p.id.as_str())
                .collect(),
        }
    }
}

impl RecordFilter<Task> for TaskVisibility<'_> {
    fn matches(&self, task: &Task) -> bool {
        self.visible_projects.contains(task.project_id.as_str())
    }
}
