//! Dashboard and report figures.
//!
//! Everything here is computed over visibility-filtered data so the numbers a
//! user sees match the records they can open.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::filter::Visibility;
use crate::intern::{Intern, InternId};
use crate::project::{Project, ProjectStatus};
use crate::role::Role;
use crate::task::{Task, TaskPriority, TaskStatus};

/// The four dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub role: Role,
    pub total_interns: usize,
    pub active_projects: usize,
    pub completed_tasks: usize,
    /// Percentage, rounded.
    pub success_rate: u32,
}

impl DashboardMetrics {
    pub fn compute(
        role: Role,
        visibility: &Visibility,
        interns: &[Intern],
        projects: &[Project],
        tasks: &[Task],
    ) -> Self {
        let visible = visibility.projects(projects);
        let count = |status: ProjectStatus| visible.iter().filter(|p| p.status == status).count();

        match role {
            Role::HrManager => Self {
                role,
                total_interns: visibility.intern_count(interns),
                active_projects: count(ProjectStatus::InProgress),
                completed_tasks: visibility
                    .tasks(projects, tasks)
                    .iter()
                    .filter(|t| t.is_done())
                    .count(),
                success_rate: percentage(count(ProjectStatus::Done), visible.len()),
            },
            Role::Supervisor => Self {
                role,
                total_interns: visibility.intern_count(interns),
                active_projects: visible.len(),
                completed_tasks: count(ProjectStatus::Done),
                success_rate: percentage(count(ProjectStatus::Done), visible.len()),
            },
            Role::Intern => {
                let average = if visible.is_empty() {
                    0
                } else {
                    let total: u32 = visible.iter().map(|p| u32::from(p.completion)).sum();
                    (f64::from(total) / visible.len() as f64).round() as u32
                };
                Self {
                    role,
                    total_interns: visible.len(),
                    active_projects: count(ProjectStatus::InProgress),
                    completed_tasks: count(ProjectStatus::Done),
                    success_rate: average,
                }
            }
        }
    }

    /// Card captions; the same slot means different things per role.
    pub fn labels(&self) -> [&'static str; 4] {
        match self.role {
            Role::HrManager => ["Total interns", "Active projects", "Completed tasks", "Success rate"],
            Role::Supervisor => ["My interns", "Supervised projects", "Completed projects", "Success rate"],
            Role::Intern => ["My projects", "In progress", "Completed", "Average progress"],
        }
    }

    pub fn values(&self) -> [String; 4] {
        [
            self.total_interns.to_string(),
            self.active_projects.to_string(),
            self.completed_tasks.to_string(),
            format!("{}%", self.success_rate),
        ]
    }
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStats {
    pub department: String,
    pub interns: usize,
    /// Project assignments held by interns of this department.
    pub projects: usize,
}

/// Sorted by department name.
pub fn department_stats(visibility: &Visibility, interns: &[Intern], projects: &[Project]) -> Vec<DepartmentStats> {
    let visible_projects = visibility.projects(projects);
    let mut by_department: BTreeMap<&str, DepartmentStats> = BTreeMap::new();

    for intern in visibility.interns(interns) {
        let entry = by_department
            .entry(intern.department.as_str())
            .or_insert_with(|| DepartmentStats {
                department: intern.department.clone(),
                interns: 0,
                projects: 0,
            });
        entry.interns += 1;
        entry.projects += visible_projects.iter().filter(|p| p.has_intern(&intern.id)).count();
    }
    by_department.into_values().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStatusStats {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

pub fn project_status_stats(visibility: &Visibility, projects: &[Project]) -> ProjectStatusStats {
    let mut stats = ProjectStatusStats::default();
    for project in visibility.projects(projects) {
        match project.status {
            ProjectStatus::Todo => stats.todo += 1,
            ProjectStatus::InProgress => stats.in_progress += 1,
            ProjectStatus::Done => stats.done += 1,
        }
    }
    stats
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub bugs: usize,
    pub by_priority: BTreeMap<TaskPriority, usize>,
}

pub fn task_stats(visibility: &Visibility, projects: &[Project], tasks: &[Task], today: NaiveDate) -> TaskStats {
    let mut stats = TaskStats::default();
    for task in visibility.tasks(projects, tasks) {
        stats.total += 1;
        match task.status {
            TaskStatus::Done => stats.completed += 1,
            TaskStatus::Bug => {
                stats.bugs += 1;
                stats.pending += 1;
            }
            _ => stats.pending += 1,
        }
        if task.is_overdue(today) {
            stats.overdue += 1;
        }
        *stats.by_priority.entry(task.priority).or_default() += 1;
    }
    stats
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternSummary {
    pub intern_id: InternId,
    pub name: String,
    pub department: String,
    pub progress: u8,
    pub assigned_tasks: usize,
    pub completed_tasks: usize,
    pub projects: usize,
}

pub fn intern_summaries(
    visibility: &Visibility,
    interns: &[Intern],
    projects: &[Project],
    tasks: &[Task],
) -> Vec<InternSummary> {
    let visible_projects = visibility.projects(projects);
    let visible_tasks = visibility.tasks(projects, tasks);

    visibility
        .interns(interns)
        .into_iter()
        .map(|intern| {
            let own: Vec<_> = visible_tasks
                .iter()
                .filter(|t| t.assigned_to == intern.id)
                .collect();
            InternSummary {
                intern_id: intern.id.clone(),
                name: intern.name.clone(),
                department: intern.department.clone(),
                progress: intern.progress,
                assigned_tasks: own.len(),
                completed_tasks: own.iter().filter(|t| t.is_done()).count(),
                projects: visible_projects.iter().filter(|p| p.has_intern(&intern.id)).count(),
            }
        })
        .collect()
}

/// Everything the reports section shows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportStats {
    pub departments: Vec<DepartmentStats>,
    pub projects: ProjectStatusStats,
    pub tasks: TaskStats,
    pub interns: Vec<InternSummary>,
}

impl ReportStats {
    pub fn compute(
        visibility: &Visibility,
        interns: &[Intern],
        projects: &[Project],
        tasks: &[Task],
        today: NaiveDate,
    ) -> Self {
        Self {
            departments: department_stats(visibility, interns, projects),
            projects: project_status_stats(visibility, projects),
            tasks: task_stats(visibility, projects, tasks, today),
            interns: intern_summaries(visibility, interns, projects, tasks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::fixtures;

    fn metrics_for(data: &Dataset, user_id: &str) -> DashboardMetrics {
        let user = data.user(user_id).unwrap().to_auth_user();
        let visibility = Visibility::for_user(&user, &data.users);
        DashboardMetrics::compute(user.role, &visibility, &data.interns, &data.projects, &data.tasks)
    }

    #[test]
    fn test_hr_metrics() {
        let data = fixtures::dataset();
        let m = metrics_for(&data, "rh-001");
        assert_eq!(m.total_interns, 4);
        assert_eq!(m.active_projects, 2);
        assert_eq!(m.completed_tasks, 5);
        assert_eq!(m.success_rate, 40);
    }

    #[test]
    fn test_supervisor_metrics_follow_declared_list() {
        let mut data = fixtures::dataset();
        let m = metrics_for(&data, "enc-001");
        assert_eq!(m.total_interns, 2);
        assert_eq!(m.active_projects, 3);
        assert_eq!(m.completed_tasks, 1);
        assert_eq!(m.success_rate, 33);

        // Shrinking the declared list shrinks every figure with it.
        data.users[1].intern_ids = vec!["stg-002".into()];
        let m = metrics_for(&data, "enc-001");
        assert_eq!(m.total_interns, 1);
        assert_eq!(m.active_projects, 2);
        assert_eq!(m.completed_tasks, 0);
        assert_eq!(m.success_rate, 0);
    }

    #[test]
    fn test_intern_metrics() {
        let data = fixtures::dataset();
        let m = metrics_for(&data, "stg-001");
        assert_eq!(m.total_interns, 2);
        assert_eq!(m.active_projects, 1);
        assert_eq!(m.completed_tasks, 1);
        assert_eq!(m.success_rate, 83);
        assert_eq!(m.labels()[3], "Average progress");
        assert_eq!(m.values()[3], "83%");
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
    }

    #[test]
    fn test_department_stats_sorted() {
        let data = fixtures::dataset();
        let stats = department_stats(&Visibility::All, &data.interns, &data.projects);
        let names: Vec<_> = stats.iter().map(|s| s.department.as_str()).collect();
        assert_eq!(names, vec!["Finance", "Informatique", "Marketing"]);
        let it = &stats[1];
        assert_eq!(it.interns, 2);
        assert_eq!(it.projects, 4);
    }

    #[test]
    fn test_task_stats_counts_overdue() {
        let data = fixtures::dataset();
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        let stats = task_stats(&Visibility::All, &data.projects, &data.tasks, today);
        assert_eq!(stats.total, 12);
        assert_eq!(stats.completed, 5);
        assert_eq!(stats.pending, 7);
        assert_eq!(stats.bugs, 2);
        // tsk-002 (Apr 18) and tsk-004 (Apr 4) are late and not done.
        assert_eq!(stats.overdue, 2);
        assert_eq!(stats.by_priority[&TaskPriority::High], 5);
    }

    #[test]
    fn test_intern_summaries_for_supervisor() {
        let data = fixtures::dataset();
        let user = data.user("enc-002").unwrap().to_auth_user();
        let visibility = Visibility::for_user(&user, &data.users);
        let summaries = intern_summaries(&visibility, &data.interns, &data.projects, &data.tasks);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].intern_id, "stg-003");
        assert_eq!(summaries[0].assigned_tasks, 4);
        assert_eq!(summaries[0].completed_tasks, 2);
        assert_eq!(summaries[0].projects, 2);
    }
}
