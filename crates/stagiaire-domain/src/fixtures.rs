//! Seed data used when no data file exists yet.
//!
//! Three roles are represented: one HR manager, two supervisors and three
//! interns with accounts, plus one inactive intern without an account.
//! Intern records share their ids with the matching user accounts.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::activity::{Activity, ActivityKind};
use crate::dataset::{Dataset, IdCounters};
use crate::intern::{Intern, InternStatus};
use crate::notification::{Notification, NotificationKind};
use crate::project::{Project, ProjectStatus};
use crate::role::Role;
use crate::task::{Task, TaskPriority, TaskStatus};
use crate::user::{User, UserProfile};

pub const FIXTURE_PASSWORD: &str = "password123";
pub const DEFAULT_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=Admin";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or_default()
}

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed)
}

fn user(
    id: &str,
    email: &str,
    role: Role,
    first_name: &str,
    last_name: &str,
    department: &str,
    phone: &str,
) -> User {
    let mut user = User::new(
        id.to_string(),
        email.to_string(),
        FIXTURE_PASSWORD.to_string(),
        UserProfile {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            department: department.to_string(),
            phone: phone.to_string(),
            avatar_url: String::new(),
        },
        role,
    );
    user.created_at = at(2024, 1, 8, 9);
    user.updated_at = user.created_at;
    user
}

pub fn users() -> Vec<User> {
    let hr = user(
        "rh-001",
        "rh@company.com",
        Role::HrManager,
        "Sophie",
        "Martin",
        "Ressources Humaines",
        "+33 6 12 34 56 78",
    );

    let mut jean = user(
        "enc-001",
        "encadreur@company.com",
        Role::Supervisor,
        "Jean",
        "Dubois",
        "Informatique",
        "+33 6 23 45 67 89",
    );
    jean.intern_ids = vec!["stg-001".into(), "stg-002".into()];

    let mut marie = user(
        "enc-002",
        "encadreur2@company.com",
        Role::Supervisor,
        "Marie",
        "Bernard",
        "Marketing",
        "+33 6 34 56 78 90",
    );
    marie.intern_ids = vec!["stg-003".into()];

    let interns = [
        ("stg-001", "stagiaire@company.com", "Marie", "Lefebvre", "Informatique", "+33 6 34 56 78 90", "enc-001"),
        ("stg-002", "stagiaire2@company.com", "Thomas", "Moreau", "Informatique", "+33 6 45 67 89 01", "enc-001"),
        ("stg-003", "stagiaire3@company.com", "Lucas", "Petit", "Marketing", "+33 6 56 78 90 12", "enc-002"),
    ];

    let mut users = vec![hr, jean, marie];
    for (id, email, first, last, department, phone, supervisor) in interns {
        let mut account = user(id, email, Role::Intern, first, last, department, phone);
        account.supervisor_id = Some(supervisor.to_string());
        users.push(account);
    }
    users
}

pub fn interns() -> Vec<Intern> {
    let rows = [
        ("stg-001", "Marie Lefebvre", "stagiaire@company.com", "Informatique", date(2024, 2, 1), 72, InternStatus::Active),
        ("stg-002", "Thomas Moreau", "stagiaire2@company.com", "Informatique", date(2024, 2, 15), 45, InternStatus::Active),
        ("stg-003", "Lucas Petit", "stagiaire3@company.com", "Marketing", date(2024, 3, 1), 58, InternStatus::Active),
        ("stg-004", "Camille Roux", "camille.roux@company.com", "Finance", date(2023, 9, 4), 100, InternStatus::Inactive),
    ];

    rows.into_iter()
        .map(|(id, name, email, department, start, progress, status)| {
            let mut intern = Intern::new(
                id.to_string(),
                name.to_string(),
                email.to_string(),
                department.to_string(),
                start,
            );
            intern.avatar = avatar(name.split(' ').next().unwrap_or(name));
            intern.progress = progress;
            intern.status = status;
            intern.created_at = at(2024, 1, 10, 9);
            intern.updated_at = intern.created_at;
            intern
        })
        .collect()
}

pub fn projects() -> Vec<Project> {
    let rows: [(&str, &str, &str, ProjectStatus, &[&str], u8, NaiveDate); 5] = [
        (
            "prj-001",
            "HR Portal Redesign",
            "Rebuild the internal HR portal with the new design system",
            ProjectStatus::InProgress,
            &["stg-001", "stg-002"],
            65,
            date(2025, 6, 30),
        ),
        (
            "prj-002",
            "Mobile App Prototype",
            "Clickable prototype of the employee mobile app",
            ProjectStatus::Todo,
            &["stg-002"],
            10,
            date(2025, 9, 15),
        ),
        (
            "prj-003",
            "Q2 Marketing Campaign",
            "Plan and run the spring recruiting campaign",
            ProjectStatus::InProgress,
            &["stg-003"],
            40,
            date(2025, 5, 31),
        ),
        (
            "prj-004",
            "Legacy Data Migration",
            "Move intern records out of the old spreadsheet",
            ProjectStatus::Done,
            &["stg-001"],
            100,
            date(2024, 12, 20),
        ),
        (
            "prj-005",
            "Brand Guidelines",
            "Document logo, colour and tone rules",
            ProjectStatus::Done,
            &["stg-003"],
            100,
            date(2024, 11, 29),
        ),
    ];

    rows.into_iter()
        .map(|(id, title, description, status, interns, completion, due)| {
            let mut project = Project::new(id.to_string(), title.to_string(), due);
            project.description = Some(description.to_string());
            project.status = status;
            project.assigned_interns = interns.iter().map(|s| s.to_string()).collect();
            project.completion = completion;
            project.created_at = at(2024, 2, 1, 10);
            project.updated_at = project.created_at;
            project
        })
        .collect()
}

pub fn tasks() -> Vec<Task> {
    use TaskPriority::*;
    use TaskStatus::*;

    let rows: [(&str, &str, &str, &str, TaskStatus, TaskPriority, NaiveDate, &[&str]); 12] = [
        ("tsk-001", "Design login screen", "prj-001", "stg-001", Done, High, date(2025, 3, 14), &["design"]),
        ("tsk-002", "Implement API client", "prj-001", "stg-002", InProgress, High, date(2025, 4, 18), &["backend"]),
        ("tsk-003", "Write onboarding docs", "prj-001", "stg-001", Todo, Low, date(2025, 5, 30), &["docs"]),
        ("tsk-004", "Fix date parsing on profile page", "prj-001", "stg-002", Bug, Medium, date(2025, 4, 4), &["frontend"]),
        ("tsk-005", "Draw wireframes", "prj-002", "stg-002", Todo, Medium, date(2025, 7, 11), &["design"]),
        ("tsk-006", "Pick a mobile stack", "prj-002", "stg-002", InProgress, Low, date(2025, 6, 20), &[]),
        ("tsk-007", "Audience research", "prj-003", "stg-003", Done, Medium, date(2025, 3, 28), &["research"]),
        ("tsk-008", "Social media calendar", "prj-003", "stg-003", InProgress, High, date(2025, 5, 2), &[]),
        ("tsk-009", "Broken tracking links", "prj-003", "stg-003", Bug, High, date(2025, 4, 25), &["analytics"]),
        ("tsk-010", "Export legacy tables", "prj-004", "stg-001", Done, Medium, date(2024, 11, 15), &["data"]),
        ("tsk-011", "Validate migrated records", "prj-004", "stg-001", Done, High, date(2024, 12, 13), &["data"]),
        ("tsk-012", "Logo usage rules", "prj-005", "stg-003", Done, Low, date(2024, 11, 22), &["design"]),
    ];

    let mut tasks: Vec<Task> = Vec::with_capacity(rows.len());
    for (id, title, project, assignee, status, priority, due, labels) in rows {
        let position = tasks
            .iter()
            .filter(|t| t.project_id == project && t.status == status)
            .count() as i32;
        let mut task = Task::new(
            id.to_string(),
            title.to_string(),
            project.to_string(),
            assignee.to_string(),
            position,
        );
        task.status = status;
        task.priority = priority;
        task.due_date = Some(due);
        task.labels = labels.iter().map(|l| l.to_string()).collect();
        task.created_at = at(2024, 2, 5, 14);
        task.updated_at = task.created_at;
        tasks.push(task);
    }
    tasks
}

pub fn activities() -> Vec<Activity> {
    let rows = [
        ("act-001", "Jean Dubois", "created project", "Mobile App Prototype", ActivityKind::Project, at(2025, 3, 3, 9)),
        ("act-002", "Marie Lefebvre", "completed task", "Design login screen", ActivityKind::Task, at(2025, 3, 12, 16)),
        ("act-003", "Sophie Martin", "added intern", "Lucas Petit", ActivityKind::Intern, at(2025, 3, 13, 11)),
        ("act-004", "Lucas Petit", "moved task", "Broken tracking links to Bugs", ActivityKind::Task, at(2025, 3, 14, 15)),
    ];

    rows.into_iter()
        .map(|(id, actor, action, target, kind, timestamp)| {
            let mut activity = Activity::new(
                id.to_string(),
                actor.to_string(),
                avatar(actor.split(' ').next().unwrap_or(actor)),
                action,
                target,
                kind,
            );
            activity.timestamp = timestamp;
            activity
        })
        .collect()
}

pub fn notifications() -> Vec<Notification> {
    let rows = [
        ("ntf-001", "Project completed", "Legacy Data Migration was marked as done", NotificationKind::Success, at(2025, 3, 10, 8), true),
        ("ntf-002", "Deadline approaching", "Implement API client is due soon", NotificationKind::Warning, at(2025, 3, 13, 9), false),
        ("ntf-003", "New intern", "Lucas Petit joined the Marketing department", NotificationKind::Info, at(2025, 3, 13, 11), false),
    ];

    rows.into_iter()
        .map(|(id, title, message, kind, timestamp, read)| {
            let mut notification = Notification::new(id.to_string(), title, message, kind);
            notification.timestamp = timestamp;
            notification.read = read;
            notification
        })
        .collect()
}

/// The full seeded dataset, with id counters past the seeded records.
pub fn dataset() -> Dataset {
    let data = Dataset {
        users: users(),
        interns: interns(),
        projects: projects(),
        tasks: tasks(),
        activities: activities(),
        notifications: notifications(),
        counters: IdCounters::default(),
    };
    let counters = IdCounters {
        supervisor: data.users.iter().filter(|u| u.role == Role::Supervisor).count() as u32,
        intern: data.interns.len() as u32,
        project: data.projects.len() as u32,
        task: data.tasks.len() as u32,
        activity: data.activities.len() as u32,
        notification: data.notifications.len() as u32,
    };
    Dataset { counters, ..data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_accounts() {
        let users = users();
        assert_eq!(users.len(), 6);
        assert!(users.iter().all(|u| u.password == FIXTURE_PASSWORD));
        let jean = users.iter().find(|u| u.id == "enc-001").unwrap();
        assert_eq!(jean.intern_ids, vec!["stg-001", "stg-002"]);
        let lucas = users.iter().find(|u| u.id == "stg-003").unwrap();
        assert_eq!(lucas.supervisor_id.as_deref(), Some("enc-002"));
    }

    #[test]
    fn test_references_are_consistent() {
        let data = dataset();
        let intern_ids: HashSet<_> = data.interns.iter().map(|i| i.id.as_str()).collect();
        let project_ids: HashSet<_> = data.projects.iter().map(|p| p.id.as_str()).collect();

        for project in &data.projects {
            for id in &project.assigned_interns {
                assert!(intern_ids.contains(id.as_str()), "{} missing", id);
            }
        }
        for task in &data.tasks {
            assert!(project_ids.contains(task.project_id.as_str()));
            assert!(intern_ids.contains(task.assigned_to.as_str()));
        }
    }

    #[test]
    fn test_positions_are_compact_per_column() {
        let data = dataset();
        let done_positions: Vec<_> = data
            .tasks
            .iter()
            .filter(|t| t.project_id == "prj-004" && t.status == TaskStatus::Done)
            .map(|t| t.position)
            .collect();
        assert_eq!(done_positions, vec![0, 1]);
    }

    #[test]
    fn test_counters_continue_after_fixtures() {
        let mut data = dataset();
        assert_eq!(data.counters.next_task(), "tsk-013");
        assert_eq!(data.counters.next_intern(), "stg-005");
        assert_eq!(data.counters.next_supervisor(), "enc-003");
    }
}
