use chrono::NaiveDate;

use crate::kanban::{KanbanBoard, MoveDirection, TaskMove};
use crate::metrics::{DashboardMetrics, ReportStats};
use crate::{
    Activity, AuthUser, Intern, InternFilter, InternUpdate, NewIntern, NewProject, NewSupervisor,
    NewTask, Notification, ProfileUpdate, Project, ProjectUpdate, Section, SupervisorView, Task,
    TaskFilter, TaskStatus, TaskUpdate,
};
use stagiaire_core::StagiaireResult;

/// Trait ensuring TUI and CLI implement the same operations.
/// Adding a method here forces both front-ends to go through it.
pub trait StagiaireOperations {
    // Session
    fn sign_in(&mut self, email: &str, password: &str) -> StagiaireResult<AuthUser>;
    fn sign_out(&mut self) -> Option<AuthUser>;
    fn current_user(&self) -> StagiaireResult<AuthUser>;

    // Navigation and dashboard
    fn sections(&self) -> StagiaireResult<Vec<Section>>;
    fn dashboard_metrics(&self) -> StagiaireResult<DashboardMetrics>;
    fn recent_activity(&self, limit: usize) -> StagiaireResult<Vec<Activity>>;
    fn report_stats(&self, today: NaiveDate) -> StagiaireResult<ReportStats>;

    // Intern operations
    fn list_interns(&self, filter: InternFilter) -> StagiaireResult<Vec<Intern>>;
    fn get_intern(&self, id: &str) -> StagiaireResult<Intern>;
    fn create_intern(&mut self, intern: NewIntern) -> StagiaireResult<Intern>;
    fn update_intern(&mut self, id: &str, updates: InternUpdate) -> StagiaireResult<Intern>;

    // Supervisor operations
    fn list_supervisors(&self) -> StagiaireResult<Vec<SupervisorView>>;
    fn get_supervisor(&self, id: &str) -> StagiaireResult<SupervisorView>;
    fn create_supervisor(&mut self, supervisor: NewSupervisor) -> StagiaireResult<SupervisorView>;

    // Project operations
    fn list_projects(&self) -> StagiaireResult<Vec<Project>>;
    fn get_project(&self, id: &str) -> StagiaireResult<Project>;
    fn create_project(&mut self, project: NewProject) -> StagiaireResult<Project>;
    fn update_project(&mut self, id: &str, updates: ProjectUpdate) -> StagiaireResult<Project>;
    fn delete_project(&mut self, id: &str) -> StagiaireResult<()>;

    // Task operations
    fn list_tasks(&self, filter: TaskFilter) -> StagiaireResult<Vec<Task>>;
    fn get_task(&self, id: &str) -> StagiaireResult<Task>;
    fn create_task(&mut self, task: NewTask) -> StagiaireResult<Task>;
    fn update_task(&mut self, id: &str, updates: TaskUpdate) -> StagiaireResult<Task>;
    fn delete_task(&mut self, id: &str) -> StagiaireResult<()>;

    // Kanban
    fn open_board(&self, project_id: &str) -> StagiaireResult<KanbanBoard>;
    fn drop_task(
        &mut self,
        task_id: &str,
        status: TaskStatus,
        position: Option<usize>,
    ) -> StagiaireResult<TaskMove>;
    fn move_task(&mut self, task_id: &str, direction: MoveDirection)
        -> StagiaireResult<Option<TaskMove>>;

    // Notifications
    fn list_notifications(&self) -> StagiaireResult<Vec<Notification>>;
    fn mark_notification_read(&mut self, id: &str) -> StagiaireResult<Notification>;
    fn mark_all_notifications_read(&mut self) -> StagiaireResult<usize>;

    // Settings
    fn update_profile(&mut self, updates: ProfileUpdate) -> StagiaireResult<AuthUser>;
}
