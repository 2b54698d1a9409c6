use chrono::NaiveDate;
use stagiaire_core::{StagiaireError, StagiaireResult};

use crate::activity;
use crate::auth::{self, Session};
use crate::commands::{
    Command, CreateIntern, CreateProject, CreateSupervisor, CreateTask, DeleteProject, DeleteTask,
    MarkNotificationRead, PushNotification, RecordActivity, ReorderTask, SetTaskStatus,
    UpdateIntern, UpdateProfile, UpdateProject, UpdateTask,
};
use crate::filter::Visibility;
use crate::kanban::{lifecycle, KanbanBoard, MoveDirection, TaskMove};
use crate::metrics::{DashboardMetrics, ReportStats};
use crate::{
    Activity, ActivityKind, AuthUser, Dataset, Intern, InternFilter, InternUpdate, NewIntern,
    NewProject, NewSupervisor, NewTask, Notification, NotificationKind, ProfileUpdate, Project,
    ProjectStatus, ProjectUpdate, Role, Section, StagiaireOperations, SupervisorView, Task,
    TaskFilter, TaskStatus, TaskUpdate,
};

/// The dataset plus the signed-in session. Both front-ends drive this.
///
/// Every read goes through [`Visibility`] for the current user and every
/// mutation is checked against the user's role before a command runs.
#[derive(Debug, Clone)]
pub struct Workspace {
    data: Dataset,
    session: Session,
}

impl Workspace {
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            session: Session::default(),
        }
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn into_data(self) -> Dataset {
        self.data
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Restores a stored session pointer. Returns false for unknown ids.
    pub fn restore_session(&mut self, stored_id: Option<&str>) -> bool {
        self.session = Session::new(auth::restore_session(&self.data.users, stored_id));
        self.session.is_authenticated()
    }

    pub fn visibility(&self) -> StagiaireResult<Visibility> {
        let user = self.current_user()?;
        Ok(Visibility::for_user(&user, &self.data.users))
    }

    fn require_section(&self, section: Section) -> StagiaireResult<AuthUser> {
        let user = self.current_user()?;
        if !section.is_allowed(user.role) {
            return Err(StagiaireError::PermissionDenied(format!(
                "{} cannot access {}",
                user.role.label(),
                section.title()
            )));
        }
        Ok(user)
    }

    fn require_project_manager(&self) -> StagiaireResult<AuthUser> {
        let user = self.current_user()?;
        if !user.role.can_manage_projects() {
            return Err(StagiaireError::PermissionDenied(
                "Only HR managers and supervisors can manage projects".into(),
            ));
        }
        Ok(user)
    }

    /// Supervisors may only staff projects with their own interns.
    fn check_staffing(&self, visibility: &Visibility, interns: &[String]) -> StagiaireResult<()> {
        if let Some(id) = interns.iter().find(|id| !visibility.sees_intern(id)) {
            return Err(StagiaireError::PermissionDenied(format!(
                "Intern {} is not supervised by you",
                id
            )));
        }
        Ok(())
    }

    /// Supervisors hand tasks to their own interns only. Interns may assign a
    /// teammate on a project they share.
    fn check_assignee(&self, intern_id: &str) -> StagiaireResult<()> {
        let visibility = self.visibility()?;
        if matches!(visibility, Visibility::Supervised(_)) {
            self.check_staffing(&visibility, &[intern_id.to_string()])?;
        }
        Ok(())
    }

    fn visible_project(&self, id: &str) -> StagiaireResult<&Project> {
        let visibility = self.visibility()?;
        self.data
            .project(id)
            .filter(|p| visibility.sees_project(p))
            .ok_or_else(|| StagiaireError::not_found("Project", id))
    }

    fn visible_task(&self, id: &str) -> StagiaireResult<&Task> {
        let task = self
            .data
            .task(id)
            .ok_or_else(|| StagiaireError::not_found("Task", id))?;
        self.visible_project(&task.project_id)
            .map_err(|_| StagiaireError::not_found("Task", id))?;
        Ok(task)
    }

    fn execute(&mut self, command: &dyn Command) -> StagiaireResult<()> {
        self.data.execute(command)
    }

    fn record(&mut self, action: &str, target: &str, kind: ActivityKind) -> StagiaireResult<()> {
        let user = self.current_user()?;
        self.execute(&RecordActivity {
            actor_name: user.display_name(),
            actor_avatar: user.profile.avatar_url.clone(),
            action: action.to_string(),
            target: target.to_string(),
            kind,
        })
    }

    fn commit_move(&mut self, task_move: &TaskMove) -> StagiaireResult<()> {
        if task_move.changed_column() {
            let title = self.get_task(&task_move.task_id)?.title;
            self.record(
                "moved task",
                &format!("{} to {}", title, task_move.to.column_title()),
                ActivityKind::Task,
            )?;
        }
        Ok(())
    }
}

impl StagiaireOperations for Workspace {
    fn sign_in(&mut self, email: &str, password: &str) -> StagiaireResult<AuthUser> {
        let user = auth::authenticate(&self.data.users, email, password)?;
        self.session.sign_in(user.clone());
        Ok(user)
    }

    fn sign_out(&mut self) -> Option<AuthUser> {
        let user = self.session.sign_out();
        if let Some(user) = &user {
            tracing::info!(user_id = %user.id, "signed out");
        }
        user
    }

    fn current_user(&self) -> StagiaireResult<AuthUser> {
        self.session
            .user
            .clone()
            .ok_or_else(|| StagiaireError::Authentication("Not signed in".into()))
    }

    fn sections(&self) -> StagiaireResult<Vec<Section>> {
        Ok(Section::for_role(self.current_user()?.role))
    }

    fn dashboard_metrics(&self) -> StagiaireResult<DashboardMetrics> {
        let user = self.require_section(Section::Dashboard)?;
        let visibility = Visibility::for_user(&user, &self.data.users);
        Ok(DashboardMetrics::compute(
            user.role,
            &visibility,
            &self.data.interns,
            &self.data.projects,
            &self.data.tasks,
        ))
    }

    fn recent_activity(&self, limit: usize) -> StagiaireResult<Vec<Activity>> {
        self.current_user()?;
        Ok(activity::recent(&self.data.activities, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    fn report_stats(&self, today: NaiveDate) -> StagiaireResult<ReportStats> {
        let user = self.require_section(Section::Reports)?;
        let visibility = Visibility::for_user(&user, &self.data.users);
        Ok(ReportStats::compute(
            &visibility,
            &self.data.interns,
            &self.data.projects,
            &self.data.tasks,
            today,
        ))
    }

    fn list_interns(&self, filter: InternFilter) -> StagiaireResult<Vec<Intern>> {
        self.require_section(Section::Interns)?;
        Ok(self
            .visibility()?
            .interns(&self.data.interns)
            .into_iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect())
    }

    fn get_intern(&self, id: &str) -> StagiaireResult<Intern> {
        self.require_section(Section::Interns)?;
        let visibility = self.visibility()?;
        self.data
            .intern(id)
            .filter(|i| visibility.sees_intern(&i.id))
            .cloned()
            .ok_or_else(|| StagiaireError::not_found("Intern", id))
    }

    fn create_intern(&mut self, mut intern: NewIntern) -> StagiaireResult<Intern> {
        let user = self.require_section(Section::Interns)?;
        if user.role == Role::Supervisor {
            intern.supervisor_id = Some(user.id.clone());
        }
        self.execute(&CreateIntern { intern })?;
        let created = self.data.interns.last().cloned().ok_or_else(|| {
            StagiaireError::Internal("Intern creation succeeded but intern not found".into())
        })?;
        self.record("added intern", &created.name, ActivityKind::Intern)?;
        Ok(created)
    }

    fn update_intern(&mut self, id: &str, updates: InternUpdate) -> StagiaireResult<Intern> {
        self.get_intern(id)?;
        self.execute(&UpdateIntern {
            intern_id: id.to_string(),
            updates,
        })?;
        let updated = self.get_intern(id)?;
        self.record("updated intern", &updated.name, ActivityKind::Intern)?;
        Ok(updated)
    }

    fn list_supervisors(&self) -> StagiaireResult<Vec<SupervisorView>> {
        self.require_section(Section::Supervisors)?;
        Ok(self
            .data
            .users
            .iter()
            .filter(|u| u.role == Role::Supervisor)
            .map(SupervisorView::from)
            .collect())
    }

    fn get_supervisor(&self, id: &str) -> StagiaireResult<SupervisorView> {
        self.require_section(Section::Supervisors)?;
        self.data
            .user(id)
            .filter(|u| u.role == Role::Supervisor)
            .map(SupervisorView::from)
            .ok_or_else(|| StagiaireError::not_found("Supervisor", id))
    }

    fn create_supervisor(&mut self, supervisor: NewSupervisor) -> StagiaireResult<SupervisorView> {
        self.require_section(Section::Supervisors)?;
        self.execute(&CreateSupervisor { supervisor })?;
        let created = self
            .data
            .users
            .last()
            .map(SupervisorView::from)
            .ok_or_else(|| {
                StagiaireError::Internal("Supervisor creation succeeded but account not found".into())
            })?;
        self.record("added supervisor", &created.user.display_name(), ActivityKind::Intern)?;
        Ok(created)
    }

    fn list_projects(&self) -> StagiaireResult<Vec<Project>> {
        let visibility = self.visibility()?;
        Ok(visibility
            .projects(&self.data.projects)
            .into_iter()
            .cloned()
            .collect())
    }

    fn get_project(&self, id: &str) -> StagiaireResult<Project> {
        self.visible_project(id).cloned()
    }

    fn create_project(&mut self, project: NewProject) -> StagiaireResult<Project> {
        self.require_project_manager()?;
        self.check_staffing(&self.visibility()?, &project.assigned_interns)?;
        self.execute(&CreateProject { project })?;
        let created = self.data.projects.last().cloned().ok_or_else(|| {
            StagiaireError::Internal("Project creation succeeded but project not found".into())
        })?;
        self.record("created project", &created.title, ActivityKind::Project)?;
        Ok(created)
    }

    fn update_project(&mut self, id: &str, updates: ProjectUpdate) -> StagiaireResult<Project> {
        self.require_project_manager()?;
        let was_done = self.visible_project(id)?.is_done();
        if let Some(interns) = &updates.assigned_interns {
            self.check_staffing(&self.visibility()?, interns)?;
        }
        self.execute(&UpdateProject {
            project_id: id.to_string(),
            updates,
        })?;
        let updated = self.data.project(id).cloned().ok_or_else(|| {
            StagiaireError::Internal("Project update succeeded but project not found".into())
        })?;

        self.record("updated project", &updated.title, ActivityKind::Project)?;
        if updated.status == ProjectStatus::Done && !was_done {
            self.execute(&PushNotification {
                title: "Project completed".into(),
                message: format!("{} was marked as done", updated.title),
                kind: NotificationKind::Success,
            })?;
        }
        Ok(updated)
    }

    fn delete_project(&mut self, id: &str) -> StagiaireResult<()> {
        self.require_project_manager()?;
        let title = self.visible_project(id)?.title.clone();
        self.execute(&DeleteProject {
            project_id: id.to_string(),
        })?;
        self.record("deleted project", &title, ActivityKind::Project)
    }

    fn list_tasks(&self, filter: TaskFilter) -> StagiaireResult<Vec<Task>> {
        let visibility = self.visibility()?;
        let mut tasks: Vec<Task> = visibility
            .tasks(&self.data.projects, &self.data.tasks)
            .into_iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            (&a.project_id, a.status, a.position).cmp(&(&b.project_id, b.status, b.position))
        });
        Ok(tasks)
    }

    fn get_task(&self, id: &str) -> StagiaireResult<Task> {
        self.visible_task(id).cloned()
    }

    fn create_task(&mut self, task: NewTask) -> StagiaireResult<Task> {
        self.visible_project(&task.project_id)?;
        self.check_assignee(&task.assigned_to)?;
        self.execute(&CreateTask { task })?;
        let created = self.data.tasks.last().cloned().ok_or_else(|| {
            StagiaireError::Internal("Task creation succeeded but task not found".into())
        })?;
        self.record("created task", &created.title, ActivityKind::Task)?;
        Ok(created)
    }

    fn update_task(&mut self, id: &str, updates: TaskUpdate) -> StagiaireResult<Task> {
        let before = self.visible_task(id)?.status;
        if let Some(assignee) = &updates.assigned_to {
            self.check_assignee(assignee)?;
        }
        self.execute(&UpdateTask {
            task_id: id.to_string(),
            updates,
        })?;
        let updated = self.get_task(id)?;
        let action = if updated.is_done() && before != TaskStatus::Done {
            "completed task"
        } else {
            "updated task"
        };
        self.record(action, &updated.title, ActivityKind::Task)?;
        Ok(updated)
    }

    fn delete_task(&mut self, id: &str) -> StagiaireResult<()> {
        let title = self.visible_task(id)?.title.clone();
        self.execute(&DeleteTask {
            task_id: id.to_string(),
        })?;
        self.record("deleted task", &title, ActivityKind::Task)
    }

    fn open_board(&self, project_id: &str) -> StagiaireResult<KanbanBoard> {
        let project = self.visible_project(project_id)?;
        Ok(KanbanBoard::open(project, &self.data.tasks))
    }

    fn drop_task(
        &mut self,
        task_id: &str,
        status: TaskStatus,
        position: Option<usize>,
    ) -> StagiaireResult<TaskMove> {
        let from = self.visible_task(task_id)?.status;
        let command: Box<dyn Command> = match position {
            Some(position) => Box::new(ReorderTask {
                task_id: task_id.to_string(),
                status,
                position,
            }),
            None => Box::new(SetTaskStatus {
                task_id: task_id.to_string(),
                status,
            }),
        };
        self.execute(command.as_ref())?;

        let placed = self.get_task(task_id)?;
        let task_move = TaskMove {
            task_id: task_id.to_string(),
            from,
            to: status,
            position: placed.position,
        };
        tracing::debug!(task_id, %from, to = %status, position = placed.position, "task dropped");
        self.commit_move(&task_move)?;
        Ok(task_move)
    }

    fn move_task(
        &mut self,
        task_id: &str,
        direction: MoveDirection,
    ) -> StagiaireResult<Option<TaskMove>> {
        let status = self.visible_task(task_id)?.status;
        match lifecycle::adjacent_status(status, direction) {
            Some(target) => self.drop_task(task_id, target, None).map(Some),
            None => Ok(None),
        }
    }

    fn list_notifications(&self) -> StagiaireResult<Vec<Notification>> {
        self.current_user()?;
        Ok(self.data.notifications.clone())
    }

    fn mark_notification_read(&mut self, id: &str) -> StagiaireResult<Notification> {
        self.current_user()?;
        self.execute(&MarkNotificationRead {
            notification_id: Some(id.to_string()),
        })?;
        self.data
            .notifications
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| StagiaireError::not_found("Notification", id))
    }

    fn mark_all_notifications_read(&mut self) -> StagiaireResult<usize> {
        self.current_user()?;
        let unread = crate::notification::unread_count(&self.data.notifications);
        self.execute(&MarkNotificationRead {
            notification_id: None,
        })?;
        Ok(unread)
    }

    fn update_profile(&mut self, updates: ProfileUpdate) -> StagiaireResult<AuthUser> {
        let user = self.current_user()?;
        self.execute(&UpdateProfile {
            user_id: user.id.clone(),
            updates,
        })?;
        let refreshed = self
            .data
            .user(&user.id)
            .map(|u| u.to_auth_user())
            .ok_or_else(|| StagiaireError::not_found("User", &user.id))?;
        self.session.sign_in(refreshed.clone());
        Ok(refreshed)
    }
}
