pub mod activity;
pub mod auth;
pub mod commands;
pub mod dataset;
pub mod field_update;
pub mod filter;
pub mod fixtures;
pub mod intern;
pub mod kanban;
pub mod metrics;
pub mod navigation;
pub mod notification;
pub mod operations;
pub mod project;
pub mod role;
pub mod task;
pub mod user;
pub mod workspace;

pub use activity::{Activity, ActivityId, ActivityKind};
pub use auth::{authenticate, Session};
pub use dataset::{Dataset, IdCounters};
pub use field_update::FieldUpdate;
pub use filter::{RecordFilter, Visibility};
pub use intern::{Intern, InternFilter, InternId, InternStatus, InternUpdate, NewIntern};
pub use kanban::{KanbanBoard, MoveDirection, TaskMove};
pub use metrics::{DashboardMetrics, ReportStats};
pub use navigation::{Navigator, Section};
pub use notification::{Notification, NotificationId, NotificationKind};
pub use operations::StagiaireOperations;
pub use project::{NewProject, Project, ProjectId, ProjectStatus, ProjectUpdate};
pub use role::Role;
pub use task::{NewTask, Task, TaskFilter, TaskId, TaskPriority, TaskStatus, TaskUpdate};
pub use user::{AuthUser, NewSupervisor, ProfileUpdate, SupervisorView, User, UserId, UserProfile};
pub use workspace::Workspace;
