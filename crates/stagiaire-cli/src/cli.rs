use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stagiaire")]
#[command(about = "Internship management from the terminal", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STAGIAIRE_BUILD_COMMIT"), ")"))]
pub struct Cli {
    /// Path to the data file (or set STAGIAIRE_FILE env var)
    #[arg(long, global = true, value_name = "FILE", env = "STAGIAIRE_FILE")]
    pub file: Option<PathBuf>,

    /// Path to the local storage file holding session and preferences
    #[arg(long, global = true, value_name = "FILE", env = "STAGIAIRE_STORAGE")]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List the sections the signed-in role may open
    Nav,
    /// Greeting, metric cards and recent activity
    Dashboard {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Reports section statistics
    Stats,
    /// Intern operations
    Intern(InternCommand),
    /// Supervisor operations
    Supervisor(SupervisorCommand),
    /// Project operations
    Project(ProjectCommand),
    /// Task operations
    Task(TaskCommand),
    /// Kanban board operations
    Kanban(KanbanCommand),
    /// Recent activity feed
    Activity {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Notification operations
    Notification(NotificationCommand),
    /// Profile, theme and avatar settings
    Settings(SettingsCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Intern commands
#[derive(Args)]
pub struct InternCommand {
    #[command(subcommand)]
    pub action: InternAction,
}

#[derive(Subcommand)]
pub enum InternAction {
    /// List interns visible to the signed-in user
    List {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a specific intern
    Get {
        #[arg(long)]
        id: String,
    },
    /// Add an intern
    Add(InternAddArgs),
    /// Update an intern
    Update(InternUpdateArgs),
}

#[derive(Args)]
pub struct InternAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub department: String,
    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    pub start_date: Option<String>,
    /// Supervisor account id (HR only; supervisors always add to themselves)
    #[arg(long)]
    pub supervisor: Option<String>,
}

#[derive(Args)]
pub struct InternUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub progress: Option<u8>,
}

// Supervisor commands
#[derive(Args)]
pub struct SupervisorCommand {
    #[command(subcommand)]
    pub action: SupervisorAction,
}

#[derive(Subcommand)]
pub enum SupervisorAction {
    /// List supervisors
    List,
    /// Get a specific supervisor
    Get {
        #[arg(long)]
        id: String,
    },
    /// Add a supervisor account
    Add(SupervisorAddArgs),
}

#[derive(Args)]
pub struct SupervisorAddArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub department: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}

// Project commands
#[derive(Args)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects visible to the signed-in user
    List,
    /// Get a specific project
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a project
    Create(ProjectCreateArgs),
    /// Update a project
    Update(ProjectUpdateArgs),
    /// Delete a project and its tasks
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct ProjectCreateArgs {
    #[arg(long)]
    pub title: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub due_date: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Intern id to assign; repeat for several
    #[arg(long = "intern")]
    pub interns: Vec<String>,
}

#[derive(Args)]
pub struct ProjectUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub completion: Option<u8>,
    #[arg(long)]
    pub due_date: Option<String>,
    /// Replaces the assigned interns; repeat for several
    #[arg(long = "intern")]
    pub interns: Vec<String>,
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks with optional filters
    List {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Get a specific task
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a task
    Create(TaskCreateArgs),
    /// Update a task
    Update(TaskUpdateArgs),
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub assignee: String,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub due_date: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "label")]
    pub labels: Vec<String>,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub due_date: Option<String>,
    #[arg(long)]
    pub clear_due_date: bool,
    /// Replaces the labels; repeat for several
    #[arg(long = "label")]
    pub labels: Vec<String>,
}

// Kanban commands
#[derive(Args)]
pub struct KanbanCommand {
    #[command(subcommand)]
    pub action: KanbanAction,
}

#[derive(Subcommand)]
pub enum KanbanAction {
    /// Show a project's board
    Show {
        #[arg(long)]
        project: String,
    },
    /// Drop a task on a column
    Drop {
        #[arg(long)]
        task: String,
        /// todo, in-progress, done or bug
        #[arg(long)]
        column: String,
        /// Index inside the column, defaults to the end
        #[arg(long)]
        position: Option<usize>,
    },
    /// Move a task to the adjacent column
    Move {
        #[arg(long)]
        task: String,
        /// left or right
        #[arg(long)]
        direction: String,
    },
}

// Notification commands
#[derive(Args)]
pub struct NotificationCommand {
    #[command(subcommand)]
    pub action: NotificationAction,
}

#[derive(Subcommand)]
pub enum NotificationAction {
    /// List notifications
    List,
    /// Mark one notification as read
    Read {
        #[arg(long)]
        id: String,
    },
    /// Mark every notification as read
    ReadAll,
}

// Settings commands
#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Update the signed-in user's profile
    Profile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Show or set the theme: light, dark or toggle
    Theme { value: Option<String> },
    /// Show, set or clear the profile image
    Avatar {
        #[arg(long, value_name = "PATH", conflicts_with = "clear")]
        image: Option<PathBuf>,
        #[arg(long)]
        clear: bool,
    },
}
