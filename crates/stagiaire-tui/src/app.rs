use crate::events::{Event, EventHandler};
use crate::theme::{palette, Palette};
use crate::ui;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use stagiaire_core::{AppConfig, InputState, SelectionState, StagiaireResult, Theme};
use stagiaire_domain::{
    KanbanBoard, Navigator, NewTask, Section, StagiaireOperations, TaskPriority, TaskStatus, Workspace,
};
use stagiaire_persistence::{DatasetStore, LocalStorage};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: InputState,
    pub password: InputState,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: InputState::new(),
            password: InputState::masked(),
            focus: LoginField::Email,
            error: None,
        }
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Board section state: which project is open and where the cursor sits.
#[derive(Debug, Clone, Default)]
pub struct KanbanState {
    pub project_index: usize,
    pub board: Option<KanbanBoard>,
    /// Index into `TaskStatus::ALL`.
    pub column: usize,
    pub selection: SelectionState,
    pub form: Option<TaskForm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFormField {
    Title,
    Assignee,
    Priority,
}

const PRIORITIES: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

/// "New task" popup of the board. The task lands in `status`, the column that
/// had focus when the form was opened.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub project_id: String,
    pub status: TaskStatus,
    pub title: InputState,
    /// Interns of the project the current user may hand the task to.
    pub assignees: Vec<String>,
    pub assignee: usize,
    pub priority: TaskPriority,
    pub focus: TaskFormField,
    pub error: Option<String>,
}

impl TaskForm {
    pub fn new(project_id: String, status: TaskStatus, assignees: Vec<String>) -> Self {
        Self {
            project_id,
            status,
            title: InputState::new(),
            assignees,
            assignee: 0,
            priority: TaskPriority::Medium,
            focus: TaskFormField::Title,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            TaskFormField::Title => TaskFormField::Assignee,
            TaskFormField::Assignee => TaskFormField::Priority,
            TaskFormField::Priority => TaskFormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            TaskFormField::Title => TaskFormField::Priority,
            TaskFormField::Assignee => TaskFormField::Title,
            TaskFormField::Priority => TaskFormField::Assignee,
        };
    }

    /// Left/right on the focused field: moves the cursor in the title, cycles
    /// the choice otherwise.
    pub fn shift(&mut self, forward: bool) {
        match self.focus {
            TaskFormField::Title if forward => self.title.move_right(),
            TaskFormField::Title => self.title.move_left(),
            TaskFormField::Assignee => {
                self.assignee = cycle(self.assignee, self.assignees.len(), forward);
            }
            TaskFormField::Priority => {
                let current = PRIORITIES.iter().position(|p| *p == self.priority).unwrap_or(1);
                self.priority = PRIORITIES[cycle(current, PRIORITIES.len(), forward)];
            }
        }
    }

    pub fn selected_assignee(&self) -> Option<&str> {
        self.assignees.get(self.assignee).map(String::as_str)
    }

    pub fn to_new_task(&self) -> NewTask {
        NewTask {
            title: self.title.as_str().to_string(),
            description: None,
            project_id: self.project_id.clone(),
            assigned_to: self.selected_assignee().unwrap_or_default().to_string(),
            priority: self.priority,
            status: self.status,
            due_date: None,
            labels: Vec::new(),
        }
    }
}

fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

impl KanbanState {
    pub fn focused_status(&self) -> TaskStatus {
        TaskStatus::ALL[self.column.min(TaskStatus::ALL.len() - 1)]
    }

    pub fn is_dragging(&self) -> bool {
        self.board.as_ref().is_some_and(|b| b.drag().is_active())
    }

    pub fn focused_len(&self) -> usize {
        self.board
            .as_ref()
            .map_or(0, |b| b.column(self.focused_status()).tasks.len())
    }

    pub fn selected_task_id(&self) -> Option<String> {
        let board = self.board.as_ref()?;
        let column = board.column(self.focused_status());
        column
            .tasks
            .get(self.selection.get()?)
            .map(|task| task.id.clone())
    }
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub workspace: Workspace,
    pub storage: LocalStorage,
    pub theme: Theme,
    pub login: LoginForm,
    pub navigator: Option<Navigator>,
    pub list_selection: SelectionState,
    pub kanban: KanbanState,
    pub status_message: Option<String>,
    pub recent_activity_limit: usize,
    store: Option<DatasetStore>,
}

impl App {
    /// Builds the app over an already loaded workspace. A session id found in
    /// `storage` skips the login screen.
    pub fn new(
        workspace: Workspace,
        storage: LocalStorage,
        store: Option<DatasetStore>,
        config: &AppConfig,
    ) -> Self {
        let theme = storage.theme().unwrap_or_else(|| config.effective_theme());
        let mut app = Self {
            should_quit: false,
            screen: Screen::Login,
            workspace,
            storage,
            theme,
            login: LoginForm::new(),
            navigator: None,
            list_selection: SelectionState::new(),
            kanban: KanbanState::default(),
            status_message: None,
            recent_activity_limit: config.effective_recent_activity_limit(),
            store,
        };

        let stored = app.storage.session_user_id().map(str::to_string);
        if app.workspace.restore_session(stored.as_deref()) {
            tracing::info!("Restored session for {:?}", stored);
            app.enter_main();
        }
        app
    }

    /// Loads (or seeds) the data file and opens the storage file.
    pub async fn load(config: &AppConfig, data_file: &Path, storage_file: &Path) -> StagiaireResult<Self> {
        let store = DatasetStore::new(data_file);
        let data = store.load_or_seed().await?;
        let storage = LocalStorage::open(storage_file).await?;
        Ok(Self::new(Workspace::new(data), storage, Some(store), config))
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn palette(&self) -> &'static Palette {
        palette(self.theme)
    }

    pub fn active_section(&self) -> Option<Section> {
        self.navigator.as_ref().map(Navigator::active)
    }

    pub(crate) fn enter_main(&mut self) {
        let Ok(user) = self.workspace.current_user() else {
            return;
        };
        self.navigator = Some(Navigator::new(user.role));
        self.screen = Screen::Main;
        self.login = LoginForm::new();
        self.list_selection = SelectionState::new();
        self.kanban = KanbanState::default();
    }

    pub(crate) async fn persist(&self) -> StagiaireResult<()> {
        if let Some(store) = &self.store {
            store.save(self.workspace.data()).await?;
        }
        Ok(())
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        let result = match self.screen {
            Screen::Login => self.handle_login_key(key).await,
            Screen::Main => self.handle_main_key(key).await,
        };

        if let Err(err) = result {
            tracing::warn!("Key {:?} failed: {}", key.code, err);
            self.status_message = Some(err.to_string());
        }
    }

    pub async fn run(&mut self) -> StagiaireResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::default();

        let outcome = self.run_with(&mut terminal, &mut events).await;
        events.stop();
        settle(outcome, restore_terminal(&mut terminal))
    }

    /// Draws and handles events until quit or until the event source closes.
    pub async fn run_with<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> StagiaireResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key).await,
                Some(Event::Tick | Event::Resize) => {}
                None => break,
            }
        }
        Ok(())
    }
}

/// The loop's own error wins over a failed terminal restore.
fn settle(outcome: StagiaireResult<()>, restored: io::Result<()>) -> StagiaireResult<()> {
    match (outcome, restored) {
        (Err(err), Err(restore_err)) => {
            tracing::warn!("Terminal restore failed after {}: {}", err, restore_err);
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored.map_err(Into::into),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
