use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use stagiaire_core::{AppConfig, Theme};
use stagiaire_domain::{fixtures, Section, StagiaireOperations, TaskPriority, TaskStatus, Workspace};
use stagiaire_persistence::LocalStorage;
use stagiaire_tui::events::{Event, EventHandler};
use stagiaire_tui::{ui, App, LoginField, Screen, TaskFormField};
use tempfile::{tempdir, TempDir};
use tokio::sync::mpsc;

async fn new_app(dir: &TempDir) -> App {
    let storage = LocalStorage::open(dir.path().join("storage.json"))
        .await
        .unwrap();
    App::new(
        Workspace::new(fixtures::dataset()),
        storage,
        None,
        &AppConfig::default(),
    )
}

async fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .await;
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

async fn sign_in(app: &mut App, email: &str) {
    type_text(app, email).await;
    press(app, KeyCode::Tab).await;
    type_text(app, fixtures::FIXTURE_PASSWORD).await;
    press(app, KeyCode::Enter).await;
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_wrong_password_shows_error_and_clears_password() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;

    type_text(&mut app, "rh@company.com").await;
    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.login.focus, LoginField::Password);
    type_text(&mut app, "nope").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.screen, Screen::Login);
    assert_eq!(app.login.error.as_deref(), Some("Incorrect email or password"));
    assert!(app.login.password.is_empty());
    assert_eq!(app.login.email.as_str(), "rh@company.com");
    assert!(app.storage.session_user_id().is_none());
    assert!(screen_text(&app).contains("Incorrect email or password"));
}

#[tokio::test]
async fn test_sign_in_persists_session_and_is_restored() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;

    sign_in(&mut app, "encadreur@company.com").await;
    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.active_section(), Some(Section::Dashboard));
    assert_eq!(app.storage.session_user_id(), Some("enc-001"));

    let restored = new_app(&dir).await;
    assert_eq!(restored.screen, Screen::Main);
    assert_eq!(restored.workspace.current_user().unwrap().id, "enc-001");
    assert!(screen_text(&restored).contains("Jean Dubois"));
}

#[tokio::test]
async fn test_sign_out_clears_session() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "stagiaire@company.com").await;

    press(&mut app, KeyCode::Char('L')).await;

    assert_eq!(app.screen, Screen::Login);
    assert!(app.navigator.is_none());
    assert!(app.workspace.current_user().is_err());
    assert!(app.storage.session_user_id().is_none());

    let reopened = new_app(&dir).await;
    assert_eq!(reopened.screen, Screen::Login);
}

#[tokio::test]
async fn test_intern_sidebar_and_section_keys() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "stagiaire@company.com").await;

    let sections = app.navigator.as_ref().unwrap().sections();
    assert_eq!(
        sections,
        vec![Section::Dashboard, Section::Projects, Section::Kanban, Section::Settings]
    );

    press(&mut app, KeyCode::Char('2')).await;
    assert_eq!(app.active_section(), Some(Section::Projects));

    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.active_section(), Some(Section::Kanban));

    press(&mut app, KeyCode::BackTab).await;
    press(&mut app, KeyCode::BackTab).await;
    assert_eq!(app.active_section(), Some(Section::Dashboard));

    // Out of range digits are ignored.
    press(&mut app, KeyCode::Char('7')).await;
    assert_eq!(app.active_section(), Some(Section::Dashboard));
    assert!(!screen_text(&app).contains("Supervisors"));
}

#[tokio::test]
async fn test_theme_toggle_is_persisted() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "rh@company.com").await;
    assert_eq!(app.theme, Theme::Light);

    press(&mut app, KeyCode::Char('t')).await;
    assert_eq!(app.theme, Theme::Dark);

    let storage = LocalStorage::open(dir.path().join("storage.json"))
        .await
        .unwrap();
    assert_eq!(storage.theme(), Some(Theme::Dark));

    let reopened = new_app(&dir).await;
    assert_eq!(reopened.theme, Theme::Dark);
}

#[tokio::test]
async fn test_keyboard_drag_and_drop_moves_only_the_dragged_task() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "rh@company.com").await;
    app.navigate(Section::Kanban).unwrap();

    let board = app.kanban.board.as_ref().unwrap();
    assert_eq!(board.project_id(), "prj-001");
    let before: Vec<_> = board
        .tasks()
        .iter()
        .map(|t| (t.id.clone(), t.status))
        .collect();
    assert_eq!(app.kanban.selected_task_id().as_deref(), Some("tsk-003"));

    press(&mut app, KeyCode::Char(' ')).await;
    assert!(app.kanban.is_dragging());
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('l')).await;
    }
    assert_eq!(
        app.kanban.board.as_ref().unwrap().drag().over,
        Some(TaskStatus::Bug)
    );
    press(&mut app, KeyCode::Enter).await;

    assert!(!app.kanban.is_dragging());
    for (id, status) in before {
        let now = app.workspace.get_task(&id).unwrap().status;
        if id == "tsk-003" {
            assert_eq!(now, TaskStatus::Bug);
        } else {
            assert_eq!(now, status);
        }
    }
    assert_eq!(app.kanban.focused_status(), TaskStatus::Bug);
    assert_eq!(app.kanban.selected_task_id().as_deref(), Some("tsk-003"));
    assert!(app.status_message.as_deref().unwrap().starts_with("Moved"));

    let activity = app.workspace.recent_activity(1).unwrap();
    assert_eq!(activity[0].action, "moved task");
}

#[tokio::test]
async fn test_escape_cancels_drag() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "rh@company.com").await;
    app.navigate(Section::Kanban).unwrap();

    press(&mut app, KeyCode::Char(' ')).await;
    press(&mut app, KeyCode::Char('l')).await;
    press(&mut app, KeyCode::Esc).await;

    assert!(!app.kanban.is_dragging());
    assert_eq!(
        app.workspace.get_task("tsk-003").unwrap().status,
        TaskStatus::Todo
    );
}

#[tokio::test]
async fn test_brackets_switch_project() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "rh@company.com").await;
    app.navigate(Section::Kanban).unwrap();

    press(&mut app, KeyCode::Char(']')).await;
    assert_eq!(app.kanban.board.as_ref().unwrap().project_id(), "prj-002");

    press(&mut app, KeyCode::Char('[')).await;
    press(&mut app, KeyCode::Char('[')).await;
    assert_eq!(app.kanban.board.as_ref().unwrap().project_id(), "prj-005");

    let text = screen_text(&app);
    assert!(text.contains("To Do"));
    assert!(text.contains("Bugs"));
    assert!(text.contains("Brand Guidelines"));
}

#[tokio::test]
async fn test_q_quits_from_main_but_types_on_login() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;

    type_text(&mut app, "q").await;
    assert!(!app.should_quit);
    assert_eq!(app.login.email.as_str(), "q");

    press(&mut app, KeyCode::Backspace).await;
    sign_in(&mut app, "rh@company.com").await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_new_task_form_creates_task_in_focused_column() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "rh@company.com").await;
    app.navigate(Section::Kanban).unwrap();
    let todo_before = app
        .kanban
        .board
        .as_ref()
        .unwrap()
        .column(TaskStatus::Todo)
        .tasks
        .len();

    press(&mut app, KeyCode::Char('n')).await;
    let form = app.kanban.form.as_ref().unwrap();
    assert_eq!(form.status, TaskStatus::Todo);
    assert_eq!(form.assignees, vec!["stg-001", "stg-002"]);
    assert!(screen_text(&app).contains("New task in To Do"));

    // q and Q are text while the form is open.
    type_text(&mut app, "Quarterly review").await;
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Right).await;
    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.kanban.form.as_ref().unwrap().focus, TaskFormField::Priority);
    press(&mut app, KeyCode::Right).await;
    press(&mut app, KeyCode::Enter).await;

    assert!(app.kanban.form.is_none());
    let column = app.kanban.board.as_ref().unwrap().column(TaskStatus::Todo);
    assert_eq!(column.tasks.len(), todo_before + 1);
    let id = app.kanban.selected_task_id().unwrap();
    let task = app.workspace.get_task(&id).unwrap();
    assert_eq!(task.title, "Quarterly review");
    assert_eq!(task.project_id, "prj-001");
    assert_eq!(task.assigned_to, "stg-002");
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(app.workspace.recent_activity(1).unwrap()[0].action, "created task");
}

#[tokio::test]
async fn test_new_task_form_keeps_errors_and_escape_discards() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "rh@company.com").await;
    app.navigate(Section::Kanban).unwrap();
    press(&mut app, KeyCode::Char('l')).await;
    let count = app.kanban.board.as_ref().unwrap().tasks().len();

    press(&mut app, KeyCode::Char('n')).await;
    assert_eq!(app.kanban.form.as_ref().unwrap().status, TaskStatus::InProgress);
    press(&mut app, KeyCode::Enter).await;

    let form = app.kanban.form.as_ref().unwrap();
    assert!(form.error.as_deref().unwrap().contains("Title"));

    press(&mut app, KeyCode::Esc).await;
    assert!(app.kanban.form.is_none());
    assert_eq!(app.kanban.board.as_ref().unwrap().tasks().len(), count);
}

#[tokio::test]
async fn test_intern_is_offered_first_as_assignee() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    sign_in(&mut app, "stagiaire@company.com").await;
    app.navigate(Section::Kanban).unwrap();

    press(&mut app, KeyCode::Char('n')).await;
    let form = app.kanban.form.as_ref().unwrap();
    assert_eq!(form.selected_assignee(), Some("stg-001"));
}

#[tokio::test]
async fn test_run_loop_stops_on_ctrl_c() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(Event::Tick).unwrap();
    tx.send(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    let mut events = EventHandler::from_channel(rx);

    app.run_with(&mut terminal, &mut events).await.unwrap();
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_run_loop_ends_when_input_closes() {
    let dir = tempdir().unwrap();
    let mut app = new_app(&dir).await;
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();

    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    drop(tx);
    let mut events = EventHandler::from_channel(rx);

    app.run_with(&mut terminal, &mut events).await.unwrap();
    assert!(!app.should_quit);
}
