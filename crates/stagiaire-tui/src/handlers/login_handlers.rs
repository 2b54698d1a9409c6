use crate::app::{App, LoginForm, Screen};
use crossterm::event::{KeyCode, KeyEvent};
use stagiaire_core::StagiaireResult;
use stagiaire_domain::StagiaireOperations;

impl App {
    pub(crate) async fn handle_login_key(&mut self, key: KeyEvent) -> StagiaireResult<()> {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_focus();
            }
            KeyCode::Enter => self.submit_login().await?,
            KeyCode::Backspace => self.login.focused_input().backspace(),
            KeyCode::Left => self.login.focused_input().move_left(),
            KeyCode::Right => self.login.focused_input().move_right(),
            KeyCode::Char(c) => self.login.focused_input().insert_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Signs in with the form contents. A failed attempt shows the error
    /// under the form and clears the password.
    pub async fn submit_login(&mut self) -> StagiaireResult<()> {
        let email = self.login.email.as_str().trim().to_string();
        let password = self.login.password.as_str().to_string();

        match self.workspace.sign_in(&email, &password) {
            Ok(user) => {
                tracing::info!("Signed in as {}", user.id);
                self.storage.set_session_user_id(&user.id).await?;
                self.status_message = Some(format!("Welcome, {}", user.display_name()));
                self.enter_main();
            }
            Err(err) => {
                tracing::debug!("Sign-in refused for {}", email);
                self.login.error = Some(err.to_string());
                self.login.password.clear();
            }
        }
        Ok(())
    }

    pub async fn sign_out(&mut self) -> StagiaireResult<()> {
        if let Some(user) = self.workspace.sign_out() {
            tracing::info!("Signed out {}", user.id);
        }
        self.storage.clear_session().await?;
        self.navigator = None;
        self.login = LoginForm::new();
        self.kanban = Default::default();
        self.status_message = None;
        self.screen = Screen::Login;
        Ok(())
    }
}
