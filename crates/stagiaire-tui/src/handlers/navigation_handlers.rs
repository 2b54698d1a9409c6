use crate::app::App;
use crate::events::is_quit_key;
use crossterm::event::{KeyCode, KeyEvent};
use stagiaire_core::{SelectionState, StagiaireResult};
use stagiaire_domain::{InternFilter, Section, StagiaireOperations};

impl App {
    pub(crate) async fn handle_main_key(&mut self, key: KeyEvent) -> StagiaireResult<()> {
        if self.kanban.form.is_some() {
            return self.handle_task_form_key(key).await;
        }
        if is_quit_key(&key) {
            self.quit();
            return Ok(());
        }

        // The board owns esc, space and the arrows while a task is carried.
        if self.active_section() == Some(Section::Kanban) && self.handle_kanban_key(key).await? {
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.next_section()?,
            KeyCode::BackTab => self.prev_section()?,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_section_at(index)?;
            }
            KeyCode::Char('t') => self.toggle_theme().await?,
            KeyCode::Char('L') => self.sign_out().await?,
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.list_len()?;
                self.list_selection.next(len);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let len = self.list_len()?;
                self.list_selection.prev(len);
            }
            KeyCode::Char('r') if self.active_section() == Some(Section::Dashboard) => {
                let count = self.workspace.mark_all_notifications_read()?;
                self.persist().await?;
                self.status_message = Some(format!("{} notification(s) marked as read", count));
            }
            _ => {}
        }
        Ok(())
    }

    pub fn next_section(&mut self) -> StagiaireResult<()> {
        if let Some(navigator) = self.navigator.as_mut() {
            navigator.next();
        }
        self.on_section_changed()
    }

    pub fn prev_section(&mut self) -> StagiaireResult<()> {
        if let Some(navigator) = self.navigator.as_mut() {
            navigator.prev();
        }
        self.on_section_changed()
    }

    /// Digit shortcuts count over the role's permitted sections only.
    pub fn select_section_at(&mut self, index: usize) -> StagiaireResult<()> {
        let Some(navigator) = self.navigator.as_mut() else {
            return Ok(());
        };
        if let Some(section) = navigator.sections().get(index).copied() {
            navigator.navigate(section)?;
            self.on_section_changed()?;
        }
        Ok(())
    }

    pub fn navigate(&mut self, section: Section) -> StagiaireResult<()> {
        if let Some(navigator) = self.navigator.as_mut() {
            navigator.navigate(section)?;
        }
        self.on_section_changed()
    }

    fn on_section_changed(&mut self) -> StagiaireResult<()> {
        self.list_selection = SelectionState::first_of(self.list_len()?);
        if self.active_section() == Some(Section::Kanban) {
            self.open_current_board()?;
        }
        Ok(())
    }

    pub async fn toggle_theme(&mut self) -> StagiaireResult<()> {
        self.theme = self.theme.toggled();
        self.storage.set_theme(self.theme).await?;
        tracing::debug!("Theme switched to {}", self.theme);
        Ok(())
    }

    /// Row count of the table shown in the active section.
    pub fn list_len(&self) -> StagiaireResult<usize> {
        let len = match self.active_section() {
            Some(Section::Interns) => self.workspace.list_interns(InternFilter::default())?.len(),
            Some(Section::Supervisors) => self.workspace.list_supervisors()?.len(),
            Some(Section::Projects) => self.workspace.list_projects()?.len(),
            _ => 0,
        };
        Ok(len)
    }
}
