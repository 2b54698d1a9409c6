use crate::app::{App, TaskForm, TaskFormField};
use crossterm::event::{KeyCode, KeyEvent};
use stagiaire_core::StagiaireResult;
use stagiaire_domain::{StagiaireOperations, TaskStatus, Visibility};

impl App {
    /// Board keys. Returns false when the key is left to the global bindings.
    pub(crate) async fn handle_kanban_key(&mut self, key: KeyEvent) -> StagiaireResult<bool> {
        if self.kanban.is_dragging() {
            match key.code {
                KeyCode::Char('h') | KeyCode::Left => self.hover_column(false),
                KeyCode::Char('l') | KeyCode::Right => self.hover_column(true),
                KeyCode::Char(' ') | KeyCode::Enter => self.drop_dragged().await?,
                KeyCode::Esc => self.cancel_drag(),
                _ => return Ok(false),
            }
            return Ok(true);
        }

        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.focus_column(false),
            KeyCode::Char('l') | KeyCode::Right => self.focus_column(true),
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.kanban.focused_len();
                self.kanban.selection.next(len);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let len = self.kanban.focused_len();
                self.kanban.selection.prev(len);
            }
            KeyCode::Char(' ') => self.pick_up_selected()?,
            KeyCode::Char('n') => self.open_task_form()?,
            KeyCode::Char('[') => self.switch_project(false)?,
            KeyCode::Char(']') => self.switch_project(true)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Reloads the board of the project at `kanban.project_index` from the
    /// workspace, clamping the index to the visible projects.
    pub fn open_current_board(&mut self) -> StagiaireResult<()> {
        let projects = self.workspace.list_projects()?;
        if projects.is_empty() {
            self.kanban.board = None;
            self.kanban.selection.clear();
            return Ok(());
        }

        self.kanban.project_index = self.kanban.project_index.min(projects.len() - 1);
        let project_id = &projects[self.kanban.project_index].id;
        self.kanban.board = Some(self.workspace.open_board(project_id)?);
        let len = self.kanban.focused_len();
        self.kanban.selection.clamp(len);
        Ok(())
    }

    pub fn switch_project(&mut self, forward: bool) -> StagiaireResult<()> {
        let count = self.workspace.list_projects()?.len();
        if count == 0 {
            return Ok(());
        }
        let current = self.kanban.project_index.min(count - 1);
        self.kanban.project_index = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.kanban.selection.clear();
        self.open_current_board()
    }

    fn focus_column(&mut self, right: bool) {
        let last = TaskStatus::ALL.len() - 1;
        self.kanban.column = if right {
            (self.kanban.column + 1).min(last)
        } else {
            self.kanban.column.saturating_sub(1)
        };
        self.kanban.selection.set(None);
        let len = self.kanban.focused_len();
        self.kanban.selection.clamp(len);
    }

    pub fn pick_up_selected(&mut self) -> StagiaireResult<()> {
        let Some(task_id) = self.kanban.selected_task_id() else {
            self.status_message = Some("No task selected".to_string());
            return Ok(());
        };
        let status = self.kanban.focused_status();
        if let Some(board) = self.kanban.board.as_mut() {
            board.drag_start(&task_id)?;
            board.drag_over(status);
            let title = board.task(&task_id).map(|t| t.title.clone()).unwrap_or_default();
            self.status_message = Some(format!(
                "Carrying {}: h/l choose a column, space drops, esc cancels",
                title
            ));
        }
        Ok(())
    }

    fn hover_column(&mut self, right: bool) {
        self.focus_column(right);
        let status = self.kanban.focused_status();
        if let Some(board) = self.kanban.board.as_mut() {
            board.drag_over(status);
        }
    }

    pub fn cancel_drag(&mut self) {
        if let Some(board) = self.kanban.board.as_mut() {
            board.drag_end();
        }
        self.status_message = None;
    }

    /// Drops the carried task on the focused column and commits the move.
    pub async fn drop_dragged(&mut self) -> StagiaireResult<()> {
        let status = self.kanban.focused_status();
        let Some(board) = self.kanban.board.as_mut() else {
            return Ok(());
        };
        let Some(local) = board.drop_on(status)? else {
            return Ok(());
        };

        let position = usize::try_from(local.position).ok();
        let committed = self.workspace.drop_task(&local.task_id, local.to, position);
        // The board copy is rebuilt from the workspace whether or not the
        // commit went through.
        self.open_current_board()?;
        let committed = committed?;
        self.persist().await?;

        let title = self.workspace.get_task(&committed.task_id)?.title;
        tracing::info!(
            "Moved {} from {} to {}",
            committed.task_id,
            committed.from,
            committed.to
        );
        self.status_message = Some(format!("Moved {} to {}", title, committed.to.column_title()));
        self.select_task(&committed.task_id);
        Ok(())
    }

    fn select_task(&mut self, task_id: &str) {
        let Some(board) = self.kanban.board.as_ref() else {
            return;
        };
        for (column, status) in TaskStatus::ALL.into_iter().enumerate() {
            if let Some(index) = board.column(status).tasks.iter().position(|t| t.id == task_id) {
                self.kanban.column = column;
                self.kanban.selection.set(Some(index));
                return;
            }
        }
    }

    /// Opens the new-task popup on the focused column.
    pub fn open_task_form(&mut self) -> StagiaireResult<()> {
        let Some(board) = self.kanban.board.as_ref() else {
            return Ok(());
        };
        let project = self.workspace.get_project(board.project_id())?;
        let visibility = self.workspace.visibility()?;

        // Own interns first; a supervisor is offered nobody else.
        let mut assignees: Vec<String> = project
            .assigned_interns
            .iter()
            .filter(|id| !matches!(visibility, Visibility::Supervised(_)) || visibility.sees_intern(id))
            .cloned()
            .collect();
        assignees.sort_by_key(|id| !visibility.sees_intern(id));

        if assignees.is_empty() {
            self.status_message = Some(format!("{} has no intern to assign", project.title));
            return Ok(());
        }
        self.kanban.form = Some(TaskForm::new(
            project.id,
            self.kanban.focused_status(),
            assignees,
        ));
        Ok(())
    }

    /// Every key goes to the form while it is open, `q` included.
    pub(crate) async fn handle_task_form_key(&mut self, key: KeyEvent) -> StagiaireResult<()> {
        let Some(form) = self.kanban.form.as_mut() else {
            return Ok(());
        };
        match key.code {
            KeyCode::Esc => self.kanban.form = None,
            KeyCode::Enter => self.submit_task_form().await?,
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left => form.shift(false),
            KeyCode::Right => form.shift(true),
            KeyCode::Backspace if form.focus == TaskFormField::Title => form.title.backspace(),
            KeyCode::Char(c) if form.focus == TaskFormField::Title => form.title.insert_char(c),
            _ => {}
        }
        Ok(())
    }

    async fn submit_task_form(&mut self) -> StagiaireResult<()> {
        let Some(form) = self.kanban.form.as_mut() else {
            return Ok(());
        };
        let task = match self.workspace.create_task(form.to_new_task()) {
            Ok(task) => task,
            Err(err) => {
                tracing::debug!("Task form rejected: {}", err);
                form.error = Some(err.to_string());
                return Ok(());
            }
        };

        self.kanban.form = None;
        self.persist().await?;
        tracing::info!("Created {} in {}", task.id, task.project_id);
        self.open_current_board()?;
        self.select_task(&task.id);
        self.status_message = Some(format!("Created {}", task.title));
        Ok(())
    }
}
