use serde::Serialize;
use stagiaire_core::{StagiaireError, StagiaireResult};

use super::lifecycle::{self, MoveDirection, TaskMove};
use crate::project::{Project, ProjectId};
use crate::task::{Task, TaskId, TaskStatus};

/// Pointer state of an in-progress drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    /// Task picked up by `drag_start`.
    pub dragged: Option<TaskId>,
    /// Column currently hovered.
    pub over: Option<TaskStatus>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn<'a> {
    pub status: TaskStatus,
    pub title: &'static str,
    pub tasks: Vec<&'a Task>,
}

/// A project's board, working on a local copy of its tasks.
///
/// Moves made here are returned as [`TaskMove`]s; the caller commits them to
/// the shared dataset.
#[derive(Debug, Clone)]
pub struct KanbanBoard {
    project_id: ProjectId,
    tasks: Vec<Task>,
    drag: DragState,
}

impl KanbanBoard {
    pub fn open(project: &Project, tasks: &[Task]) -> Self {
        let mut tasks: Vec<Task> = tasks
            .iter()
            .filter(|t| t.project_id == project.id)
            .cloned()
            .collect();
        for status in TaskStatus::ALL {
            lifecycle::compact_column(&mut tasks, &project.id, status);
        }
        Self {
            project_id: project.id.clone(),
            tasks,
            drag: DragState::default(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn column(&self, status: TaskStatus) -> BoardColumn<'_> {
        BoardColumn {
            status,
            title: status.column_title(),
            tasks: lifecycle::column_tasks(&self.tasks, &self.project_id, status),
        }
    }

    pub fn columns(&self) -> Vec<BoardColumn<'_>> {
        TaskStatus::ALL.into_iter().map(|s| self.column(s)).collect()
    }

    pub fn drag_start(&mut self, task_id: &str) -> StagiaireResult<()> {
        if self.task(task_id).is_none() {
            return Err(StagiaireError::not_found("Task", task_id));
        }
        self.drag.dragged = Some(task_id.to_string());
        self.drag.over = None;
        Ok(())
    }

    pub fn drag_over(&mut self, status: TaskStatus) {
        self.drag.over = Some(status);
    }

    pub fn drag_leave(&mut self) {
        self.drag.over = None;
    }

    pub fn drag_end(&mut self) {
        self.drag = DragState::default();
    }

    /// Drops the dragged task at the end of `status`. Nothing is dragged: `None`.
    pub fn drop_on(&mut self, status: TaskStatus) -> StagiaireResult<Option<TaskMove>> {
        self.drop_into(status, None)
    }

    /// Drops the dragged task at `index` inside `status`.
    pub fn drop_at(&mut self, status: TaskStatus, index: usize) -> StagiaireResult<Option<TaskMove>> {
        self.drop_into(status, Some(index))
    }

    fn drop_into(
        &mut self,
        status: TaskStatus,
        index: Option<usize>,
    ) -> StagiaireResult<Option<TaskMove>> {
        let dragged = std::mem::take(&mut self.drag).dragged;
        match dragged {
            Some(task_id) => lifecycle::place_task(&mut self.tasks, &task_id, status, index).map(Some),
            None => Ok(None),
        }
    }

    /// Keyboard move to the adjacent column. `None` at the board edges.
    pub fn move_task(
        &mut self,
        task_id: &str,
        direction: MoveDirection,
    ) -> StagiaireResult<Option<TaskMove>> {
        let status = self
            .task(task_id)
            .map(|t| t.status)
            .ok_or_else(|| StagiaireError::not_found("Task", task_id))?;
        match lifecycle::adjacent_status(status, direction) {
            Some(target) => lifecycle::place_task(&mut self.tasks, task_id, target, None).map(Some),
            None => Ok(None),
        }
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn board(project_id: &str) -> KanbanBoard {
        let projects = fixtures::projects();
        let project = projects.iter().find(|p| p.id == project_id).unwrap();
        KanbanBoard::open(project, &fixtures::tasks())
    }

    #[test]
    fn test_open_keeps_only_project_tasks() {
        let board = board("prj-001");
        assert_eq!(board.tasks().len(), 4);
        let columns = board.columns();
        let titles: Vec<_> = columns.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done", "Bugs"]);
        assert_eq!(columns[0].tasks[0].id, "tsk-003");
    }

    #[test]
    fn test_drop_sets_status_of_dragged_task_only() {
        let mut board = board("prj-001");
        let before: Vec<_> = board.tasks().iter().map(|t| (t.id.clone(), t.status)).collect();

        board.drag_start("tsk-003").unwrap();
        board.drag_over(TaskStatus::Bug);
        let mv = board.drop_on(TaskStatus::Bug).unwrap().unwrap();

        assert_eq!(mv.from, TaskStatus::Todo);
        assert_eq!(mv.to, TaskStatus::Bug);
        assert_eq!(mv.position, 1);
        for (id, status) in before {
            let now = board.task(&id).unwrap().status;
            if id == "tsk-003" {
                assert_eq!(now, TaskStatus::Bug);
            } else {
                assert_eq!(now, status);
            }
        }
        assert_eq!(board.drag(), &DragState::default());
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut board = board("prj-001");
        board.drag_over(TaskStatus::Done);
        assert_eq!(board.drop_on(TaskStatus::Done).unwrap(), None);
        assert!(!board.drag().is_active());
    }

    #[test]
    fn test_drop_on_same_column_moves_to_end() {
        let mut board = board("prj-004");
        board.drag_start("tsk-010").unwrap();
        let mv = board.drop_on(TaskStatus::Done).unwrap().unwrap();
        assert!(!mv.changed_column());
        let ids: Vec<_> = board
            .column(TaskStatus::Done)
            .tasks
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tsk-011", "tsk-010"]);
    }

    #[test]
    fn test_drag_start_unknown_task() {
        let mut board = board("prj-001");
        assert!(board.drag_start("tsk-007").is_err());
        assert!(!board.drag().is_active());
    }

    #[test]
    fn test_drag_leave_and_end() {
        let mut board = board("prj-001");
        board.drag_start("tsk-001").unwrap();
        board.drag_over(TaskStatus::Todo);
        board.drag_leave();
        assert_eq!(board.drag().over, None);
        assert!(board.drag().is_active());
        board.drag_end();
        assert!(!board.drag().is_active());
    }

    #[test]
    fn test_drop_at_index() {
        let mut board = board("prj-001");
        board.drag_start("tsk-001").unwrap();
        let mv = board.drop_at(TaskStatus::Todo, 0).unwrap().unwrap();
        assert_eq!(mv.position, 0);
        let ids: Vec<_> = board
            .column(TaskStatus::Todo)
            .tasks
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tsk-001", "tsk-003"]);
    }

    #[test]
    fn test_move_task_stops_at_edges() {
        let mut board = board("prj-001");
        assert_eq!(board.move_task("tsk-003", MoveDirection::Left).unwrap(), None);
        let mv = board.move_task("tsk-003", MoveDirection::Right).unwrap().unwrap();
        assert_eq!(mv.to, TaskStatus::InProgress);
        assert_eq!(board.move_task("tsk-004", MoveDirection::Right).unwrap(), None);
    }
}
