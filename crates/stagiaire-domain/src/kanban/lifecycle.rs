//! Task placement rules.
//!
//! Pure functions over a task slice. A column is the set of tasks sharing a
//! project and a status; positions inside a column are kept at `0..n`.
//! Used by the board and by the commands so both agree on ordering.

use serde::Serialize;
use stagiaire_core::{StagiaireError, StagiaireResult};

use crate::task::{Task, TaskId, TaskStatus};

/// Direction for moving a task between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

impl std::str::FromStr for MoveDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(MoveDirection::Left),
            "right" | "r" => Ok(MoveDirection::Right),
            _ => Err(format!("Invalid direction '{}'. Valid values: left, right", s)),
        }
    }
}

/// Outcome of placing a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskMove {
    pub task_id: TaskId,
    pub from: TaskStatus,
    pub to: TaskStatus,
    pub position: i32,
}

impl TaskMove {
    pub fn changed_column(&self) -> bool {
        self.from != self.to
    }
}

/// Tasks of one column sorted by position.
pub fn column_tasks<'t>(tasks: &'t [Task], project_id: &str, status: TaskStatus) -> Vec<&'t Task> {
    let mut column: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.project_id == project_id && t.status == status)
        .collect();
    column.sort_by_key(|t| t.position);
    column
}

/// Append position for a column.
pub fn next_position(tasks: &[Task], project_id: &str, status: TaskStatus) -> i32 {
    tasks
        .iter()
        .filter(|t| t.project_id == project_id && t.status == status)
        .count() as i32
}

/// Renumbers a column to `0..n`, keeping relative order.
pub fn compact_column(tasks: &mut [Task], project_id: &str, status: TaskStatus) {
    let order: Vec<TaskId> = column_tasks(tasks, project_id, status)
        .into_iter()
        .map(|t| t.id.clone())
        .collect();
    renumber(tasks, &order);
}

fn renumber(tasks: &mut [Task], order: &[TaskId]) {
    for (position, id) in order.iter().enumerate() {
        if let Some(task) = tasks.iter_mut().find(|t| &t.id == id) {
            task.position = position as i32;
        }
    }
}

/// Moves a task into `to` at `index` (end of column when `None`, clamped
/// otherwise). The task's status becomes `to` unconditionally. Only the
/// source and target columns of the task's project are renumbered.
pub fn place_task(
    tasks: &mut [Task],
    task_id: &str,
    to: TaskStatus,
    index: Option<usize>,
) -> StagiaireResult<TaskMove> {
    let (project_id, from) = tasks
        .iter()
        .find(|t| t.id == task_id)
        .map(|t| (t.project_id.clone(), t.status))
        .ok_or_else(|| StagiaireError::not_found("Task", task_id))?;

    let mut order: Vec<TaskId> = column_tasks(tasks, &project_id, to)
        .into_iter()
        .filter(|t| t.id != task_id)
        .map(|t| t.id.clone())
        .collect();
    let position = index.unwrap_or(order.len()).min(order.len());
    order.insert(position, task_id.to_string());

    if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
        task.update_status(to);
    }
    renumber(tasks, &order);
    if from != to {
        compact_column(tasks, &project_id, from);
    }

    tracing::debug!(task_id, %from, %to, position, "task placed");
    Ok(TaskMove {
        task_id: task_id.to_string(),
        from,
        to,
        position: position as i32,
    })
}

/// Column next to `status` in board order, if any.
pub fn adjacent_status(status: TaskStatus, direction: MoveDirection) -> Option<TaskStatus> {
    let idx = status.column_index();
    let target = match direction {
        MoveDirection::Left => idx.checked_sub(1)?,
        MoveDirection::Right => idx + 1,
    };
    TaskStatus::ALL.get(target).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn positions(tasks: &[Task], project: &str, status: TaskStatus) -> Vec<(String, i32)> {
        column_tasks(tasks, project, status)
            .into_iter()
            .map(|t| (t.id.clone(), t.position))
            .collect()
    }

    #[test]
    fn test_place_at_end_compacts_source() {
        let mut tasks = fixtures::tasks();
        let mv = place_task(&mut tasks, "tsk-010", TaskStatus::Todo, None).unwrap();
        assert_eq!(mv.from, TaskStatus::Done);
        assert_eq!(mv.to, TaskStatus::Todo);
        assert_eq!(mv.position, 0);
        assert_eq!(
            positions(&tasks, "prj-004", TaskStatus::Done),
            vec![("tsk-011".to_string(), 0)]
        );
    }

    #[test]
    fn test_place_at_index_is_clamped() {
        let mut tasks = fixtures::tasks();
        let mv = place_task(&mut tasks, "tsk-002", TaskStatus::Todo, Some(99)).unwrap();
        assert_eq!(mv.position, 1);
        let mv = place_task(&mut tasks, "tsk-004", TaskStatus::Todo, Some(0)).unwrap();
        assert_eq!(mv.position, 0);
        assert_eq!(
            positions(&tasks, "prj-001", TaskStatus::Todo),
            vec![
                ("tsk-004".to_string(), 0),
                ("tsk-003".to_string(), 1),
                ("tsk-002".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_reorder_within_column() {
        let mut tasks = fixtures::tasks();
        let mv = place_task(&mut tasks, "tsk-011", TaskStatus::Done, Some(0)).unwrap();
        assert!(!mv.changed_column());
        assert_eq!(
            positions(&tasks, "prj-004", TaskStatus::Done),
            vec![("tsk-011".to_string(), 0), ("tsk-010".to_string(), 1)]
        );
    }

    #[test]
    fn test_other_tasks_keep_their_status() {
        let mut tasks = fixtures::tasks();
        let before: Vec<_> = tasks.iter().map(|t| (t.id.clone(), t.status)).collect();
        place_task(&mut tasks, "tsk-008", TaskStatus::Bug, None).unwrap();
        for (task, (id, status)) in tasks.iter().zip(before) {
            if id == "tsk-008" {
                assert_eq!(task.status, TaskStatus::Bug);
            } else {
                assert_eq!(task.status, status);
            }
        }
    }

    #[test]
    fn test_unknown_task() {
        let mut tasks = fixtures::tasks();
        assert!(matches!(
            place_task(&mut tasks, "tsk-404", TaskStatus::Done, None),
            Err(StagiaireError::NotFound(_))
        ));
    }

    #[test]
    fn test_adjacent_status() {
        assert_eq!(adjacent_status(TaskStatus::Todo, MoveDirection::Left), None);
        assert_eq!(
            adjacent_status(TaskStatus::Todo, MoveDirection::Right),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(
            adjacent_status(TaskStatus::Done, MoveDirection::Right),
            Some(TaskStatus::Bug)
        );
        assert_eq!(adjacent_status(TaskStatus::Bug, MoveDirection::Right), None);
    }
}
