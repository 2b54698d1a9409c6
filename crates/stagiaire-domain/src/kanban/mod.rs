//! Kanban board: four fixed status columns per project and the drag-and-drop
//! state machine that moves tasks between them.

pub mod board;
pub mod lifecycle;

pub use board::{BoardColumn, DragState, KanbanBoard};
pub use lifecycle::{MoveDirection, TaskMove};
