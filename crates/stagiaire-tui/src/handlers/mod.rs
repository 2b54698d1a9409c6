pub mod kanban_handlers;
pub mod login_handlers;
pub mod navigation_handlers;
