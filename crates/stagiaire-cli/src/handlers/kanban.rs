use super::parse;
use crate::cli::KanbanAction;
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use stagiaire_domain::{MoveDirection, StagiaireOperations, TaskStatus};

pub async fn handle(ctx: &mut CliContext, action: KanbanAction) -> anyhow::Result<()> {
    match action {
        KanbanAction::Show { project } => {
            let project = ctx.get_project(&project)?;
            let board = ctx.open_board(&project.id)?;
            output::output_success(json!({
                "project": project,
                "columns": board.columns(),
            }));
        }
        KanbanAction::Drop {
            task,
            column,
            position,
        } => {
            let status = parse::<TaskStatus>(&column)?;
            let task_move = ctx.drop_task(&task, status, position)?;
            ctx.save().await?;
            let task = ctx.get_task(&task)?;
            output::output_success(json!({ "move": task_move, "task": task }));
        }
        KanbanAction::Move { task, direction } => {
            let direction = parse::<MoveDirection>(&direction)?;
            let task_move = ctx.move_task(&task, direction)?;
            if task_move.is_some() {
                ctx.save().await?;
            }
            let task = ctx.get_task(&task)?;
            output::output_success(json!({ "move": task_move, "task": task }));
        }
    }
    Ok(())
}
