use super::{parse_date, parse_opt};
use crate::cli::{TaskAction, TaskCreateArgs, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use stagiaire_domain::{
    FieldUpdate, NewTask, StagiaireOperations, TaskFilter, TaskPriority, TaskStatus, TaskUpdate,
};

pub async fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::List {
            project,
            status,
            assignee,
        } => {
            let filter = TaskFilter {
                project_id: project,
                status: parse_opt::<TaskStatus>(status.as_deref())?,
                assigned_to: assignee,
            };
            output::output_list(ctx.list_tasks(filter)?);
        }
        TaskAction::Get { id } => output::output_success(ctx.get_task(&id)?),
        TaskAction::Create(args) => {
            let task = ctx.create_task(build_new_task(args)?)?;
            ctx.save().await?;
            output::output_success(&task);
        }
        TaskAction::Update(args) => {
            let updates = build_task_update(&args)?;
            let task = ctx.update_task(&args.id, updates)?;
            ctx.save().await?;
            output::output_success(&task);
        }
        TaskAction::Delete { id } => {
            ctx.delete_task(&id)?;
            ctx.save().await?;
            output::output_success(json!({ "deleted": id }));
        }
    }
    Ok(())
}

fn build_new_task(args: TaskCreateArgs) -> anyhow::Result<NewTask> {
    Ok(NewTask {
        priority: parse_opt::<TaskPriority>(args.priority.as_deref())?.unwrap_or(TaskPriority::Medium),
        status: parse_opt::<TaskStatus>(args.status.as_deref())?.unwrap_or(TaskStatus::Todo),
        due_date: args.due_date.as_deref().map(parse_date).transpose()?,
        title: args.title,
        description: args.description,
        project_id: args.project,
        assigned_to: args.assignee,
        labels: args.labels,
    })
}

fn build_task_update(args: &TaskUpdateArgs) -> anyhow::Result<TaskUpdate> {
    Ok(TaskUpdate {
        title: args.title.clone(),
        description: if args.clear_description {
            FieldUpdate::Clear
        } else {
            FieldUpdate::from_flag(args.description.clone())
        },
        status: parse_opt::<TaskStatus>(args.status.as_deref())?,
        assigned_to: args.assignee.clone(),
        priority: parse_opt::<TaskPriority>(args.priority.as_deref())?,
        due_date: if args.clear_due_date {
            FieldUpdate::Clear
        } else {
            match &args.due_date {
                Some(d) => FieldUpdate::Set(parse_date(d)?),
                None => FieldUpdate::NoChange,
            }
        },
        labels: (!args.labels.is_empty()).then(|| args.labels.clone()),
    })
}
