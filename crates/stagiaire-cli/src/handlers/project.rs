use super::{parse_date, parse_opt};
use crate::cli::{ProjectAction, ProjectUpdateArgs};
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use stagiaire_domain::{FieldUpdate, NewProject, ProjectStatus, ProjectUpdate, StagiaireOperations};

pub async fn handle(ctx: &mut CliContext, action: ProjectAction) -> anyhow::Result<()> {
    match action {
        ProjectAction::List => output::output_list(ctx.list_projects()?),
        ProjectAction::Get { id } => output::output_success(ctx.get_project(&id)?),
        ProjectAction::Create(args) => {
            let project = ctx.create_project(NewProject {
                title: args.title,
                description: args.description,
                due_date: Some(parse_date(&args.due_date)?),
                assigned_interns: args.interns,
            })?;
            ctx.save().await?;
            output::output_success(&project);
        }
        ProjectAction::Update(args) => {
            let updates = build_project_update(&args)?;
            let project = ctx.update_project(&args.id, updates)?;
            ctx.save().await?;
            output::output_success(&project);
        }
        ProjectAction::Delete { id } => {
            ctx.delete_project(&id)?;
            ctx.save().await?;
            output::output_success(json!({ "deleted": id }));
        }
    }
    Ok(())
}

fn build_project_update(args: &ProjectUpdateArgs) -> anyhow::Result<ProjectUpdate> {
    Ok(ProjectUpdate {
        title: args.title.clone(),
        description: if args.clear_description {
            FieldUpdate::Clear
        } else {
            FieldUpdate::from_flag(args.description.clone())
        },
        status: parse_opt::<ProjectStatus>(args.status.as_deref())?,
        assigned_interns: (!args.interns.is_empty()).then(|| args.interns.clone()),
        completion: args.completion,
        due_date: args.due_date.as_deref().map(parse_date).transpose()?,
    })
}
