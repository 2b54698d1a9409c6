use super::{parse_date, parse_opt};
use crate::cli::InternAction;
use crate::context::CliContext;
use crate::output;
use stagiaire_domain::{InternFilter, InternStatus, InternUpdate, NewIntern, StagiaireOperations};

pub async fn handle(ctx: &mut CliContext, action: InternAction) -> anyhow::Result<()> {
    match action {
        InternAction::List { department, status } => {
            let filter = InternFilter {
                department,
                status: parse_opt::<InternStatus>(status.as_deref())?,
            };
            output::output_list(ctx.list_interns(filter)?);
        }
        InternAction::Get { id } => {
            output::output_success(ctx.get_intern(&id)?);
        }
        InternAction::Add(args) => {
            let start_date = args.start_date.as_deref().map(parse_date).transpose()?;
            let intern = ctx.create_intern(NewIntern {
                name: args.name,
                email: args.email,
                department: args.department,
                start_date,
                supervisor_id: args.supervisor,
            })?;
            ctx.save().await?;
            output::output_success(&intern);
        }
        InternAction::Update(args) => {
            let updates = InternUpdate {
                name: args.name,
                department: args.department,
                status: parse_opt::<InternStatus>(args.status.as_deref())?,
                progress: args.progress,
            };
            let intern = ctx.update_intern(&args.id, updates)?;
            ctx.save().await?;
            output::output_success(&intern);
        }
    }
    Ok(())
}
