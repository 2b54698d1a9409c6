use crate::cli::SupervisorAction;
use crate::context::CliContext;
use crate::output;
use stagiaire_domain::{NewSupervisor, StagiaireOperations};

pub async fn handle(ctx: &mut CliContext, action: SupervisorAction) -> anyhow::Result<()> {
    match action {
        SupervisorAction::List => output::output_list(ctx.list_supervisors()?),
        SupervisorAction::Get { id } => output::output_success(ctx.get_supervisor(&id)?),
        SupervisorAction::Add(args) => {
            let supervisor = ctx.create_supervisor(NewSupervisor {
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                department: args.department,
                phone: args.phone,
                password: args.password,
            })?;
            ctx.save().await?;
            output::output_success(&supervisor);
        }
    }
    Ok(())
}
