use crate::cli::NotificationAction;
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use stagiaire_domain::StagiaireOperations;

pub async fn handle(ctx: &mut CliContext, action: NotificationAction) -> anyhow::Result<()> {
    match action {
        NotificationAction::List => output::output_list(ctx.list_notifications()?),
        NotificationAction::Read { id } => {
            let notification = ctx.mark_notification_read(&id)?;
            ctx.save().await?;
            output::output_success(&notification);
        }
        NotificationAction::ReadAll => {
            let count = ctx.mark_all_notifications_read()?;
            ctx.save().await?;
            output::output_success(json!({ "marked_read": count }));
        }
    }
    Ok(())
}
