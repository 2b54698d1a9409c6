pub mod intern;
pub mod kanban;
pub mod notification;
pub mod project;
pub mod session;
pub mod settings;
pub mod supervisor;
pub mod task;

use crate::cli::Commands;
use crate::context::CliContext;
use chrono::NaiveDate;
use std::str::FromStr;

pub async fn dispatch(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    if !matches!(command, Commands::Login { .. }) {
        ctx.require_session()?;
    }

    match command {
        Commands::Login { email, password } => session::login(ctx, &email, &password).await,
        Commands::Logout => session::logout(ctx).await,
        Commands::Whoami => session::whoami(ctx),
        Commands::Nav => session::nav(ctx),
        Commands::Dashboard { limit } => session::dashboard(ctx, limit),
        Commands::Stats => session::stats(ctx),
        Commands::Activity { limit } => session::activity(ctx, limit),
        Commands::Intern(cmd) => intern::handle(ctx, cmd.action).await,
        Commands::Supervisor(cmd) => supervisor::handle(ctx, cmd.action).await,
        Commands::Project(cmd) => project::handle(ctx, cmd.action).await,
        Commands::Task(cmd) => task::handle(ctx, cmd.action).await,
        Commands::Kanban(cmd) => kanban::handle(ctx, cmd.action).await,
        Commands::Notification(cmd) => notification::handle(ctx, cmd.action).await,
        Commands::Settings(cmd) => settings::handle(ctx, cmd.action).await,
        Commands::Completions { .. } => Ok(()),
    }
}

pub(crate) fn parse<T: FromStr<Err = String>>(value: &str) -> anyhow::Result<T> {
    value.parse::<T>().map_err(|e| anyhow::anyhow!(e))
}

pub(crate) fn parse_opt<T: FromStr<Err = String>>(value: Option<&str>) -> anyhow::Result<Option<T>> {
    value.map(parse).transpose()
}

pub(crate) fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagiaire_domain::TaskStatus;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse::<TaskStatus>("in-progress").unwrap(), TaskStatus::InProgress);
        assert!(parse::<TaskStatus>("later").is_err());
        assert_eq!(parse_opt::<TaskStatus>(None).unwrap(), None);
        assert_eq!(
            parse_date("2024-06-30").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
        let err = parse_date("30/06/2024").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date '30/06/2024'. Expected YYYY-MM-DD");
    }
}
