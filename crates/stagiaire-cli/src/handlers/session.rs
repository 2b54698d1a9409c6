use crate::context::CliContext;
use crate::output;
use chrono::{Local, Timelike};
use serde_json::json;
use stagiaire_domain::metrics::greeting;
use stagiaire_domain::StagiaireOperations;

pub async fn login(ctx: &mut CliContext, email: &str, password: &str) -> anyhow::Result<()> {
    let user = ctx.sign_in(email, password)?;
    ctx.storage.set_session_user_id(&user.id).await?;
    tracing::info!("Signed in as {}", user.id);
    output::output_success(&user);
    Ok(())
}

pub async fn logout(ctx: &mut CliContext) -> anyhow::Result<()> {
    let user = ctx.sign_out();
    ctx.storage.clear_session().await?;
    output::output_success(json!({ "signed_out": user.map(|u| u.id) }));
    Ok(())
}

pub fn whoami(ctx: &CliContext) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    output::output_success(&user);
    Ok(())
}

pub fn nav(ctx: &CliContext) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    let sections = ctx.sections()?;
    output::output_success(json!({
        "role": user.role,
        "sections": sections,
    }));
    Ok(())
}

pub fn dashboard(ctx: &CliContext, limit: Option<usize>) -> anyhow::Result<()> {
    let limit = limit.unwrap_or_else(|| ctx.config.effective_recent_activity_limit());
    let user = ctx.current_user()?;
    let metrics = ctx.dashboard_metrics()?;
    let cards: Vec<_> = metrics
        .labels()
        .iter()
        .zip(metrics.values())
        .map(|(label, value)| json!({ "label": label, "value": value }))
        .collect();
    let activity = ctx.recent_activity(limit)?;
    let unread = ctx.list_notifications()?.iter().filter(|n| !n.read).count();

    output::output_success(json!({
        "greeting": format!("{}, {}", greeting(Local::now().hour()), user.profile.first_name),
        "role": user.role,
        "metrics": metrics,
        "cards": cards,
        "recent_activity": activity,
        "unread_notifications": unread,
    }));
    Ok(())
}

pub fn stats(ctx: &CliContext) -> anyhow::Result<()> {
    let stats = ctx.report_stats(Local::now().date_naive())?;
    output::output_success(&stats);
    Ok(())
}

pub fn activity(ctx: &CliContext, limit: Option<usize>) -> anyhow::Result<()> {
    let limit = limit.unwrap_or_else(|| ctx.config.effective_recent_activity_limit());
    output::output_list(ctx.recent_activity(limit)?);
    Ok(())
}
