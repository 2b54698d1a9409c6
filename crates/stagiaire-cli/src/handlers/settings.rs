use super::parse;
use crate::cli::SettingsAction;
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use stagiaire_core::Theme;
use stagiaire_domain::{ProfileUpdate, StagiaireOperations};
use stagiaire_persistence::{image_data_url, PROFILE_IMAGE_KEY};

pub async fn handle(ctx: &mut CliContext, action: SettingsAction) -> anyhow::Result<()> {
    match action {
        SettingsAction::Profile {
            first_name,
            last_name,
            phone,
            department,
        } => {
            let user = ctx.update_profile(ProfileUpdate {
                first_name,
                last_name,
                department,
                phone,
                avatar_url: None,
            })?;
            ctx.save().await?;
            output::output_success(&user);
        }
        SettingsAction::Theme { value } => {
            let theme = match value.as_deref() {
                None => ctx.theme(),
                Some("toggle") => ctx.theme().toggled(),
                Some(value) => parse::<Theme>(value)?,
            };
            if value.is_some() {
                ctx.storage.set_theme(theme).await?;
            }
            output::output_success(json!({ "theme": theme }));
        }
        SettingsAction::Avatar { image, clear } => {
            if let Some(path) = image {
                let data_url = image_data_url(&path).await?;
                ctx.storage.set_profile_image(data_url).await?;
                tracing::info!("Profile image set from {}", path.display());
            } else if clear {
                ctx.storage.remove(PROFILE_IMAGE_KEY).await?;
            }
            output::output_success(json!({ "profile_image": ctx.storage.profile_image() }));
        }
    }
    Ok(())
}
