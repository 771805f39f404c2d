use realty_forms::ProfileForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthUpdateProfileArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthUpdateProfileArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = ProfileForm {
        full_name: args.full_name.clone(),
        bio: args.bio.clone(),
        phone_number: args.phone.clone(),
        profile_image: args.profile_image.clone(),
    };
    if form == ProfileForm::default() {
        anyhow::bail!("nothing to update; pass at least one of --full-name, --bio, --phone, --profile-image");
    }
    let current = ctx.require_session()?;
    let session = ctx.session.submit_profile(current.id, &form).await?;
    output(&session, flags.format)
}
