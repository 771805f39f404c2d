use realty_forms::PropertyForm;

use super::fields;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::PropertyUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Fetch the listing, overlay the given flags, validate, and save.
pub async fn handle(
    args: &PropertyUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_landlord()?;
    let existing = ctx.client().get_property(args.id).await?;
    if existing.owner_id.is_some_and(|owner| owner != session.id) {
        anyhow::bail!("listing {} belongs to another account", args.id);
    }

    let form = fields::apply(&args.fields, PropertyForm::from(&existing));
    let property = ctx
        .client()
        .submit_property_update(args.id, &form, session.id)
        .await?;
    tracing::info!(id = property.id, "listing updated");
    output(&property, flags.format)
}
