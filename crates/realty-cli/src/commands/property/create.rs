use realty_forms::PropertyForm;

use super::fields;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::PropertyFieldArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &PropertyFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_landlord()?;
    let form = fields::apply(args, PropertyForm::default());
    let property = ctx.client().submit_property(&form, session.id).await?;
    tracing::info!(id = property.id, "listing created");
    output(&property, flags.format)
}
