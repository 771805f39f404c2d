use crate::cli::GlobalFlags;
use crate::commands::shared::limit::take;
use crate::context::AppContext;
use crate::output::listings;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let properties = ctx.client().properties_by_owner(session.id).await?;
    listings(&take(properties, ctx.limit(flags)), flags.format)
}
