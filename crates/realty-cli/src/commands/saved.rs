use crate::cli::GlobalFlags;
use crate::commands::shared::limit::take;
use crate::context::AppContext;
use crate::output::listings;

/// Handle `realty saved`. Saved entries whose listing can no longer be
/// fetched are left out.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let properties = ctx.client().saved_properties(session.id).await?;
    listings(&take(properties, ctx.limit(flags)), flags.format)
}
