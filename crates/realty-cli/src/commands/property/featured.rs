use crate::cli::GlobalFlags;
use crate::commands::shared::limit::take;
use crate::context::AppContext;
use crate::output::listings;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let properties = ctx.client().featured_properties().await?;
    listings(&take(properties, ctx.limit(flags)), flags.format)
}
