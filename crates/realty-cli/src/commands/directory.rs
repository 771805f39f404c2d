use crate::cli::GlobalFlags;
use crate::commands::shared::limit::take;
use crate::context::AppContext;
use crate::output::output;

/// Handle `realty agents`.
pub async fn agents(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let agents = ctx.client().agents().await?;
    output(&take(agents, ctx.limit(flags)), flags.format)
}

/// Handle `realty testimonials`.
pub async fn testimonials(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let testimonials = ctx.client().testimonials().await?;
    output(&take(testimonials, ctx.limit(flags)), flags.format)
}
