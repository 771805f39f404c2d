mod create;
mod featured;
mod fields;
mod get;
mod list;
mod mine;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PropertyCommands;
use crate::context::AppContext;

/// Handle `realty property <subcommand>`.
pub async fn handle(
    action: &PropertyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PropertyCommands::List(args) => list::handle(args, ctx, flags).await,
        PropertyCommands::Get(args) => get::handle(args.id, ctx, flags).await,
        PropertyCommands::Featured => featured::handle(ctx, flags).await,
        PropertyCommands::Mine => mine::handle(ctx, flags).await,
        PropertyCommands::Create(args) => create::handle(args, ctx, flags).await,
        PropertyCommands::Update(args) => update::handle(args, ctx, flags).await,
    }
}
