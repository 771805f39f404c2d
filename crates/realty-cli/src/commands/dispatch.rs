use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Property { action } => commands::property::handle(&action, ctx, flags).await,
        Commands::Agents => commands::directory::agents(ctx, flags).await,
        Commands::Testimonials => commands::directory::testimonials(ctx, flags).await,
        Commands::Saved => commands::saved::handle(ctx, flags).await,
        Commands::Upload { action } => commands::upload::handle(&action, ctx, flags).await,
        Commands::Waitlist(args) => commands::waitlist::handle(&args, ctx, flags).await,
        Commands::Contact(args) => commands::contact::handle(&args, flags),
        Commands::Mortgage(args) => commands::mortgage::handle(&args, flags),
    }
}
