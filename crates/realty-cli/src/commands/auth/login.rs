use realty_forms::LoginForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::commands::shared::password;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = LoginForm {
        username: args.username.clone(),
        password: password::resolve(&args.password)?,
    };
    let session = ctx.session.submit_login(&form).await?;
    output(&session, flags.format)
}
