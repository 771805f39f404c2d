use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let username = ctx.session.current().map(|session| session.username);
    ctx.session.logout();
    output(
        &json!({ "authenticated": false, "signedOut": username }),
        flags.format,
    )
}
