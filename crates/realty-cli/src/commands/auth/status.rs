use realty_core::enums::UserType;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<i64>,
    username: Option<String>,
    full_name: Option<String>,
    user_type: Option<UserType>,
    can_manage_listings: bool,
    backend: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.current();
    let status = AuthStatusResponse {
        authenticated: session.is_some(),
        user_id: session.as_ref().map(|s| s.id),
        username: session.as_ref().map(|s| s.username.clone()),
        full_name: session.as_ref().and_then(|s| s.full_name.clone()),
        user_type: session.as_ref().map(|s| s.user_type),
        can_manage_listings: ctx.session.is_landlord(),
        backend: ctx.client().origin().to_string(),
    };
    output(&status, flags.format)
}
