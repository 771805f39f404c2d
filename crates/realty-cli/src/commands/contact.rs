use realty_forms::{ContactForm, Form};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ContactArgs;
use crate::output::output;

/// Handle `realty contact`. The message is checked but not sent: the
/// backend has no contact endpoint.
pub fn handle(args: &ContactArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        message: args.message.clone(),
    };
    let message = form.validate()?;
    output(&json!({ "valid": true, "sent": false, "message": message }), flags.format)
}
