use realty_forms::WaitlistForm;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WaitlistArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `realty waitlist`.
pub async fn handle(args: &WaitlistArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = WaitlistForm {
        full_name: args.full_name.clone(),
        email: args.email.clone(),
        property_interest: args.interest.clone(),
        agreed_to_terms: args.agree_to_terms,
    };
    let response = ctx.client().submit_waitlist(&form).await?;
    if !flags.quiet {
        eprintln!("Thank you for joining our waitlist! We'll be in touch soon.");
    }
    output(&response, flags.format)
}
