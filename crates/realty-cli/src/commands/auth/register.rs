use realty_core::enums::UserType;
use realty_forms::RegistrationForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::commands::shared::password;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = registration_form(args, password::resolve(&args.password)?);
    let session = ctx.session.submit_registration(&form).await?;
    output(&session, flags.format)
}

/// Without `--confirm-password` the password confirms itself.
fn registration_form(args: &AuthRegisterArgs, password: String) -> RegistrationForm {
    RegistrationForm {
        username: args.username.clone(),
        confirm_password: args
            .confirm_password
            .clone()
            .unwrap_or_else(|| password.clone()),
        password,
        email: args.email.clone(),
        full_name: args.full_name.clone(),
        user_type: UserType::from(args.account).as_str().to_string(),
        phone_number: args.phone.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use realty_forms::Form;

    use super::registration_form;
    use crate::cli::subcommands::AuthCommands;
    use crate::cli::{Cli, Commands};

    fn parse(extra: &[&str]) -> crate::cli::subcommands::AuthRegisterArgs {
        let mut argv = vec![
            "realty",
            "auth",
            "register",
            "-u",
            "jdoe",
            "-p",
            "secret1",
            "--email",
            "jdoe@example.com",
            "--full-name",
            "Jane Doe",
        ];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Register(args),
        } = cli.command
        else {
            panic!("expected auth register");
        };
        args
    }

    #[test]
    fn confirmation_defaults_to_password() {
        let args = parse(&["--account", "landlord-and-sell"]);
        let form = registration_form(&args, "secret1".into());
        assert_eq!(form.confirm_password, "secret1");
        assert_eq!(form.user_type, "Landlord & Sell");

        let request = form.validate().expect("form should validate");
        assert_eq!(request.phone_number, None);
    }

    #[test]
    fn explicit_mismatch_fails_locally() {
        let args = parse(&["--confirm-password", "other12"]);
        let errors = registration_form(&args, "secret1".into())
            .validate()
            .unwrap_err();
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }
}
