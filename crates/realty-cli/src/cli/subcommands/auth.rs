use clap::{Args, Subcommand, ValueEnum};
use realty_core::enums::UserType;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in and store the session.
    Login(AuthLoginArgs),
    /// Create an account and sign in.
    Register(AuthRegisterArgs),
    /// Forget the stored session.
    Logout,
    /// Show the stored session, verified against the backend.
    Status,
    /// Change profile fields of the signed-in account.
    UpdateProfile(AuthUpdateProfileArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(short, long)]
    pub username: String,
    #[command(flatten)]
    pub password: PasswordArgs,
}

/// Password given inline, prompted for, or read from the first line of piped stdin.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct PasswordArgs {
    #[arg(short, long)]
    pub password: Option<String>,
    /// Prompt for the password on a terminal, or read it from piped stdin.
    #[arg(long)]
    pub password_stdin: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(short, long)]
    pub username: String,
    #[command(flatten)]
    pub password: PasswordArgs,
    /// Repeat of the password; defaults to the password itself.
    #[arg(long)]
    pub confirm_password: Option<String>,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long, value_enum, default_value = "rent-and-buy")]
    pub account: AccountKind,
    #[arg(long)]
    pub phone: Option<String>,
}

/// Command-line spelling of [`UserType`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AccountKind {
    RentAndBuy,
    LandlordAndSell,
}

impl From<AccountKind> for UserType {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::RentAndBuy => Self::RentAndBuy,
            AccountKind::LandlordAndSell => Self::LandlordAndSell,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct AuthUpdateProfileArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    /// New bio; pass an empty string to clear it.
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// URL of an already uploaded profile image.
    #[arg(long)]
    pub profile_image: Option<String>,
}
