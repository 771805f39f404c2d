use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::root_commands::FileArgs;

/// Image upload commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UploadCommands {
    /// Upload a profile picture and attach it to the signed-in account.
    Profile(FileArgs),
    /// Upload listing photos and print their URLs.
    Property(UploadPropertyArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UploadPropertyArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Images already attached to the listing, counted against the limit.
    #[arg(long, default_value_t = 0)]
    pub attached: usize,
}
