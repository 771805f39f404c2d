use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, PropertyCommands, UploadCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, register, and manage the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse and manage listings.
    Property {
        #[command(subcommand)]
        action: PropertyCommands,
    },
    /// List the agency's agents.
    Agents,
    /// Show client testimonials.
    Testimonials,
    /// Listings saved by the signed-in user.
    Saved,
    /// Upload images.
    Upload {
        #[command(subcommand)]
        action: UploadCommands,
    },
    /// Join the early-access waitlist.
    Waitlist(WaitlistArgs),
    /// Check a contact message (there is no endpoint to send it to).
    Contact(ContactArgs),
    /// Estimate the monthly mortgage payment for a price.
    Mortgage(MortgageArgs),
}

#[derive(Clone, Debug, Args)]
pub struct WaitlistArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    /// One of: residential, commercial, investment, international
    #[arg(long)]
    pub interest: String,
    /// Confirm agreement to the terms of service.
    #[arg(long)]
    pub agree_to_terms: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub message: String,
}

#[derive(Clone, Debug, Args)]
pub struct MortgageArgs {
    /// Property price.
    #[arg(long)]
    pub price: f64,
    /// Loan amount (defaults to 80% of the price, at most 90%).
    #[arg(long)]
    pub loan: Option<f64>,
    /// Annual interest rate in percent.
    #[arg(long)]
    pub rate: Option<f64>,
    /// Loan term in years (1-50).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub years: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct FileArgs {
    pub file: PathBuf,
}
