use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `realty` binary.
#[derive(Debug, Parser)]
#[command(name = "realty", version, about = "Realty - property listings from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress notifications and non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Flags command handlers need; `--verbose` only affects logging.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{AuthCommands, PropertyCommands, UploadCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "realty", "--format", "table", "--limit", "10", "--verbose", "agents",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Agents));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["realty", "testimonials", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Testimonials));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["realty", "--format", "xml", "agents"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["realty", "-l", "3", "-q", "saved"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.limit, Some(3));
        assert!(flags.quiet);
        assert_eq!(flags.format, OutputFormat::Json);
    }

    #[test]
    fn property_list_accepts_bucket_label() {
        let cli = Cli::try_parse_from([
            "realty",
            "property",
            "list",
            "--location",
            "Miami",
            "--price-range",
            "$5,000,000+",
        ])
        .expect("cli should parse");

        let Commands::Property {
            action: PropertyCommands::List(args),
        } = cli.command
        else {
            panic!("expected property list");
        };
        assert_eq!(args.location.as_deref(), Some("Miami"));
        assert_eq!(args.price_range.as_deref(), Some("$5,000,000+"));
    }

    #[test]
    fn price_bucket_conflicts_with_numeric_bounds() {
        let parsed = Cli::try_parse_from([
            "realty",
            "property",
            "list",
            "--price-range",
            "$5,000,000+",
            "--min-price",
            "100",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn login_password_sources_are_exclusive() {
        let parsed = Cli::try_parse_from([
            "realty",
            "auth",
            "login",
            "--username",
            "jdoe",
            "--password",
            "pw",
            "--password-stdin",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["realty", "auth", "login", "-u", "jdoe", "-p", "pw"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Login(_)
            }
        ));
    }

    #[test]
    fn password_stdin_needs_no_inline_value() {
        let cli = Cli::try_parse_from([
            "realty",
            "auth",
            "login",
            "-u",
            "jdoe",
            "--password-stdin",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert!(args.password.password_stdin);
        assert_eq!(args.password.password, None);
    }

    #[test]
    fn property_upload_takes_many_files() {
        let cli = Cli::try_parse_from(["realty", "upload", "property", "a.jpg", "b.png"])
            .expect("cli should parse");
        let Commands::Upload {
            action: UploadCommands::Property(args),
        } = cli.command
        else {
            panic!("expected property upload");
        };
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn mortgage_term_is_bounded() {
        for years in ["0", "51", "400000000"] {
            let parsed =
                Cli::try_parse_from(["realty", "mortgage", "--price", "500000", "--years", years]);
            assert!(parsed.is_err(), "--years {years} should be rejected");
        }

        let cli = Cli::try_parse_from(["realty", "mortgage", "--price", "500000", "--years", "50"])
            .expect("cli should parse");
        let Commands::Mortgage(args) = cli.command else {
            panic!("expected mortgage");
        };
        assert_eq!(args.years, Some(50));
    }

    #[test]
    fn waitlist_requires_terms_flag_to_be_explicit() {
        let cli = Cli::try_parse_from([
            "realty",
            "waitlist",
            "--full-name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--interest",
            "residential",
        ])
        .expect("cli should parse");
        let Commands::Waitlist(args) = cli.command else {
            panic!("expected waitlist");
        };
        assert!(!args.agree_to_terms);
    }
}
