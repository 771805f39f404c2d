use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod notify;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("realty error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // Pure commands never touch config, storage, or the network.
    match &cli.command {
        cli::Commands::Mortgage(args) => return commands::mortgage::handle(args, &flags),
        cli::Commands::Contact(args) => return commands::contact::handle(args, &flags),
        _ => {}
    }

    let config = bootstrap::load_config()?;
    let ctx = context::AppContext::init(config, &flags).await?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("REALTY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
